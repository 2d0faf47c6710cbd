//! Terminal front end for the calculator
//!
//! Key presses and mouse clicks become [`crate::Command`]s; the engine state
//! is drawn with ratatui after every event.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
