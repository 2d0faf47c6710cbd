//! Command handlers - extracted from main.rs for testability
//!
//! Line-oriented handlers write to any `io::Write` so tests can capture
//! their output.

pub mod cards;
pub mod keys;
pub mod tui;

pub use cards::{execute_cards, filtered_board, parse_category};
pub use keys::{execute_keys, replay, KeyStep, KeysReport};
pub use tui::{execute_tui, run_app};
