//! Terminal calculator application state

use ratatui::layout::Rect;
use tracing::trace;

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::command::Command;
use crate::core::format::format_number;
use crate::core::{Calculator, EngineConfig};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    last_command: Option<Command>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with default engine limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with custom engine limits
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            ..Self::default()
        }
    }

    /// The engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The on-screen keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Last command fed to the engine
    #[must_use]
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds a command and lights up its keypad button
    pub fn press(&mut self, command: Command) {
        self.calculator.apply(command);
        self.keypad.highlight(command);
        self.last_command = Some(command);
    }

    /// Applies a mapped key press
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.press(command),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button under a mouse click; `keypad_area` is where
    /// the keypad was last drawn. Returns whether a button was hit.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> bool {
        match self.keypad.command_at(keypad_area, x, y) {
            Some(command) => {
                trace!(?command, x, y, "keypad click");
                self.press(command);
                true
            }
            None => false,
        }
    }

    /// Display text as the engine reports it
    #[must_use]
    pub fn display_text(&self) -> String {
        self.calculator.current_display()
    }

    /// Pending left operand and operator, e.g. `"12 +"`
    #[must_use]
    pub fn expression_hint(&self) -> String {
        match (
            self.calculator.accumulator(),
            self.calculator.pending_operation(),
        ) {
            (Some(acc), Some(op)) => {
                let acc = format_number(acc, self.calculator.config().display_precision);
                format!("{acc} {op}")
            }
            _ => String::new(),
        }
    }
}
