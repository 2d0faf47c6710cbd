//! Keyboard mapping for the terminal calculator

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a command to the engine
    Command(Command),
    /// Leave the app
    Quit,
    /// Key with no binding
    None,
}

/// Maps crossterm key events to [`KeyAction`]s
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l' | 'u') => KeyAction::Command(Command::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => Command::from_key_char(c).map_or(KeyAction::None, KeyAction::Command),
            KeyCode::Enter => KeyAction::Command(Command::Equals),
            KeyCode::Backspace => KeyAction::Command(Command::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Command(Command::Clear),
            _ => KeyAction::None,
        }
    }
}
