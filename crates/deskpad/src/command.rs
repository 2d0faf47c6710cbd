//! Input adapter: raw button data and key characters to engine commands

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operation;

/// A single discrete input understood by [`crate::Calculator::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    /// Digit key `'0'..='9'`
    Digit(char),
    /// Decimal point key
    DecimalPoint,
    /// Remove the last typed character
    Backspace,
    /// Reset everything
    Clear,
    /// Operator key
    SetOperation(Operation),
    /// Evaluate the pending expression
    Equals,
}

/// Errors from parsing key scripts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Character with no key binding
    #[error("Unknown key {key:?} at position {position}")]
    UnknownKey {
        /// Offending character
        key: char,
        /// Character index in the script
        position: usize,
    },
}

impl Command {
    /// Maps a keyboard character to a command
    #[must_use]
    pub fn from_key_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c)),
            '.' | ',' => Some(Self::DecimalPoint),
            'x' | 'X' => Some(Self::SetOperation(Operation::Multiply)),
            '=' | '\n' | '\r' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '<' | '\x08' => Some(Self::Backspace),
            _ => Operation::from_symbol(c).map(Self::SetOperation),
        }
    }

    /// Maps a button's data attributes to a command
    #[must_use]
    pub fn from_button(data: &ButtonData) -> Option<Self> {
        if let Some(num) = data.num.as_deref() {
            return num
                .chars()
                .next()
                .filter(char::is_ascii_digit)
                .map(Self::Digit);
        }

        match data.action.as_deref() {
            Some("decimal") => return Some(Self::DecimalPoint),
            Some("backspace") => return Some(Self::Backspace),
            _ => {}
        }

        if let Some(op) = data.op.as_deref() {
            return Operation::from_name(op).map(Self::SetOperation);
        }

        match data.action.as_deref() {
            Some("equals") => Some(Self::Equals),
            Some("clear") => Some(Self::Clear),
            _ => None,
        }
    }

    /// Parses a key script such as `"12+3*4="` into commands.
    ///
    /// Spaces and tabs are skipped. Newlines count as equals.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownKey`] for the first character with no
    /// key binding.
    pub fn parse_sequence(script: &str) -> Result<Vec<Self>, InputError> {
        script
            .chars()
            .enumerate()
            .filter(|(_, c)| !matches!(c, ' ' | '\t'))
            .map(|(position, key)| {
                Self::from_key_char(key).ok_or(InputError::UnknownKey { key, position })
            })
            .collect()
    }

    /// Short label used in step-by-step output
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
            Self::SetOperation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// Data attributes carried by a calculator button
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonData {
    /// `data-num`: the digit a number button enters
    pub num: Option<String>,
    /// `data-op`: operator name (`add`, `subtract`, `multiply`, `divide`)
    pub op: Option<String>,
    /// `data-action`: `decimal`, `backspace`, `equals` or `clear`
    pub action: Option<String>,
}

impl ButtonData {
    /// Number button
    #[must_use]
    pub fn num(digit: impl Into<String>) -> Self {
        Self {
            num: Some(digit.into()),
            ..Self::default()
        }
    }

    /// Operator button
    #[must_use]
    pub fn op(name: impl Into<String>) -> Self {
        Self {
            op: Some(name.into()),
            ..Self::default()
        }
    }

    /// Action button
    #[must_use]
    pub fn action(name: impl Into<String>) -> Self {
        Self {
            action: Some(name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_key_char =====

    #[test]
    fn test_key_digits() {
        for d in '0'..='9' {
            assert_eq!(Command::from_key_char(d), Some(Command::Digit(d)));
        }
    }

    #[test]
    fn test_key_decimal_variants() {
        assert_eq!(Command::from_key_char('.'), Some(Command::DecimalPoint));
        assert_eq!(Command::from_key_char(','), Some(Command::DecimalPoint));
    }

    #[test]
    fn test_key_operators() {
        assert_eq!(
            Command::from_key_char('+'),
            Some(Command::SetOperation(Operation::Add))
        );
        assert_eq!(
            Command::from_key_char('-'),
            Some(Command::SetOperation(Operation::Subtract))
        );
        assert_eq!(
            Command::from_key_char('*'),
            Some(Command::SetOperation(Operation::Multiply))
        );
        assert_eq!(
            Command::from_key_char('x'),
            Some(Command::SetOperation(Operation::Multiply))
        );
        assert_eq!(
            Command::from_key_char('/'),
            Some(Command::SetOperation(Operation::Divide))
        );
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(Command::from_key_char('='), Some(Command::Equals));
        assert_eq!(Command::from_key_char('\n'), Some(Command::Equals));
        assert_eq!(Command::from_key_char('c'), Some(Command::Clear));
        assert_eq!(Command::from_key_char('C'), Some(Command::Clear));
        assert_eq!(Command::from_key_char('<'), Some(Command::Backspace));
        assert_eq!(Command::from_key_char('\x08'), Some(Command::Backspace));
    }

    #[test]
    fn test_key_unknown() {
        assert_eq!(Command::from_key_char('^'), None);
        assert_eq!(Command::from_key_char('a'), None);
    }

    // ===== from_button =====

    #[test]
    fn test_button_num() {
        assert_eq!(
            Command::from_button(&ButtonData::num("7")),
            Some(Command::Digit('7'))
        );
    }

    #[test]
    fn test_button_num_not_digit() {
        assert_eq!(Command::from_button(&ButtonData::num("x")), None);
        assert_eq!(Command::from_button(&ButtonData::num("")), None);
    }

    #[test]
    fn test_button_actions() {
        assert_eq!(
            Command::from_button(&ButtonData::action("decimal")),
            Some(Command::DecimalPoint)
        );
        assert_eq!(
            Command::from_button(&ButtonData::action("backspace")),
            Some(Command::Backspace)
        );
        assert_eq!(
            Command::from_button(&ButtonData::action("equals")),
            Some(Command::Equals)
        );
        assert_eq!(
            Command::from_button(&ButtonData::action("clear")),
            Some(Command::Clear)
        );
        assert_eq!(Command::from_button(&ButtonData::action("percent")), None);
    }

    #[test]
    fn test_button_ops() {
        for op in Operation::ALL {
            assert_eq!(
                Command::from_button(&ButtonData::op(op.name())),
                Some(Command::SetOperation(op))
            );
        }
        assert_eq!(Command::from_button(&ButtonData::op("power")), None);
    }

    #[test]
    fn test_button_priority_num_first() {
        let data = ButtonData {
            num: Some("3".into()),
            op: Some("add".into()),
            action: Some("clear".into()),
        };
        assert_eq!(Command::from_button(&data), Some(Command::Digit('3')));
    }

    #[test]
    fn test_button_priority_decimal_over_op() {
        let data = ButtonData {
            num: None,
            op: Some("add".into()),
            action: Some("decimal".into()),
        };
        assert_eq!(Command::from_button(&data), Some(Command::DecimalPoint));
    }

    #[test]
    fn test_button_priority_op_over_equals() {
        let data = ButtonData {
            num: None,
            op: Some("divide".into()),
            action: Some("equals".into()),
        };
        assert_eq!(
            Command::from_button(&data),
            Some(Command::SetOperation(Operation::Divide))
        );
    }

    #[test]
    fn test_button_empty() {
        assert_eq!(Command::from_button(&ButtonData::default()), None);
    }

    // ===== parse_sequence =====

    #[test]
    fn test_parse_sequence() {
        let commands = Command::parse_sequence("12 + 3=").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Digit('1'),
                Command::Digit('2'),
                Command::SetOperation(Operation::Add),
                Command::Digit('3'),
                Command::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_empty() {
        assert_eq!(Command::parse_sequence("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_sequence_unknown_key_position() {
        let err = Command::parse_sequence("1 + a").unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownKey {
                key: 'a',
                position: 4
            }
        );
        assert_eq!(err.to_string(), "Unknown key 'a' at position 4");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Command::Digit('4').label(), "4");
        assert_eq!(Command::SetOperation(Operation::Divide).label(), "/");
        assert_eq!(Command::Backspace.label(), "⌫");
    }

    #[test]
    fn test_command_serde() {
        let json = serde_json::to_string(&Command::SetOperation(Operation::Add)).unwrap();
        assert_eq!(json, r#"{"command":"set_operation","value":"add"}"#);
        let json = serde_json::to_string(&Command::Equals).unwrap();
        assert_eq!(json, r#"{"command":"equals"}"#);
    }
}
