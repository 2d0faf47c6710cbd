//! Calculator core: display model, arithmetic table and the input-state engine
//!
//! The engine never fails on user input. Division by zero is the only error
//! the user can see, and it shows up as the [`DisplayValue::Error`] sentinel.

mod engine;
pub mod format;
mod operations;

pub use engine::Calculator;
pub use operations::{Arithmetic, Operation, StandardArithmetic};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic errors surfaced by an [`Arithmetic`] table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Right-hand operand of a division was zero
    #[error("Division by zero")]
    DivisionByZero,
}

/// What the calculator screen currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum DisplayValue {
    /// A number being typed or a formatted result; empty means nothing entered yet
    Entry(String),
    /// Sentinel shown after a division by zero
    Error,
}

impl DisplayValue {
    /// Text rendered for the error sentinel
    pub const ERROR_TEXT: &'static str = "Error";

    /// The text a UI should render
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entry(text) => text,
            Self::Error => Self::ERROR_TEXT,
        }
    }

    /// True when nothing has been entered (the error sentinel is not empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Entry(text) if text.is_empty())
    }

    /// True when showing the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Parses the display as an operand; `None` for empty, error or non-finite text
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Entry(text) => format::parse_operand(text),
            Self::Error => None,
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::Entry(String::new())
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::Entry(text.to_string())
    }
}

/// Engine tuning, usually loaded from the `engine` section of the CLI config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Longest display text that digit or decimal-point input may produce
    pub max_input_len: usize,
    /// Fractional digits kept when showing results; `None` shows full precision
    pub display_precision: Option<u32>,
}

impl EngineConfig {
    /// Default limit on typed display length
    pub const DEFAULT_MAX_INPUT_LEN: usize = 32;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the typed-input length limit
    #[must_use]
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Rounds displayed results to `digits` fractional digits
    #[must_use]
    pub fn with_display_precision(mut self, digits: u32) -> Self {
        self.display_precision = Some(digits);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
            display_precision: None,
        }
    }
}
