//! Input-state machine behind the calculator buttons
//!
//! Every command is total: out-of-sequence or unparseable input is absorbed
//! as a no-op, and division by zero becomes the `Error` display sentinel.

use tracing::{debug, trace};

use crate::command::Command;
use crate::core::format::format_number;
use crate::core::{Arithmetic, CalcError, DisplayValue, EngineConfig, Operation, StandardArithmetic};

/// Button-driven calculator session
///
/// Operators chain left to right: `2 + 3 * 4` evaluates `2 + 3` when `*`
/// is pressed, then multiplies by 4.
#[derive(Debug, Clone)]
pub struct Calculator<A: Arithmetic = StandardArithmetic> {
    /// What the screen shows
    display: DisplayValue,
    /// Left-hand operand of the pending operation
    accumulator: Option<f64>,
    /// Operator waiting for its second operand
    pending: Option<Operation>,
    /// Next digit starts a new number instead of extending the display
    start_fresh: bool,
    config: EngineConfig,
    arithmetic: A,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with standard arithmetic and default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a calculator with standard arithmetic and custom limits
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_arithmetic(StandardArithmetic, config)
    }
}

impl<A: Arithmetic> Calculator<A> {
    /// Creates a calculator that evaluates with the given arithmetic table
    #[must_use]
    pub fn with_arithmetic(arithmetic: A, config: EngineConfig) -> Self {
        Self {
            display: DisplayValue::default(),
            accumulator: None,
            pending: None,
            start_fresh: false,
            config,
            arithmetic,
        }
    }

    // ===== Queries =====

    /// Text to render on screen: a number or `"Error"`
    #[must_use]
    pub fn current_display(&self) -> String {
        self.display.as_str().to_string()
    }

    /// Stored left-hand operand
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Operator awaiting a second operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending
    }

    /// Whether the next digit starts a new number
    #[must_use]
    pub fn is_start_fresh(&self) -> bool {
        self.start_fresh
    }

    /// Whether the error sentinel is showing
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// Engine limits in effect
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ===== Commands =====

    /// Runs one command
    pub fn apply(&mut self, command: Command) {
        trace!(?command, "applying command");
        match command {
            Command::Digit(d) => self.digit(d),
            Command::DecimalPoint => self.decimal_point(),
            Command::Backspace => self.backspace(),
            Command::Clear => self.clear(),
            Command::SetOperation(op) => self.set_operation(op),
            Command::Equals => self.equals(),
        }
    }

    /// Enters a digit `'0'..='9'`; anything else is ignored
    pub fn digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            trace!(?d, "ignoring non-digit");
            return;
        }
        if self.start_fresh {
            self.display = DisplayValue::default();
            self.start_fresh = false;
        }

        let mut text = self.take_entry();
        if text == "0" {
            text.clear();
        }
        if text.len() < self.config.max_input_len {
            text.push(d);
        } else {
            debug!(limit = self.config.max_input_len, "display full, digit dropped");
        }
        self.display = DisplayValue::Entry(text);
    }

    /// Enters a decimal point; a second point in the same number is a no-op
    ///
    /// A point that would not fit within `max_input_len`, including the
    /// `"0."` that starts a new number, leaves the state untouched.
    pub fn decimal_point(&mut self) {
        let starts_number = self.start_fresh || self.display.is_empty() || self.is_error();
        let candidate = if starts_number {
            "0.".to_string()
        } else if self.display.as_str().contains('.') {
            return;
        } else {
            format!("{}.", self.display.as_str())
        };

        if candidate.len() > self.config.max_input_len {
            debug!(limit = self.config.max_input_len, "display full, decimal point dropped");
            return;
        }
        self.display = DisplayValue::Entry(candidate);
        self.start_fresh = false;
    }

    /// Removes the last typed character
    pub fn backspace(&mut self) {
        if self.start_fresh {
            return;
        }
        if let DisplayValue::Entry(text) = &mut self.display {
            text.pop();
        }
    }

    /// Returns the engine to its initial state
    pub fn clear(&mut self) {
        self.display = DisplayValue::default();
        self.accumulator = None;
        self.pending = None;
        self.start_fresh = false;
    }

    /// Selects the operator for the next operand, evaluating any complete
    /// pending expression first
    pub fn set_operation(&mut self, op: Operation) {
        if self.display.is_empty() && self.accumulator.is_some() {
            self.pending = Some(op);
            return;
        }

        let Some(current) = self.display.to_number() else {
            trace!(%op, "no operand on display, operator ignored");
            return;
        };

        if self.accumulator.is_none() {
            self.begin_expression(current, op);
            return;
        }

        if self.start_fresh {
            self.pending = Some(op);
            return;
        }

        // A number typed after `=` has no operator to combine with
        let (Some(first), Some(pending)) = (self.accumulator, self.pending) else {
            self.begin_expression(current, op);
            return;
        };

        match self.arithmetic.apply(pending, first, current) {
            Ok(result) => {
                self.show_result(result);
                self.accumulator = Some(result);
                self.pending = Some(op);
            }
            Err(err) => {
                self.show_error(err);
                self.accumulator = None;
                self.pending = None;
            }
        }
        self.start_fresh = true;
    }

    /// Evaluates the pending expression ("equals")
    pub fn equals(&mut self) {
        let (Some(first), Some(pending)) = (self.accumulator, self.pending) else {
            return;
        };
        if self.start_fresh {
            return;
        }
        let Some(second) = self.display.to_number() else {
            trace!("second operand unparseable, equals ignored");
            return;
        };

        match self.arithmetic.apply(pending, first, second) {
            Ok(result) => {
                self.show_result(result);
                self.accumulator = Some(result);
            }
            Err(err) => {
                self.show_error(err);
                self.accumulator = None;
            }
        }
        self.pending = None;
        self.start_fresh = true;
    }

    // ===== Helpers =====

    /// Takes the typed text out of the display; the error sentinel yields an empty entry
    fn take_entry(&mut self) -> String {
        match std::mem::take(&mut self.display) {
            DisplayValue::Entry(text) => text,
            DisplayValue::Error => String::new(),
        }
    }

    fn begin_expression(&mut self, operand: f64, op: Operation) {
        self.accumulator = Some(operand);
        self.pending = Some(op);
        self.start_fresh = true;
    }

    fn show_result(&mut self, result: f64) {
        let text = format_number(result, self.config.display_precision);
        debug!(result = %text, "evaluated");
        self.display = DisplayValue::Entry(text);
    }

    fn show_error(&mut self, err: CalcError) {
        debug!(%err, "evaluation failed");
        self.display = DisplayValue::Error;
    }
}
