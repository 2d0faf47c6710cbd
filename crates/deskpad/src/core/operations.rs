//! Arithmetic table injected into the engine
//!
//! Operators are a closed enum so every dispatch site is checked for
//! exhaustiveness.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator awaiting its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Every operator, in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the name used by button `data-op` attributes
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Looks an operator up by its `data-op` name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Looks an operator up by its symbol
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Table of binary operations the engine evaluates pending expressions with
pub trait Arithmetic: std::fmt::Debug {
    /// Applies `op` to `a` and `b`
    fn apply(&self, op: Operation, a: f64, b: f64) -> CalcResult<f64>;
}

/// IEEE-754 arithmetic where only division by zero fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardArithmetic;

impl StandardArithmetic {
    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}

impl Arithmetic for StandardArithmetic {
    fn apply(&self, op: Operation, a: f64, b: f64) -> CalcResult<f64> {
        match op {
            Operation::Add => Ok(Self::add(a, b)),
            Operation::Subtract => Ok(Self::subtract(a, b)),
            Operation::Multiply => Ok(Self::multiply(a, b)),
            Operation::Divide => Self::divide(a, b),
        }
    }
}
