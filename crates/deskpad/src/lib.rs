//! deskpad - button-driven calculator engine and note-card board
//!
//! The heart of the crate is [`Calculator`], an input-state machine that
//! turns discrete button presses into a display string. Operators chain
//! strictly left to right and the only visible failure is division by zero,
//! shown as `Error` until the next digit or clear.
//!
//! # Example
//!
//! ```rust
//! use deskpad::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for command in Command::parse_sequence("2+3*4=").unwrap() {
//!     calc.apply(command);
//! }
//! assert_eq!(calc.current_display(), "20");
//!
//! calc.apply(Command::Clear);
//! calc.digit('5');
//! calc.set_operation(Operation::Divide);
//! calc.digit('0');
//! calc.equals();
//! assert!(calc.is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cards;
pub mod command;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::command::{ButtonData, Command, InputError};
pub use crate::core::{
    Arithmetic, CalcError, CalcResult, Calculator, DisplayValue, EngineConfig, Operation,
    StandardArithmetic,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cards::{Card, CardBoard, CardError, CardFilter, Category, EmptyState};
    pub use crate::command::{ButtonData, Command, InputError};
    pub use crate::core::format::{format_number, parse_operand};
    pub use crate::core::{
        Arithmetic, CalcError, CalcResult, Calculator, DisplayValue, EngineConfig, Operation,
        StandardArithmetic,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
