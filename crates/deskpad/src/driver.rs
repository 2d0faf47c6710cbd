//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run on every
//! front end: the bare engine and the terminal app.
//!
//! ```rust
//! use deskpad::driver::verify_chaining;
//! use deskpad::Calculator;
//!
//! let mut calc = Calculator::new();
//! verify_chaining(&mut calc);
//! assert_eq!(calc.current_display(), "");
//! ```

use crate::command::{Command, InputError};
use crate::core::{Arithmetic, Calculator, Operation};

/// Anything that accepts calculator commands and shows a display
pub trait CalculatorDriver {
    /// Feeds one command
    fn press(&mut self, command: Command);

    /// Text currently on the display
    fn display(&self) -> String;

    /// Returns to the initial state
    fn reset(&mut self);

    /// Feeds a whole key script such as `"2+3="`
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] if the script contains an unbound key; no
    /// command is fed in that case.
    fn press_keys(&mut self, script: &str) -> Result<(), InputError> {
        for command in Command::parse_sequence(script)? {
            self.press(command);
        }
        Ok(())
    }
}

impl<A: Arithmetic> CalculatorDriver for Calculator<A> {
    fn press(&mut self, command: Command) {
        self.apply(command);
    }

    fn display(&self) -> String {
        self.current_display()
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// Terminal front-end driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalculatorDriver, Command};
    use crate::tui::CalculatorApp;

    /// Drives the terminal app the way keypad presses would
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// The underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, command: Command) {
            self.app.press(command);
        }

        fn display(&self) -> String {
            self.app.display_text()
        }

        fn reset(&mut self) {
            self.app.press(Command::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each scenario leaves the driver reset.

fn run_keys<D: CalculatorDriver>(driver: &mut D, script: &str) {
    let result = driver.press_keys(script);
    assert!(result.is_ok(), "scenario script {script:?} rejected: {result:?}");
}

/// Digits concatenate, and a lone leading zero is replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "123");
    assert_eq!(driver.display(), "123");
    driver.reset();

    run_keys(driver, "07");
    assert_eq!(driver.display(), "7");
    driver.reset();
}

/// A second decimal point in the same number is ignored
pub fn verify_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "3..14");
    assert_eq!(driver.display(), "3.14");
    driver.reset();

    run_keys(driver, ".5");
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// Each operator evaluates with `=`
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (script, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        run_keys(driver, script);
        assert_eq!(driver.display(), expected, "{script}");
        driver.reset();
    }
}

/// Operators evaluate strictly left to right
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "2+3*");
    assert_eq!(driver.display(), "5");
    run_keys(driver, "4=");
    assert_eq!(driver.display(), "20");
    driver.reset();
}

/// The last operator pressed wins
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "7+-2=");
    assert_eq!(driver.display(), "5");
    driver.reset();
}

/// Division by zero shows `Error`, `=` leaves it, clear recovers
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "5/0=");
    assert_eq!(driver.display(), "Error");
    driver.press(Command::Equals);
    assert_eq!(driver.display(), "Error");
    driver.press(Command::SetOperation(Operation::Add));
    assert_eq!(driver.display(), "Error");
    driver.press(Command::Clear);
    assert_eq!(driver.display(), "");
    driver.reset();
}

/// Backspace right after an operator does nothing
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "9+<");
    assert_eq!(driver.display(), "9");
    driver.reset();

    run_keys(driver, "456<");
    assert_eq!(driver.display(), "45");
    driver.reset();
}

/// Equals with nothing pending leaves the display alone
pub fn verify_equals_without_operator<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "4=");
    assert_eq!(driver.display(), "4");
    driver.reset();
}

/// A result can feed the next operation, and a digit after a result starts over
pub fn verify_result_reuse<D: CalculatorDriver>(driver: &mut D) {
    run_keys(driver, "6*7=-2=");
    assert_eq!(driver.display(), "40");
    run_keys(driver, "8");
    assert_eq!(driver.display(), "8");
    driver.reset();
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_point(driver);
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_operator_replacement(driver);
    verify_divide_by_zero(driver);
    verify_backspace(driver);
    verify_equals_without_operator(driver);
    verify_result_reuse(driver);
}
