//! Card collection manager
//!
//! Cards live only in memory. The board owns them together with the active
//! search/category filter and answers the questions a card grid needs:
//! what to show, in what order, and what to say when nothing is shown.

mod board;
mod category;

pub use board::{Card, CardBoard, CardFilter, EmptyState};
pub use category::Category;

use thiserror::Error;

/// Result type for card operations
pub type CardResult<T> = Result<T, CardError>;

/// Card board errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A required text field was blank after trimming
    #[error("Card {field} must not be empty")]
    EmptyField {
        /// Name of the blank field
        field: &'static str,
    },
}
