//! Scientific Calculator
//!
//! An interactive console calculator offering five two-operand arithmetic
//! operations and an in-memory, capacity-bounded store of the results
//! computed during the session.

pub mod format;
pub mod input;
pub mod menu;
pub mod operations;
pub mod results;

// Re-export core types for convenience
pub use crate::error::{CalcError, Result};
pub use format::format_value;
pub use input::TokenReader;
pub use menu::{Menu, MenuSelection, SessionState};
pub use operations::{power, Operation};
pub use results::{Listing, ResultStore, DEFAULT_CAPACITY};

/// Core error handling types for the calculator
pub mod error {
    use thiserror::Error;

    /// Result type for calculator operations
    pub type Result<T> = std::result::Result<T, CalcError>;

    /// Every condition the calculator reports to the user
    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum CalcError {
        // Menu input errors
        #[error("Invalid option.")]
        InvalidSelection(i32),
        #[error("Please enter a valid number.")]
        InvalidSelectionFormat(String),

        // Arithmetic errors
        #[error("Division by zero is not allowed.")]
        DivisionByZero,

        // Result store errors
        #[error("Memory full, cannot store more results.")]
        StoreFull { capacity: usize },

        // Operand input errors
        #[error("Please enter a valid number.")]
        InvalidOperand(String),

        // Console errors
        #[error("Input closed")]
        InputClosed,
        #[error("I/O error: {0}")]
        Io(String),
    }

    impl From<std::io::Error> for CalcError {
        fn from(err: std::io::Error) -> Self {
            CalcError::Io(err.to_string())
        }
    }
}
