//! Custom error types for the expenditure tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Rejected user input
///
/// This is the only domain error the ledger knows about. A rejected submit
/// never mutates the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The amount text was empty or whitespace only
    #[error("Amount is required")]
    EmptyAmount,

    /// The amount text is not a non-negative whole number
    #[error("Invalid amount: '{0}' is not a whole number")]
    InvalidAmount(String),

    /// The description was empty or whitespace only
    #[error("Description is required")]
    EmptyDescription,
}

/// The main error type for expenditure tracker operations
#[derive(Error, Debug)]
pub enum ExpenditureError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input
    #[error(transparent)]
    Input(#[from] InputError),
}

impl From<std::io::Error> for ExpenditureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenditureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expenditure tracker operations
pub type ExpenditureResult<T> = Result<T, ExpenditureError>;
