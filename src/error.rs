//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Transaction kind is not "income" or "expense"
    #[error("Invalid kind: '{0}' (expected 'income' or 'expense')")]
    InvalidKind(String),

    /// Amount text does not parse as a decimal value
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// Date text does not match YYYY-MM-DD or denotes an impossible date
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Validation errors outside single-record construction
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendlogError {
    /// Check if this is a record-construction failure
    ///
    /// These are local to a single record and never abort a batch import.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKind(_) | Self::InvalidAmount(_) | Self::InvalidDate(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendlogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
