//! Custom error types for budgetbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed or out-of-range input; the operation was rejected and
    /// nothing was mutated
    #[error("Validation error: {0}")]
    Validation(String),

    /// The durable store could not be written; the in-memory mutation that
    /// triggered the write was rolled back
    #[error("I/O error: {0}")]
    Io(String),

    /// The durable store exists but could not be parsed into the expected
    /// shape at load time
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Configuration-related errors (e.g. the data file path could not
    /// be resolved)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a corrupt-data error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Validation("amount must be positive".into());
        assert_eq!(err.to_string(), "Validation error: amount must be positive");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }

    #[test]
    fn test_corrupt_data_check() {
        let err = LedgerError::CorruptData("unexpected token".into());
        assert!(err.is_corrupt_data());
        assert!(!err.is_validation());
    }
}
