//! Custom error types for Expensify Lite
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// The record field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Note,
    Amount,
    Category,
    Date,
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// The main error type for Expensify Lite operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A submitted record was rejected; the ledger is unchanged
    #[error("Invalid {field}: {message}")]
    Validation {
        field: ExpenseField,
        message: String,
    },

    /// Identity is not registered
    #[error("Email not found: {identity}")]
    NotFound { identity: String },

    /// Identity exists but the secret does not match
    #[error("Incorrect password for {identity}")]
    WrongSecret { identity: String },

    /// Identity is already registered
    #[error("Email already registered: {identity}")]
    AlreadyExists { identity: String },

    /// Registration input was blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password hashing or verification failures
    #[error("Credential error: {0}")]
    Credential(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a validation error for a record field
    pub fn validation(field: ExpenseField, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a "not found" error for an identity
    pub fn identity_not_found(identity: impl Into<String>) -> Self {
        Self::NotFound {
            identity: identity.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The failing field, if this is a validation error
    pub fn validation_field(&self) -> Option<ExpenseField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Expensify Lite operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = ExpenseError::validation(ExpenseField::Amount, "must be at least 1.00");
        assert_eq!(err.to_string(), "Invalid amount: must be at least 1.00");
        assert!(err.is_validation());
        assert_eq!(err.validation_field(), Some(ExpenseField::Amount));
    }

    #[test]
    fn test_not_found_error() {
        let err = ExpenseError::identity_not_found("nobody@x.com");
        assert_eq!(err.to_string(), "Email not found: nobody@x.com");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }
}
