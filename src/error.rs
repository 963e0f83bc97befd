//! Error types for Spare Gold Core.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for Spare Gold operations
pub type SpareResult<T> = Result<T, SpareError>;

/// Main error type for Spare Gold operations
#[derive(Error, Debug)]
pub enum SpareError {
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Storage operation failed: {0}")]
    StorageOperation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl SpareError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SpareError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        SpareError::Auth(message.into())
    }

    /// Create a new storage operation error
    pub fn storage_op(message: impl Into<String>) -> Self {
        SpareError::StorageOperation(message.into())
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        SpareError::NotFound(message.into())
    }
}

/// Validation error with field and message
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SpareError {
    fn from(err: ValidationError) -> Self {
        SpareError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("price", "must be a number");
        assert_eq!(err.to_string(), "price: must be a number");
    }

    #[test]
    fn test_spare_error_validation() {
        let err = SpareError::validation("name", "cannot be empty");
        assert!(matches!(err, SpareError::Validation { .. }));
    }

    #[test]
    fn test_not_found_display() {
        let err = SpareError::not_found("no company with id abc");
        assert_eq!(err.to_string(), "Not found: no company with id abc");
    }
}
