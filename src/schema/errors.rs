//! Validation error type

use thiserror::Error;

/// Result type for request validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A request body field that failed its constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        self.field
    }
}
