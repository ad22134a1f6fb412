//! Shared Error Types
//!
//! Error types that do not belong to a single layer of the client. These are
//! failures that can be detected without talking to the server.
//!
//! # Error Categories
//!
//! - `ValidationError` - A form field failed client-side validation
//!
//! # Usage
//!
//! ```rust
//! use movie_catalog::shared::error::SharedError;
//!
//! let error = SharedError::validation("year", "Year must be a whole number");
//! assert!(error.to_string().contains("year"));
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("rating", "Rating must be between 1 and 5");
        assert_eq!(error.field(), Some("rating"));
        let SharedError::ValidationError { field, message } = error;
        assert_eq!(field, "rating");
        assert_eq!(message, "Rating must be between 1 and 5");
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("title", "Title is required");
        let display = format!("{}", error);
        assert!(display.contains("'title'"));
        assert!(display.contains("Title is required"));
    }
}
