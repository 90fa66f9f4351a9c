//! Shared Error Types
//!
//! This module defines error types that are shared between the client and backend.
//! These errors represent failures that can be detected on either side of the wire,
//! before a request is sent or before a payload is persisted.
//!
//! # Error Categories
//!
//! - `ValidationError` - Payload validation failures (missing or malformed fields)
//!
//! # Usage
//!
//! ```rust
//! use daylog::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("title", "title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Payload validation error
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

    /// Shorthand for the "`<field>` is required" validation error
    pub fn required(field: &str) -> Self {
        Self::validation(field, format!("{} is required", field))
    }

    /// The message without the field prefix, suitable for API responses
    pub fn detail(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
