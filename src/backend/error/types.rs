/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the API. Every handler returns
 * `Result<_, BackendError>` and the error is converted into a JSON response
 * by the `conversion` module.
 *
 * # Error Categories
 *
 * - `Unauthenticated` - missing, malformed or expired bearer token (401)
 * - `NotFound` - the record does not exist or belongs to someone else (404)
 * - `Validation` - malformed body, bad CAPTCHA, duplicate username (400)
 * - `RateLimited` - too many registration attempts from one address (429)
 * - `Database` / `Internal` - anything unexpected (500, generic message)
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::captcha::CaptchaError;
use crate::shared::SharedError;

/// Message returned to callers for every unexpected failure
pub const GENERIC_SERVER_ERROR: &str = "Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use daylog::backend::error::BackendError;
///
/// let err = BackendError::not_found("Task not found");
/// assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request carries no usable identity
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Human-readable error message
        message: String,
    },

    /// The record is absent or not owned by the caller.
    ///
    /// Both causes produce the same response.
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The request was understood but rejected
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// The caller exhausted its registration allowance
    #[error("Rate limited: {message}")]
    RateLimited {
        /// Human-readable error message
        message: String,
    },

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs; never sent to the caller
        message: String,
    },
}

impl BackendError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Validation` - 400 Bad Request
    /// - `RateLimited` - 429 Too Many Requests
    /// - `Database` / `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the caller.
    ///
    /// Server-side failures are reduced to [`GENERIC_SERVER_ERROR`].
    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated { message }
            | Self::NotFound { message }
            | Self::Validation { message }
            | Self::RateLimited { message } => message.clone(),
            Self::Database(_) | Self::Internal { .. } => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        Self::validation(err.detail())
    }
}

impl From<CaptchaError> for BackendError {
    fn from(err: CaptchaError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}
