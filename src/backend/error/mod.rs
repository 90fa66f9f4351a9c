//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! its conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Disclosure
//!
//! `NotFound` is returned both for unknown ids and for records owned by
//! another user, so callers cannot probe for other users' data. Database
//! and internal failures are logged and answered with a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, GENERIC_SERVER_ERROR};
