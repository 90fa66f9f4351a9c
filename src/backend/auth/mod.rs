//! Authentication Module
//!
//! User registration, login and bearer token management.
//!
//! # Architecture
//!
//! - **`users`** - User model and database operations
//! - **`sessions`** - Token issuance and verification
//! - **`captcha`** - Arithmetic challenge checked at registration
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: CAPTCHA + username + password → user created → token returned
//! 2. **Login**: username + password → credentials verified → token returned
//! 3. **Me**: token → user info returned
//!
//! Tokens expire 30 days after issuance. Nothing is revoked server-side.

/// User data model and database operations
pub mod users;

/// Bearer token generation and validation
pub mod sessions;

/// Registration CAPTCHA
pub mod captcha;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{TokenError, TokenService};
