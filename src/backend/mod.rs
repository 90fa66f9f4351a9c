//! Backend Module
//!
//! This module contains all server-side code: an Axum REST API over SQLite
//! that stores tasks, expenses and moods for registered users.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route wiring, CORS and tracing layers
//! - **`auth`** - Users, bearer tokens, CAPTCHA and the auth handlers
//! - **`middleware`** - Token gate and registration rate limiter
//! - **`resources`** - Per-user tasks, expenses and moods
//! - **`error`** - `BackendError` and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - daylog-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── resources/      - Tasks, expenses, moods
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Protected requests pass the auth middleware, which resolves the bearer
//! token to a user and attaches it to the request. Resource handlers read
//! that user and scope every statement to it.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Per-user resource collections
#[cfg(feature = "ssr")]
pub mod resources;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use routes::create_router;
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
