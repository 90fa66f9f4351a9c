//! daylog - Main Library
//!
//! daylog is a personal productivity tracker: registered users keep daily
//! tasks, expenses and moods behind a token-authenticated REST API, and a
//! client layer mirrors those collections locally.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Task, expense and mood records, request payloads
//!   - Date and time helpers
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server over SQLite
//!   - Registration with CAPTCHA and rate limiting, login, bearer tokens
//!   - Per-user tasks, expenses and moods
//!
//! - **`client`** - Async API client
//!   - Persisted session and resource caches
//!   - Local budget ledger and notifications
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `daylog-server` binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use daylog::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app(&ServerConfig::from_env()).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use daylog::client::{ClientConfig, ClientContext};
//!
//! # async fn example() -> Result<(), daylog::client::ClientError> {
//! let mut context = ClientContext::open(ClientConfig::from_env())?;
//! context.login("ada", "secret").await?;
//! context.moods_mut().set("2024-03-01", 4).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation
//! - `backend::BackendError` for HTTP responses
//! - `client::ClientError` for client operations

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// API client and local state
pub mod client;
