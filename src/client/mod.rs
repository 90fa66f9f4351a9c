//! Client Module
//!
//! Async client for the daylog API plus the local state layer built on it:
//! a persisted session, reactive-style caches of the user's tasks, expenses
//! and moods, a local budget ledger and transient notifications.
//!
//! # Architecture
//!
//! - **`config`** - API base URL and storage location
//! - **`storage`** - Durable key-value store (JSON file or memory)
//! - **`api`** - `reqwest` wrapper carrying the bearer token
//! - **`session`** - Login, register, logout; token persistence
//! - **`tasks`**, **`expenses`**, **`moods`** - Server-backed caches
//! - **`budget`** - Local-only budget ledger
//! - **`notify`** - Transient notifications
//! - **`context`** - Owner of all of the above
//!
//! # Example
//!
//! ```rust,no_run
//! use daylog::client::{ClientConfig, ClientContext};
//!
//! # async fn example() -> Result<(), daylog::client::ClientError> {
//! let mut context = ClientContext::open(ClientConfig::from_env())?;
//! context.login("ada", "secret").await?;
//! for task in context.tasks().for_date("2024-03-01") {
//!     println!("{} {}", if task.completed { "[x]" } else { "[ ]" }, task.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod budget;
mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod expenses;
pub mod moods;
pub mod notify;
pub mod session;
pub mod storage;
pub mod tasks;

pub use api::ApiClient;
pub use budget::BudgetLedger;
pub use config::ClientConfig;
pub use context::ClientContext;
pub use error::ClientError;
pub use expenses::ExpenseCache;
pub use moods::MoodCache;
pub use notify::{Notification, NotificationKind, Notifier};
pub use session::Session;
pub use storage::Storage;
pub use tasks::TaskCache;
