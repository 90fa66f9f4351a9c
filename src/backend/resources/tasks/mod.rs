//! Tasks: per-day to-do items with optional type and time range

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_task, delete_task, list_tasks, update_task};
