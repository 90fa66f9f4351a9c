//! Moods: one value per user and day

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{list_moods, set_mood};
