//! Expenses: dated spending entries with a category and optional note

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_expense, delete_expense, list_expenses, update_expense};
