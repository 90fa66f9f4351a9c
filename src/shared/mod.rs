//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the client and the backend. Everything here is plain data that travels
//! over the REST API as JSON.
//!
//! # Overview
//!
//! - **`models`** - Task, expense and mood records plus request payloads
//! - **`dates`** - `YYYY-MM-DD` and `HH:MM` helpers
//! - **`error`** - Validation and serialization errors

/// Records and request/response payloads
pub mod models;

/// Date and time helpers
pub mod dates;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use models::{
    AuthResponse, DeleteResponse, Expense, ExpenseUpdate, LoginRequest, Mood, MoodEntry,
    NewExpense, NewTask, RegisterRequest, Task, TaskUpdate, UserSummary,
};
