//! Resource Module
//!
//! The per-user collections behind the auth middleware. Each submodule has
//! a `db` half with the SQL and a `handlers` half with the axum endpoints.
//!
//! # Ownership
//!
//! Every query carries `user_id = ?` taken from the authenticated user.
//! Update and delete match on `id AND user_id` in one statement, so a
//! record owned by someone else looks exactly like a missing one.

/// Daily tasks
pub mod tasks;

/// Spending entries
pub mod expenses;

/// Daily moods
pub mod moods;
