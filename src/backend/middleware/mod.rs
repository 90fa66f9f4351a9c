//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token gate for the resource routes
//! - **`rate_limit`** - Per-address limit on account creation

pub mod auth;

pub mod rate_limit;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use rate_limit::{register_rate_limit, RateLimiter};
