//! Shared test utilities
//!
//! Each integration test file pulls these in with `mod common;`.

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod requests;

pub use auth_helpers::*;
pub use database::*;
pub use requests::*;
