/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool
 * - The token service used by login, register and the auth middleware
 * - The registration rate limiter (shared counters behind an `Arc`)
 * - The bcrypt cost used when hashing new passwords
 *
 * Every field is cheap to clone, so handlers receive the state by value.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::middleware::rate_limit::RateLimiter;
use crate::backend::server::config::ServerConfig;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Signs and verifies bearer tokens
    pub tokens: TokenService,

    /// Per-address limiter for `POST /api/auth/register`
    pub register_limiter: RateLimiter,

    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from a pool and the loaded configuration
    pub fn new(db: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret),
            register_limiter: RateLimiter::for_registration(),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

/// Lets handlers take `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// State over a fresh in-memory database with a cheap bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let db = crate::backend::server::config::connect_in_memory()
        .await
        .expect("in-memory database");
    let config = ServerConfig {
        jwt_secret: "test-secret".to_string(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    };
    AppState::new(db, &config)
}
