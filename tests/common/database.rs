//! Application fixtures over an in-memory database

use axum::Router;
use daylog::backend::server::config::connect_in_memory;
use daylog::backend::{create_router, AppState, ServerConfig};

pub const TEST_SECRET: &str = "integration-secret";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: TEST_SECRET.to_string(),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

/// A migrated in-memory database plus the state built on it
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = connect_in_memory()
            .await
            .expect("Failed to create in-memory database");
        let state = AppState::new(pool, &test_config());
        let router = create_router(state.clone());
        Self { state, router }
    }
}
