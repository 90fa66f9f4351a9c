/**
 * Server Initialization
 *
 * This module turns a `ServerConfig` into a ready-to-serve router.
 *
 * # Initialization Process
 *
 * 1. Open the database pool and apply migrations
 * 2. Build `AppState` (token service, rate limiter, bcrypt cost)
 * 3. Create the router with all routes and layers
 *
 * A database failure is fatal: unlike optional services there is nothing
 * useful the API can do without storage.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing daylog API server");

    let db = connect(&config.database_url).await?;
    let app_state = AppState::new(db, config);

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}
