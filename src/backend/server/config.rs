/**
 * Server Configuration
 *
 * This module loads the process configuration from the environment and
 * opens the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * | Variable       | Default                          |
 * |----------------|----------------------------------|
 * | `PORT`         | `5000`                           |
 * | `DATABASE_URL` | `sqlite://daylog.db?mode=rwc`    |
 * | `JWT_SECRET`   | development secret (with warning)|
 * | `BCRYPT_COST`  | `bcrypt::DEFAULT_COST`           |
 *
 * The configuration is read once at startup and handed to `AppState`;
 * handlers never consult the environment.
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://daylog.db?mode=rwc";
const DEVELOPMENT_SECRET: &str = "daylog-development-secret-change-me";

/// Process-wide server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = parse_var("PORT", defaults.port);
        let bcrypt_cost = parse_var("BCRYPT_COST", defaults.bcrypt_cost);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::info!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
            defaults.database_url
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            defaults.jwt_secret
        });

        Self {
            port,
            database_url,
            jwt_secret,
            bcrypt_cost,
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default: {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Open the connection pool for `database_url` and apply migrations
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Private in-memory database with the schema applied.
///
/// The pool holds a single connection that never expires, since every new
/// in-memory connection would see an empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply the embedded `migrations/` directory
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
