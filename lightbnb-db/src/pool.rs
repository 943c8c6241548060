//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use lightbnb_core::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&config.database).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    tracing::debug!(
        host = options.get_host(),
        database = options.get_database(),
        max_connections = config.max_connections,
        "connecting to store"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Create a pool that connects on first use.
///
/// Used when a caller may never touch the store (in-memory listing writes).
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}

/// Build connect options from either the URL or the individual fields.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    match &config.url {
        Some(url) => url.parse(),
        None => Ok(PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)),
    }
}
