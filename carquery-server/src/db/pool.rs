//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbSettings;

/// Default maximum connections for the pool.
/// The service runs one read query per request.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool and verify connectivity.
///
/// # Errors
///
/// Returns an error if the settings are invalid or the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbSettings::default()).await?;
/// ```
pub async fn create_pool(settings: &DbSettings) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(settings, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
pub async fn create_pool_with_options(
    settings: &DbSettings,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(settings.connect_options()?)
        .await
}

/// Create a pool that connects on first use.
///
/// Used by router tests that never reach the database.
pub fn create_lazy_pool(settings: &DbSettings) -> Result<PgPool, sqlx::Error> {
    Ok(PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy_with(settings.connect_options()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p carquery-server -- --ignored

    fn settings_from_env() -> DbSettings {
        DbSettings {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn lazy_pool_does_not_connect() {
        let pool = create_lazy_pool(&DbSettings::default()).expect("lazy pool");
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let pool = create_pool(&settings_from_env())
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn session_timezone_is_applied() {
        let pool = create_pool(&settings_from_env())
            .await
            .expect("pool creation failed");

        let (tz,): (String,) = sqlx::query_as("SHOW TimeZone")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(tz, "Asia/Jakarta");
    }
}
