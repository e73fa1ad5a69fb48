//! SQLite connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use syncindex_core::config::DatabaseConfig;
use syncindex_core::error::{AppError, ErrorKind};

use crate::statements;

/// Wrapper around the sqlx SQLite connection pool.
///
/// Connections live as long as the pool: they are never reaped for being
/// idle or old, so an in-memory database survives for the pool's lifetime.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: SqlitePool,
}

impl DatabasePool {
    /// Open the pool described by the configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            url = %config.url,
            max_connections = config.max_connections,
            statement_timeout_ms = config.statement_timeout_ms,
            "Connecting to metadata database"
        );

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid database URL '{}'", config.url),
                    e,
                )
            })?
            .create_if_missing(config.create_if_missing)
            .busy_timeout(Duration::from_millis(config.statement_timeout_ms));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Connected to metadata database");
        Ok(Self { pool })
    }

    /// Wrap an already opened pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>(statements::HEALTH_CHECK)
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Issue the shutdown directive and close every connection.
    ///
    /// Both steps are best effort: failures are logged and dropped.
    pub async fn shutdown(self) {
        if let Err(e) = sqlx::query(statements::SHUTDOWN_DIRECTIVE)
            .execute(&self.pool)
            .await
        {
            debug!(error = %e, "Ignoring failed shutdown directive");
        }

        self.pool.close().await;
        info!("Metadata database closed");
    }
}
