//! Database migration runner.

use sqlx::SqlitePool;
use tracing::info;

use syncindex_core::error::{AppError, ErrorKind};

/// Create or upgrade the metadata schema.
///
/// The schema belongs to the sync write path; the query layer ships it so
/// tooling and tests can create an empty index.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
