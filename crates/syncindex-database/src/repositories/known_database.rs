//! Known remote database registry.

use sqlx::SqlitePool;

use syncindex_core::result::AppResult;

use crate::error::query_failed;
use crate::statements;

/// Repository for the names of remote databases this client has seen.
#[derive(Debug, Clone)]
pub struct KnownDatabaseRepository {
    pool: SqlitePool,
}

impl KnownDatabaseRepository {
    /// Create a new known database repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every registered name, duplicates included.
    pub async fn list(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(statements::KNOWN_DATABASES)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list known databases"))
    }
}
