//! Database version, vector clock and branch queries.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use syncindex_core::result::AppResult;
use syncindex_entity::database::{
    DatabaseBranch, DatabaseVersionHeader, DatabaseVersionStatus, VectorClock,
};

use crate::branch::{BranchRow, reconstruct_branch};
use crate::error::query_failed;
use crate::statements;

#[derive(Debug, FromRow)]
struct DatabaseVersionRow {
    id: i64,
    client: String,
    localtime: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct VectorClockRow {
    client: String,
    logicaltime: i64,
}

/// Repository for database version headers and their vector clocks.
#[derive(Debug, Clone)]
pub struct DatabaseVersionRepository {
    pool: SqlitePool,
}

impl DatabaseVersionRepository {
    /// Create a new database version repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Highest logical time of `client` among unmerged (dirty) versions.
    pub async fn max_dirty_vector_clock(&self, client: &str) -> AppResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>(statements::MAX_VECTOR_CLOCK_FOR_STATUS)
            .bind(DatabaseVersionStatus::Dirty)
            .bind(client)
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("Failed to load max dirty vector clock"))
    }

    /// The most recently inserted header with its vector clock.
    ///
    /// Both lookups run in one read transaction and see the same snapshot.
    pub async fn find_last_header(&self) -> AppResult<Option<DatabaseVersionHeader>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(query_failed("Failed to begin read transaction"))?;

        let Some(row) = sqlx::query_as::<_, DatabaseVersionRow>(statements::LAST_DATABASE_VERSION)
            .fetch_optional(&mut *tx)
            .await
            .map_err(query_failed("Failed to find last database version"))?
        else {
            return Ok(None);
        };

        let clock_rows =
            sqlx::query_as::<_, VectorClockRow>(statements::VECTOR_CLOCK_BY_DATABASE_VERSION)
                .bind(row.id)
                .fetch_all(&mut *tx)
                .await
                .map_err(query_failed("Failed to load vector clock"))?;

        tx.commit()
            .await
            .map_err(query_failed("Failed to end read transaction"))?;

        let mut header = DatabaseVersionHeader::new(row.client, row.localtime);
        header.vector_clock = clock_rows
            .into_iter()
            .map(|r| (r.client, r.logicaltime))
            .collect::<VectorClock>();

        Ok(Some(header))
    }

    /// All headers in insertion order, each with its complete vector clock.
    pub async fn local_branch(&self) -> AppResult<DatabaseBranch> {
        let rows = sqlx::query_as::<_, BranchRow>(statements::LOCAL_DATABASE_BRANCH)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to load local database branch"))?;

        Ok(reconstruct_branch(rows))
    }
}
