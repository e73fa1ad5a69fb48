//! File version and file history queries.

use std::collections::HashMap;

use sqlx::{FromRow, SqlitePool};

use syncindex_core::result::AppResult;
use syncindex_core::types::FileHistoryId;
use syncindex_entity::file::{FileStatus, FileVersion, PartialFileHistory};

use crate::error::query_failed;
use crate::grouping::group_consecutive;
use crate::statements;

/// A `fileversion` row together with its owning history.
#[derive(Debug, FromRow)]
struct FileVersionRow {
    filehistory_id: FileHistoryId,
    #[sqlx(flatten)]
    version: FileVersion,
}

/// Repository for file versions and the histories they form.
///
/// Head resolution: the head of a history is its highest version number,
/// and a history whose head is `DELETED` is not currently present.
#[derive(Debug, Clone)]
pub struct FileVersionRepository {
    pool: SqlitePool,
}

impl FileVersionRepository {
    /// Create a new file version repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Map every present path to its head version.
    pub async fn current_file_tree(&self) -> AppResult<HashMap<String, FileVersion>> {
        let versions = sqlx::query_as::<_, FileVersion>(statements::CURRENT_FILE_TREE)
            .bind(FileStatus::Deleted)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to load current file tree"))?;

        Ok(versions
            .into_iter()
            .map(|version| (version.path.clone(), version))
            .collect())
    }

    /// Head version of the history at `path`, unless it is deleted.
    pub async fn find_head_by_path(&self, path: &str) -> AppResult<Option<FileVersion>> {
        sqlx::query_as::<_, FileVersion>(statements::HEAD_VERSION_BY_PATH)
            .bind(path)
            .bind(FileStatus::Deleted)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Failed to find file version by path"))
    }

    /// Head version of a history, unless it is deleted.
    pub async fn find_head_by_history(
        &self,
        file_history_id: &FileHistoryId,
    ) -> AppResult<Option<FileVersion>> {
        sqlx::query_as::<_, FileVersion>(statements::HEAD_VERSION_BY_HISTORY)
            .bind(file_history_id)
            .bind(FileStatus::Deleted)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Failed to find file version by history"))
    }

    /// Every history with all of its versions.
    pub async fn find_all_histories(&self) -> AppResult<Vec<PartialFileHistory>> {
        let rows = sqlx::query_as::<_, FileVersionRow>(statements::ALL_FILE_VERSIONS)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list file histories"))?;

        Ok(group_consecutive(rows, |row| row.filehistory_id.clone())
            .into_iter()
            .map(|(file_history_id, rows)| {
                let mut history = PartialFileHistory::new(file_history_id);
                for row in rows {
                    history.add_file_version(row.version);
                }
                history
            })
            .collect())
    }

    /// The full history (deleted versions included) of the file currently at
    /// `path`, read from the merged view of file versions.
    pub async fn find_history_by_path(&self, path: &str) -> AppResult<Option<PartialFileHistory>> {
        let rows = sqlx::query_as::<_, FileVersionRow>(statements::FILE_HISTORY_BY_PATH)
            .bind(path)
            .bind(FileStatus::Deleted)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to load file history by path"))?;

        let mut history: Option<PartialFileHistory> = None;
        for row in rows {
            history
                .get_or_insert_with(|| PartialFileHistory::new(row.filehistory_id.clone()))
                .add_file_version(row.version);
        }

        Ok(history)
    }
}
