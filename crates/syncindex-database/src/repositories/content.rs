//! File content, chunk and multichunk queries.

use sqlx::{FromRow, SqlitePool};

use syncindex_core::result::AppResult;
use syncindex_core::types::{ChunkChecksum, FileChecksum, MultiChunkId};
use syncindex_entity::chunk::MultiChunkEntry;
use syncindex_entity::database::DatabaseVersionStatus;
use syncindex_entity::file::FileContent;

use crate::error::query_failed;
use crate::statements;

#[derive(Debug, FromRow)]
struct ContentRow {
    checksum: FileChecksum,
    size: i64,
}

#[derive(Debug, FromRow)]
struct ContentChunkRow {
    checksum: FileChecksum,
    size: i64,
    chunk_checksum: Option<ChunkChecksum>,
}

/// Repository mapping file content to chunks and multichunks.
#[derive(Debug, Clone)]
pub struct ContentRepository {
    pool: SqlitePool,
}

impl ContentRepository {
    /// Create a new content repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Distinct multichunks that hold any chunk of the content.
    ///
    /// A missing checksum yields an empty list without touching the database.
    pub async fn find_multichunks_for_content(
        &self,
        checksum: Option<&FileChecksum>,
    ) -> AppResult<Vec<MultiChunkEntry>> {
        let Some(checksum) = checksum else {
            return Ok(Vec::new());
        };

        sqlx::query_as::<_, MultiChunkEntry>(statements::MULTICHUNKS_FOR_CONTENT)
            .bind(checksum)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to list multichunks for content"))
    }

    /// Look up a file content.
    ///
    /// With `include_chunks` the chunk list is filled in position order;
    /// otherwise only checksum and size are loaded.
    pub async fn find_content(
        &self,
        checksum: Option<&FileChecksum>,
        include_chunks: bool,
    ) -> AppResult<Option<FileContent>> {
        let Some(checksum) = checksum else {
            return Ok(None);
        };

        if !include_chunks {
            let row = sqlx::query_as::<_, ContentRow>(statements::CONTENT_BY_CHECKSUM)
                .bind(checksum)
                .fetch_optional(&self.pool)
                .await
                .map_err(query_failed("Failed to find file content"))?;

            return Ok(row.map(|row| FileContent::new(row.checksum, row.size)));
        }

        let rows = sqlx::query_as::<_, ContentChunkRow>(statements::CONTENT_WITH_CHUNKS)
            .bind(checksum)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("Failed to load file content chunks"))?;

        let mut content: Option<FileContent> = None;
        for row in rows {
            let content =
                content.get_or_insert_with(|| FileContent::new(row.checksum.clone(), row.size));
            if let Some(chunk) = row.chunk_checksum {
                content.add_chunk(chunk);
            }
        }

        Ok(content)
    }

    /// The multichunk currently holding a chunk.
    pub async fn find_multichunk_for_chunk(
        &self,
        chunk: &ChunkChecksum,
    ) -> AppResult<Option<MultiChunkEntry>> {
        sqlx::query_as::<_, MultiChunkEntry>(statements::MULTICHUNK_FOR_CHUNK)
            .bind(chunk)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Failed to find multichunk for chunk"))
    }

    /// The multichunk, if some file version owned by a database version with
    /// `status` references one of its chunks.
    pub async fn find_multichunk_with_status(
        &self,
        id: &MultiChunkId,
        status: DatabaseVersionStatus,
    ) -> AppResult<Option<MultiChunkEntry>> {
        sqlx::query_as::<_, MultiChunkEntry>(statements::MULTICHUNK_BY_ID_AND_STATUS)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("Failed to find multichunk by status"))
    }
}
