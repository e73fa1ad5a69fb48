//! Shared fixtures for metadata store integration tests.
//!
//! The query layer never writes metadata, so fixtures insert raw rows the
//! way the sync write path would.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

use syncindex_core::config::DatabaseConfig;
use syncindex_core::types::{ChunkChecksum, FileChecksum, FileHistoryId, MultiChunkId};
use syncindex_database::migration::run_migrations;
use syncindex_database::{DatabasePool, MetadataStore};
use syncindex_entity::database::DatabaseVersionStatus;
use syncindex_entity::file::{FileStatus, FileType};

/// An empty in-memory index plus a store over it.
pub struct TestIndex {
    /// Store under test.
    pub store: MetadataStore,
    /// Raw pool for fixture inserts.
    pub pool: SqlitePool,
}

impl TestIndex {
    /// Create an in-memory database with the metadata schema.
    pub async fn new() -> Self {
        let db = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let pool = db.pool().clone();
        Self {
            store: MetadataStore::new(db),
            pool,
        }
    }

    /// Insert a database version with its vector clock and return its id.
    pub async fn add_database_version(
        &self,
        status: DatabaseVersionStatus,
        client: &str,
        clock: &[(&str, i64)],
    ) -> i64 {
        let id = sqlx::query("INSERT INTO databaseversion (status, localtime, client) VALUES (?, ?, ?)")
            .bind(status)
            .bind(timestamp(clock.iter().map(|(_, v)| *v).sum()))
            .bind(client)
            .execute(&self.pool)
            .await
            .expect("insert databaseversion")
            .last_insert_rowid();

        for (vc_client, logicaltime) in clock {
            sqlx::query(
                "INSERT INTO databaseversion_vectorclock (databaseversion_id, client, logicaltime) \
                 VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(*vc_client)
            .bind(*logicaltime)
            .execute(&self.pool)
            .await
            .expect("insert databaseversion_vectorclock");
        }

        id
    }

    /// Register a file history introduced by a database version.
    pub async fn add_history(&self, id: &str, databaseversion_id: i64) -> FileHistoryId {
        let id = FileHistoryId::parse(id).expect("valid history id");
        sqlx::query("INSERT INTO filehistory (id, databaseversion_id) VALUES (?, ?)")
            .bind(&id)
            .bind(databaseversion_id)
            .execute(&self.pool)
            .await
            .expect("insert filehistory");
        id
    }

    /// Insert a file version.
    pub async fn add_version(
        &self,
        history: &FileHistoryId,
        version: i64,
        path: &str,
        status: FileStatus,
        checksum: Option<&FileChecksum>,
    ) {
        sqlx::query(
            "INSERT INTO fileversion (filehistory_id, version, path, type, status, size, \
             lastmodified, linktarget, filecontent_checksum, updated, posixperms, dosattrs) \
             VALUES (?, ?, ?, ?, ?, ?, ?, NULL, ?, ?, 'rw-r--r--', NULL)",
        )
        .bind(history)
        .bind(version)
        .bind(path)
        .bind(FileType::File)
        .bind(status)
        .bind(version * 100)
        .bind(timestamp(version))
        .bind(checksum)
        .bind(timestamp(version + 1))
        .execute(&self.pool)
        .await
        .expect("insert fileversion");
    }

    /// Insert a chunk.
    pub async fn add_chunk(&self, checksum: &str) -> ChunkChecksum {
        let checksum = ChunkChecksum::parse(checksum).expect("valid chunk checksum");
        sqlx::query("INSERT INTO chunk (checksum, size) VALUES (?, 512)")
            .bind(&checksum)
            .execute(&self.pool)
            .await
            .expect("insert chunk");
        checksum
    }

    /// Insert a multichunk packing the given chunks.
    pub async fn add_multichunk(&self, id: &str, chunks: &[&ChunkChecksum]) -> MultiChunkId {
        let id = MultiChunkId::parse(id).expect("valid multichunk id");
        sqlx::query("INSERT INTO multichunk (id) VALUES (?)")
            .bind(&id)
            .execute(&self.pool)
            .await
            .expect("insert multichunk");

        for chunk in chunks {
            sqlx::query("INSERT INTO multichunk_chunk (multichunk_id, chunk_checksum) VALUES (?, ?)")
                .bind(&id)
                .bind(*chunk)
                .execute(&self.pool)
                .await
                .expect("insert multichunk_chunk");
        }

        id
    }

    /// Insert a file content with chunks at explicit positions.
    pub async fn add_content(
        &self,
        checksum: &str,
        size: i64,
        chunks: &[(&ChunkChecksum, i64)],
    ) -> FileChecksum {
        let checksum = FileChecksum::parse(checksum).expect("valid file checksum");
        sqlx::query("INSERT INTO filecontent (checksum, size) VALUES (?, ?)")
            .bind(&checksum)
            .bind(size)
            .execute(&self.pool)
            .await
            .expect("insert filecontent");

        for (chunk, num) in chunks {
            sqlx::query(
                "INSERT INTO filecontent_chunk (filecontent_checksum, chunk_checksum, num) \
                 VALUES (?, ?, ?)",
            )
            .bind(&checksum)
            .bind(*chunk)
            .bind(*num)
            .execute(&self.pool)
            .await
            .expect("insert filecontent_chunk");
        }

        checksum
    }

    /// Register a remote database name.
    pub async fn add_known_database(&self, name: &str) {
        sqlx::query("INSERT INTO known_databases (database_name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .expect("insert known_databases");
    }
}

/// A fixed point in time offset by `seconds`.
pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
}
