//! The metadata store façade.

use std::collections::HashMap;

use tracing::debug;

use syncindex_core::config::DatabaseConfig;
use syncindex_core::result::AppResult;
use syncindex_core::types::{ChunkChecksum, FileChecksum, FileHistoryId, MultiChunkId};
use syncindex_entity::chunk::MultiChunkEntry;
use syncindex_entity::database::{DatabaseBranch, DatabaseVersionHeader, DatabaseVersionStatus};
use syncindex_entity::file::{FileContent, FileVersion, PartialFileHistory};

use crate::connection::DatabasePool;
use crate::repositories::{
    ContentRepository, DatabaseVersionRepository, FileVersionRepository, KnownDatabaseRepository,
};

/// Read-only query interface over the metadata index.
///
/// Every operation acquires a connection from the pool, runs its statement
/// and folds the rows into entities. Nothing here writes metadata. Lookups
/// that find nothing return `Ok(None)` or an empty collection; `Err` always
/// means the engine failed or a stored value was malformed.
///
/// Unless noted otherwise an operation is a single statement and sees a
/// statement-level snapshot.
#[derive(Debug, Clone)]
pub struct MetadataStore {
    db: DatabasePool,
    file_versions: FileVersionRepository,
    content: ContentRepository,
    database_versions: DatabaseVersionRepository,
    known_databases: KnownDatabaseRepository,
}

impl MetadataStore {
    /// Build a store on an open pool.
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            file_versions: FileVersionRepository::new(pool.clone()),
            content: ContentRepository::new(pool.clone()),
            database_versions: DatabaseVersionRepository::new(pool.clone()),
            known_databases: KnownDatabaseRepository::new(pool),
            db,
        }
    }

    /// Open the database described by `config` and build a store on it.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        Ok(Self::new(DatabasePool::connect(config).await?))
    }

    /// The pool the store runs on.
    pub fn pool(&self) -> &DatabasePool {
        &self.db
    }

    /// Map of path to head version for every present (non-deleted) file.
    pub async fn current_file_tree(&self) -> AppResult<HashMap<String, FileVersion>> {
        let tree = self.file_versions.current_file_tree().await?;
        debug!(entries = tree.len(), "Loaded current file tree");
        Ok(tree)
    }

    /// Highest logical time of `client` among unmerged (dirty) database
    /// versions, if there are any.
    pub async fn max_dirty_vector_clock(&self, client: &str) -> AppResult<Option<i64>> {
        self.database_versions.max_dirty_vector_clock(client).await
    }

    /// Head version of the file at `path`; absent if its head is deleted.
    pub async fn file_version_by_path(&self, path: &str) -> AppResult<Option<FileVersion>> {
        self.file_versions.find_head_by_path(path).await
    }

    /// Head version of a history; absent if its head is deleted.
    pub async fn file_version_by_history(
        &self,
        file_history_id: &FileHistoryId,
    ) -> AppResult<Option<FileVersion>> {
        self.file_versions.find_head_by_history(file_history_id).await
    }

    /// Multichunks holding the chunks of a content. `None` gives an empty list.
    pub async fn multichunks_for_content(
        &self,
        checksum: Option<&FileChecksum>,
    ) -> AppResult<Vec<MultiChunkEntry>> {
        self.content.find_multichunks_for_content(checksum).await
    }

    /// A file content, with its chunk list in position order when
    /// `include_chunks` is set.
    pub async fn content_by_checksum(
        &self,
        checksum: Option<&FileChecksum>,
        include_chunks: bool,
    ) -> AppResult<Option<FileContent>> {
        self.content.find_content(checksum, include_chunks).await
    }

    /// Every file history with its versions in ascending order.
    pub async fn all_file_histories(&self) -> AppResult<Vec<PartialFileHistory>> {
        let histories = self.file_versions.find_all_histories().await?;
        debug!(histories = histories.len(), "Loaded file histories");
        Ok(histories)
    }

    /// Complete history of the file currently at `path`, deleted versions
    /// included, read from the merged (`fileversion_master`) view.
    ///
    /// Head resolution and history retrieval are one statement.
    pub async fn file_history_by_path(&self, path: &str) -> AppResult<Option<PartialFileHistory>> {
        self.file_versions.find_history_by_path(path).await
    }

    /// Header of the most recently inserted database version.
    ///
    /// The header and its vector clock are read in one transaction.
    pub async fn last_database_version_header(&self) -> AppResult<Option<DatabaseVersionHeader>> {
        self.database_versions.find_last_header().await
    }

    /// The multichunk currently holding `chunk`.
    pub async fn multichunk_for_chunk(
        &self,
        chunk: &ChunkChecksum,
    ) -> AppResult<Option<MultiChunkEntry>> {
        self.content.find_multichunk_for_chunk(chunk).await
    }

    /// The multichunk `id`, if a file version owned by a database version
    /// with `status` references it.
    pub async fn multichunk_by_id_and_status(
        &self,
        id: &MultiChunkId,
        status: DatabaseVersionStatus,
    ) -> AppResult<Option<MultiChunkEntry>> {
        self.content.find_multichunk_with_status(id, status).await
    }

    /// The local branch: every database version header in insertion order.
    pub async fn local_database_branch(&self) -> AppResult<DatabaseBranch> {
        let branch = self.database_versions.local_branch().await?;
        debug!(headers = branch.len(), "Reconstructed local database branch");
        Ok(branch)
    }

    /// Names of remote databases known to this client, as stored.
    pub async fn known_databases(&self) -> AppResult<Vec<String>> {
        self.known_databases.list().await
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.db.health_check().await
    }

    /// Release the database. Best effort: failures are swallowed.
    ///
    /// Clones of this store share the pool and stop working as well.
    pub async fn shutdown(self) {
        self.db.shutdown().await;
    }
}
