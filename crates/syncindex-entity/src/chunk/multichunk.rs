//! Multichunk entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use syncindex_core::types::MultiChunkId;

/// A container packing one or more chunks for storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct MultiChunkEntry {
    /// Identifier of the multichunk.
    pub id: MultiChunkId,
}

impl MultiChunkEntry {
    /// Create a multichunk reference.
    pub fn new(id: MultiChunkId) -> Self {
        Self { id }
    }
}
