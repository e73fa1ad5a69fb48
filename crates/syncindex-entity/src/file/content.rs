//! File content entity.

use serde::{Deserialize, Serialize};

use syncindex_core::types::{ChunkChecksum, FileChecksum};

/// The content of a file: its checksum, size and ordered chunk list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Checksum of the whole content.
    pub checksum: FileChecksum,
    /// Size in bytes.
    pub size: i64,
    chunks: Vec<ChunkChecksum>,
}

impl FileContent {
    /// Create content with no chunk references loaded.
    pub fn new(checksum: FileChecksum, size: i64) -> Self {
        Self {
            checksum,
            size,
            chunks: Vec::new(),
        }
    }

    /// Append the next chunk in sequence.
    pub fn add_chunk(&mut self, chunk: ChunkChecksum) {
        self.chunks.push(chunk);
    }

    /// Chunk checksums in position order.
    pub fn chunks(&self) -> &[ChunkChecksum] {
        &self.chunks
    }
}
