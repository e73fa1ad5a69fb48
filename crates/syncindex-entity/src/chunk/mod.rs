//! Chunk container entities.

pub mod multichunk;

pub use multichunk::MultiChunkEntry;
