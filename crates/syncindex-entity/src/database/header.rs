//! Database version header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::vector_clock::VectorClock;

/// Identity of one committed database version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseVersionHeader {
    /// Client that committed the version.
    pub client: String,
    /// Local wall-clock time of the commit.
    pub date: DateTime<Utc>,
    /// Clock snapshot at commit time.
    pub vector_clock: VectorClock,
}

impl DatabaseVersionHeader {
    /// Create a header with an empty vector clock.
    pub fn new(client: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            client: client.into(),
            date,
            vector_clock: VectorClock::new(),
        }
    }
}
