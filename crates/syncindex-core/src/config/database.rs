//! Database configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the SQLite metadata database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://data/index.db` or `sqlite::memory:`.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Timeout for acquiring a connection, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// How long a statement may wait on a locked database, in milliseconds.
    #[serde(default = "default_statement_timeout")]
    pub statement_timeout_ms: u64,
    /// Create the database file when it does not exist.
    #[serde(default)]
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Configuration for a private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` opens its own database, so the
    /// pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connect_timeout_seconds: default_connect_timeout(),
            statement_timeout_ms: default_statement_timeout(),
            create_if_missing: true,
        }
    }
}

fn default_max_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_statement_timeout() -> u64 {
    30_000
}
