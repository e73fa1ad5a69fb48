//! Database version status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a database version is part of the agreed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum DatabaseVersionStatus {
    /// Merged into the local master branch.
    Master,
    /// Local changes that lost a conflict and are not yet merged.
    Dirty,
}

impl DatabaseVersionStatus {
    /// Return the status as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Master => "MASTER",
            Self::Dirty => "DIRTY",
        }
    }
}

impl fmt::Display for DatabaseVersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
