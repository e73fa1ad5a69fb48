//! File history aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use syncindex_core::types::FileHistoryId;

use super::version::FileVersion;

/// The versions of one file lineage known to this client.
///
/// Versions are keyed by version number; adding a version with an existing
/// number replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialFileHistory {
    /// Identifier of the history.
    pub file_history_id: FileHistoryId,
    versions: BTreeMap<i64, FileVersion>,
}

impl PartialFileHistory {
    /// Create an empty history.
    pub fn new(file_history_id: FileHistoryId) -> Self {
        Self {
            file_history_id,
            versions: BTreeMap::new(),
        }
    }

    /// Add a version to the history.
    pub fn add_file_version(&mut self, version: FileVersion) {
        self.versions.insert(version.version, version);
    }

    /// The version with the highest version number.
    pub fn head(&self) -> Option<&FileVersion> {
        self.versions.values().next_back()
    }

    /// Look up a specific version number.
    pub fn version(&self, version: i64) -> Option<&FileVersion> {
        self.versions.get(&version)
    }

    /// All versions in ascending version order.
    pub fn versions(&self) -> impl Iterator<Item = &FileVersion> {
        self.versions.values()
    }

    /// Number of versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the history holds no versions.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::file::version::{FileStatus, FileType};

    fn version(number: i64, status: FileStatus) -> FileVersion {
        FileVersion {
            version: number,
            path: "docs/readme.txt".to_string(),
            file_type: FileType::File,
            status,
            size: 10,
            last_modified: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            link_target: None,
            checksum: None,
            updated: None,
            posix_permissions: None,
            dos_attributes: None,
        }
    }

    #[test]
    fn test_head_is_highest_version() {
        let mut history = PartialFileHistory::new(FileHistoryId::parse("01").unwrap());
        history.add_file_version(version(2, FileStatus::Changed));
        history.add_file_version(version(1, FileStatus::New));

        assert_eq!(history.len(), 2);
        assert_eq!(history.head().map(|v| v.version), Some(2));
        let numbers: Vec<i64> = history.versions().map(|v| v.version).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_deleted_head() {
        let mut history = PartialFileHistory::new(FileHistoryId::parse("02").unwrap());
        history.add_file_version(version(1, FileStatus::New));
        history.add_file_version(version(2, FileStatus::Deleted));

        assert!(history.head().is_some_and(FileVersion::is_deleted));
        assert!(!history.version(1).is_some_and(FileVersion::is_deleted));
    }
}
