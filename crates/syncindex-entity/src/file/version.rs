//! File version entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use syncindex_core::types::FileChecksum;

/// Kind of filesystem object a version describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    /// A regular file with content.
    File,
    /// A directory.
    Folder,
    /// A symbolic link; see [`FileVersion::link_target`].
    Symlink,
}

impl FileType {
    /// Return the type as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Folder => "FOLDER",
            Self::Symlink => "SYMLINK",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Change that produced a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    /// First version of a history.
    New,
    /// Content or metadata changed.
    Changed,
    /// Path changed.
    Renamed,
    /// The file was removed; histories are never deleted, they end here.
    Deleted,
}

impl FileStatus {
    /// Return the status as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Changed => "CHANGED",
            Self::Renamed => "RENAMED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded version of a file, owned by a [`PartialFileHistory`].
///
/// [`PartialFileHistory`]: super::PartialFileHistory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct FileVersion {
    /// Version number, strictly increasing within a history.
    pub version: i64,
    /// Path relative to the sync root.
    pub path: String,
    /// Object type.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Change status.
    pub status: FileStatus,
    /// Size in bytes.
    pub size: i64,
    /// Last-modified time reported by the filesystem.
    #[sqlx(rename = "lastmodified")]
    pub last_modified: DateTime<Utc>,
    /// Target of a symlink.
    #[sqlx(rename = "linktarget")]
    pub link_target: Option<String>,
    /// Checksum of the content; absent for folders and symlinks.
    #[sqlx(rename = "filecontent_checksum")]
    pub checksum: Option<FileChecksum>,
    /// When the version was recorded.
    pub updated: Option<DateTime<Utc>>,
    /// POSIX permission string such as `rw-r--r--`.
    #[sqlx(rename = "posixperms")]
    pub posix_permissions: Option<String>,
    /// DOS attribute string such as `--a-`.
    #[sqlx(rename = "dosattrs")]
    pub dos_attributes: Option<String>,
}

impl FileVersion {
    /// Whether this version marks the file as removed.
    pub fn is_deleted(&self) -> bool {
        self.status == FileStatus::Deleted
    }
}
