//! Read-only repositories over the metadata tables.

pub mod content;
pub mod database_version;
pub mod file_version;
pub mod known_database;

pub use content::ContentRepository;
pub use database_version::DatabaseVersionRepository;
pub use file_version::FileVersionRepository;
pub use known_database::KnownDatabaseRepository;
