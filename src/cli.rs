//! Command definitions and dispatch.

use clap::{Parser, Subcommand};

use syncindex_core::config::AppConfig;
use syncindex_core::error::AppError;
use syncindex_core::types::FileChecksum;
use syncindex_database::MetadataStore;

use crate::output;

/// Inspect the metadata index of a deduplicating sync store
#[derive(Debug, Parser)]
#[command(name = "syncindex", version, about, long_about = None)]
pub struct Cli {
    /// Database URL, overriding the configured one
    #[arg(short, long)]
    pub database: Option<String>,

    /// Query to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current file tree (path to head version)
    Tree,
    /// Print the full history of the file at a path
    History {
        /// File path relative to the sync root
        path: String,
    },
    /// Print a file content by checksum
    Content {
        /// Hex-encoded file checksum
        checksum: String,
        /// Include the ordered chunk list
        #[arg(long)]
        chunks: bool,
    },
    /// Print the local database branch
    Branch,
    /// Print the names of known remote databases
    KnownDatabases,
}

impl Cli {
    /// Open the store, run the selected query and release the store.
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let store = MetadataStore::connect(&config.database).await?;
        let result = self.run(&store).await;
        store.shutdown().await;
        result
    }

    async fn run(&self, store: &MetadataStore) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree => output::print_item(&output::sorted(store.current_file_tree().await?)),
            Commands::History { path } => {
                let history = store
                    .file_history_by_path(path)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("No file at '{path}'")))?;
                output::print_item(&history)
            }
            Commands::Content { checksum, chunks } => {
                let checksum = FileChecksum::parse(checksum)?;
                let content = store
                    .content_by_checksum(Some(&checksum), *chunks)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("No content {checksum}")))?;
                output::print_item(&content)
            }
            Commands::Branch => output::print_item(&store.local_database_branch().await?),
            Commands::KnownDatabases => output::print_item(&store.known_databases().await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_with_chunks() {
        let cli = Cli::parse_from(["syncindex", "content", "beef", "--chunks"]);
        match cli.command {
            Commands::Content { checksum, chunks } => {
                assert_eq!(checksum, "beef");
                assert!(chunks);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_database_override() {
        let cli = Cli::parse_from(["syncindex", "--database", "sqlite::memory:", "known-databases"]);
        assert_eq!(cli.database.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(cli.command, Commands::KnownDatabases));
    }
}
