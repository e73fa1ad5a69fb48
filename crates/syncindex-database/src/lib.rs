//! # syncindex-database
//!
//! SQLite connection management and the read-query layer of the metadata
//! index: per-table repositories, the branch reconstructor and the
//! [`MetadataStore`] façade that callers use.

pub mod branch;
pub mod connection;
pub mod error;
pub mod grouping;
pub mod migration;
pub mod repositories;
pub mod statements;
pub mod store;

pub use connection::DatabasePool;
pub use store::MetadataStore;
