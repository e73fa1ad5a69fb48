//! # syncindex-entity
//!
//! Domain entity models for the syncindex metadata store. Structs that map
//! directly onto a table row derive `sqlx::FromRow`; aggregates assembled
//! from several rows (histories, content, branches) are built by the
//! database crate. All entities derive `Debug`, `Clone`, `Serialize` and
//! `Deserialize`.

pub mod chunk;
pub mod database;
pub mod file;
