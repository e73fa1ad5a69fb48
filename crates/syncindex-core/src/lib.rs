//! # syncindex-core
//!
//! Core crate for syncindex. Contains configuration schemas, validated
//! checksum and identifier types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other syncindex crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
