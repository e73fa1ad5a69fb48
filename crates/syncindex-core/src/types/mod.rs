//! Core type definitions used across the syncindex workspace.

pub mod id;

pub use id::*;
