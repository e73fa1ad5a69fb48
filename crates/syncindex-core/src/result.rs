//! Convenience result type alias for syncindex.

use crate::error::AppError;

/// A specialized `Result` type for syncindex operations.
///
/// Lookups that legitimately find nothing return `Ok(None)` or an empty
/// collection; `Err` is reserved for failures.
pub type AppResult<T> = Result<T, AppError>;
