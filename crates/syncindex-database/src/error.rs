//! Mapping of sqlx errors into [`AppError`].

use syncindex_core::error::{AppError, ErrorKind};

/// Build a `map_err` adapter that wraps a sqlx error with a message.
///
/// Column values that fail to decode (for example a checksum column that is
/// not hex) become [`ErrorKind::Decode`]; everything else is an execution
/// failure of kind [`ErrorKind::Database`].
pub fn query_failed(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let kind = match e {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => ErrorKind::Decode,
            _ => ErrorKind::Database,
        };
        AppError::with_source(kind, message, e)
    }
}
