//! Validated identifier newtypes for checksums and object ids.
//!
//! Every identifier is a non-empty byte string stored and displayed as
//! lowercase hex. Parsing user input accepts either case, so two identifiers
//! are equal exactly when their bytes are equal. When the `sqlx` feature is
//! enabled, each type also implements `sqlx::Type`, `sqlx::Encode` and
//! `sqlx::Decode` for SQLite `TEXT` columns. Decoding only accepts the
//! canonical lowercase form: SQLite compares `TEXT` case-sensitively, so an
//! uppercase stored id could never be matched again by the lowercase value
//! it would be bound as.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::{AppError, ErrorKind};

/// Reasons a textual identifier is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    /// The identifier has no bytes.
    #[error("identifier is empty")]
    Empty,
    /// The identifier is not valid hex.
    #[error("identifier is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// Stored hex is not in canonical lowercase form.
    #[error("identifier is not lowercase hex: {0}")]
    NonCanonical(String),
}

impl From<IdError> for AppError {
    fn from(err: IdError) -> Self {
        AppError::with_source(ErrorKind::Validation, format!("Invalid identifier: {err}"), err)
    }
}

/// Macro to define a hex-encoded identifier newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Box<[u8]>);

        impl $name {
            /// Create an identifier from raw bytes.
            pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, IdError> {
                let bytes = bytes.into();
                if bytes.is_empty() {
                    return Err(IdError::Empty);
                }
                Ok(Self(bytes.into_boxed_slice()))
            }

            /// Parse an identifier from its hex representation.
            pub fn parse(s: &str) -> Result<Self, IdError> {
                Self::from_bytes(hex::decode(s.trim())?)
            }

            /// Parse an identifier that must already be in canonical
            /// lowercase hex, as written by the storage layer.
            pub fn parse_canonical(s: &str) -> Result<Self, IdError> {
                if s.bytes().any(|b| b.is_ascii_uppercase()) || s.trim() != s {
                    return Err(IdError::NonCanonical(s.to_string()));
                }
                Self::parse(s)
            }

            /// Return the raw bytes.
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Return the lowercase hex representation.
            pub fn to_hex(&self) -> String {
                hex::encode(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Sqlite> for $name {
            fn type_info() -> <sqlx::Sqlite as sqlx::Database>::TypeInfo {
                <String as sqlx::Type<sqlx::Sqlite>>::type_info()
            }

            fn compatible(ty: &<sqlx::Sqlite as sqlx::Database>::TypeInfo) -> bool {
                <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode(self.to_hex(), buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for $name {
            fn decode(
                value: <sqlx::Sqlite as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                let text = <String as sqlx::Decode<'r, sqlx::Sqlite>>::decode(value)?;
                Ok(Self::parse_canonical(&text)?)
            }
        }
    };
}

define_id!(
    /// Checksum of a single content-addressed chunk.
    ChunkChecksum
);

define_id!(
    /// Checksum of a complete file's content.
    FileChecksum
);

define_id!(
    /// Identifier of a file history (one logical file lineage).
    FileHistoryId
);

define_id!(
    /// Identifier of a multichunk container.
    MultiChunkId
);
