//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from TOML files and
//! `SYNCINDEX__`-prefixed environment variables. Each sub-module represents
//! a logical configuration section.

pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Metadata database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// Merges `config/default.toml`, the environment-specific overlay
    /// `config/{env}.toml` and environment variables such as
    /// `SYNCINDEX__DATABASE__URL`. Later sources win.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SYNCINDEX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config = AppConfig::from_toml(
            r#"
            [database]
            url = "sqlite://data/index.db"
            "#,
        )
        .expect("config should parse");

        assert_eq!(config.database.url, "sqlite://data/index.db");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.statement_timeout_ms, 30_000);
        assert!(!config.database.create_if_missing);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_database_section_is_rejected() {
        let err = AppConfig::from_toml("[logging]\nlevel = \"debug\"\n").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
