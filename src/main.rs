//! syncindex: inspect the metadata index of a sync store.
//!
//! Loads configuration, opens the index, prints the result of one query as
//! JSON and closes the index again. Queries never modify metadata.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use syncindex_core::config::AppConfig;
use syncindex_core::error::AppError;

mod cli;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        tracing::error!(kind = %e.kind, "Query failed: {}", e.message);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment, then apply overrides
/// given on the command line.
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = std::env::var("SYNCINDEX_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = AppConfig::load(&env)?;
    if let Some(url) = &cli.database {
        config.database.url = url.clone();
    }

    Ok(config)
}

/// Initialize tracing. Logs go to stderr so stdout carries only query output.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
