//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `retirement_survey` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env and .env.local files)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use retirement_survey::initialization::{init_crypto_provider, init_logger_with};
use retirement_survey::{run_server, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Values already in the environment win; .env.local overrides .env
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    if let Err(e) = run_server(config).await {
        log::error!("retirement_survey error: {:#}", e);
        eprintln!("retirement_survey error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
