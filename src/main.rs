//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `gsm_search` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;

use gsm_search::config::Config;
use gsm_search::initialization::init_logger_with;
use gsm_search::server::run_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists).
    // Allows setting CHROMIUM_PATH without exporting it manually.
    dotenvy::dotenv().ok();

    // Parse command-line arguments into Config
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    log::info!(
        "Starting gsm_search in {:?} mode on {}:{}",
        config.mode,
        config.bind,
        config.port
    );

    run_server(config).await.context("Server error")?;

    Ok(())
}
