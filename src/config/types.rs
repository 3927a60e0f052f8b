//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_PORT, PACKAGED_CHROMIUM_PATH, SEARCH_BASE_URL};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Deployment mode.
///
/// Selects how the browser executable is resolved. The mode is carried in
/// [`Config`] and handed to the provisioner explicitly; nothing in the
/// application reads a process-wide environment flag at scrape time, which
/// keeps tests deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Local development: resolve a locally installed Chrome by platform.
    Development,
    /// Serverless/production: use the packaged Chromium binary.
    Production,
}

/// Application configuration.
///
/// Doubles as the CLI surface (via `clap::Parser`) and can be constructed
/// programmatically with `Config::default()` for tests and embedding.
#[derive(Debug, Clone, Parser)]
#[command(name = "gsm_search", about = "Phone search scraping microservice")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port for the HTTP server
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Deployment mode (controls browser executable resolution)
    #[arg(long, value_enum, default_value_t = Mode::Development)]
    pub mode: Mode,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Explicit browser executable path (overrides mode-based resolution)
    #[arg(long)]
    pub chrome_path: Option<PathBuf>,

    /// Packaged Chromium executable used in production mode
    #[arg(long, env = "CHROMIUM_PATH", default_value = PACKAGED_CHROMIUM_PATH)]
    pub chromium_pack_path: PathBuf,

    /// Base URL of the device database site
    #[arg(long, default_value = SEARCH_BASE_URL)]
    pub search_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            mode: Mode::Development,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            chrome_path: None,
            chromium_pack_path: PathBuf::from(PACKAGED_CHROMIUM_PATH),
            search_base_url: SEARCH_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Builds the full search-results URL for an already formatted query.
    pub fn search_url(&self, formatted_query: &str) -> String {
        format!(
            "{}{}{}",
            self.search_base_url,
            crate::config::constants::SEARCH_PATH,
            formatted_query
        )
    }
}
