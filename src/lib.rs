//! gsm_search library: phone search scraping microservice.
//!
//! Exposes an HTTP endpoint that drives a headless browser against a device
//! database search page and returns the extracted entries as JSON.
//!
//! # Example
//!
//! ```no_run
//! use gsm_search::config::Config;
//! use gsm_search::server::run_server;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 3000,
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and a local Chrome or Chromium
//! installation (see the provisioning docs on [`config::Mode`]).

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod provision;
pub mod query;
pub mod scrape;
pub mod server;

pub use config::Config;
pub use models::PhoneEntry;
