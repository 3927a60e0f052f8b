//! Error handling and statistics.

pub mod stats;
pub mod types;

pub use stats::{ScrapeStats, StatsSnapshot};
pub use types::{InitializationError, ProvisionError, ScrapeError};
