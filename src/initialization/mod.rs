//! Application initialization.
//!
//! Sets up shared resources before the server starts: the logger and the
//! process-wide scrape statistics.

mod logger;

use std::sync::Arc;

use crate::error_handling::ScrapeStats;

pub use logger::init_logger_with;

/// Initializes the shared scrape statistics tracker.
///
/// Returns an `Arc<ScrapeStats>` shared by the request handlers and the
/// status endpoint.
pub fn init_stats() -> Arc<ScrapeStats> {
    Arc::new(ScrapeStats::new())
}
