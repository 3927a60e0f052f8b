//! HTTP server.
//!
//! Exposes two endpoints:
//! - `/gsm/search?q=<text>` - runs a search scrape and returns JSON entries
//! - `/status` - JSON scrape counters for monitoring

mod handlers;

use std::sync::Arc;
use std::time::Instant;

use axum::routing::get;
use axum::Router;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::initialization::init_stats;
use crate::scrape::{BrowserScraper, PhoneScraper};

pub use handlers::AppState;

/// Builds the application router over the given state.
///
/// Split out from [`run_server`] so tests can serve the same routes against
/// a stub scraper on an ephemeral port.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/gsm/search", get(handlers::search))
        .route("/status", get(handlers::status))
        .with_state(state)
}

/// Binds the listener and serves requests until the process exits.
pub async fn run_server(config: Config) -> Result<(), InitializationError> {
    let stats = init_stats();
    let scraper: Arc<dyn PhoneScraper> =
        Arc::new(BrowserScraper::new(config.clone(), Arc::clone(&stats)));

    let app = router(AppState {
        scraper,
        stats,
        start_time: Arc::new(Instant::now()),
    });

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}/", addr);
    log::info!("  - Search: http://{}/gsm/search?q=<text>", addr);
    log::info!("  - Status: http://{}/status", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
