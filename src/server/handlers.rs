//! HTTP request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::{ScrapeStats, StatsSnapshot};
use crate::models::PhoneEntry;
use crate::scrape::PhoneScraper;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<dyn PhoneScraper>,
    pub stats: Arc<ScrapeStats>,
    pub start_time: Arc<Instant>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// GET /gsm/search?q=<text>
///
/// Returns the scraped entries as a JSON array. A missing `q` is a client
/// error answered with 400 and an empty body; an empty `q` is still a valid
/// query and runs a scrape. Scrape failures are not client errors and come
/// back as `200 []`.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PhoneEntry>>, StatusCode> {
    let query = match params.q.as_deref() {
        Some(q) => q,
        None => {
            log::warn!("Search request rejected: missing query parameter");
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    let entries = state.scraper.scrape_search(query, Vec::new()).await;
    Ok(Json(entries))
}

/// JSON response for the `/status` endpoint.
#[derive(Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    #[serde(flatten)]
    pub stats: StatsSnapshot,
}

/// GET /status
///
/// Reports uptime and the process-lifetime scrape counters.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        stats: state.stats.snapshot(),
    })
}
