//! The scrape engine.
//!
//! Drives a headless browser through one search: launch, navigate to the
//! results page with heavy resources blocked, wait for the results container,
//! pull the rendered HTML, and extract entries. The public surface is the
//! [`PhoneScraper`] trait so the HTTP layer can be exercised without a
//! browser.

pub mod teardown;

use std::sync::Arc;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::fetch::{
    self, EventRequestPaused, FailRequestParams, RequestPattern,
};
use chromiumoxide::cdp::browser_protocol::network::{ErrorReason, ResourceType};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::timeout;

use crate::config::{
    Config, NAVIGATION_TIMEOUT, RESULTS_READY_SELECTOR, SELECTOR_POLL_INTERVAL,
    SELECTOR_WAIT_TIMEOUT,
};
use crate::error_handling::{ScrapeError, ScrapeStats};
use crate::models::PhoneEntry;
use crate::parse::extract_phone_entries;
use crate::provision::LaunchPlan;
use crate::query::format_query;

use self::teardown::teardown;

/// Resource types aborted before they reach the network. The results page
/// renders its list without any of these.
const BLOCKED_RESOURCE_TYPES: &[ResourceType] = &[
    ResourceType::Image,
    ResourceType::Stylesheet,
    ResourceType::Font,
    ResourceType::Media,
];

/// Executes phone searches. The production implementation drives a browser;
/// tests substitute a stub.
#[async_trait]
pub trait PhoneScraper: Send + Sync {
    /// Runs a search for the raw (unformatted) query text and appends any
    /// extracted entries to `existing`.
    ///
    /// Never fails: any scrape-level error is logged and counted, and the
    /// caller gets `existing` back unchanged.
    async fn scrape_search(&self, query: &str, existing: Vec<PhoneEntry>) -> Vec<PhoneEntry>;
}

/// The browser-backed scraper.
pub struct BrowserScraper {
    config: Config,
    stats: Arc<ScrapeStats>,
}

impl BrowserScraper {
    pub fn new(config: Config, stats: Arc<ScrapeStats>) -> Self {
        Self { config, stats }
    }

    /// One full scrape attempt with a structured error on failure.
    ///
    /// The browser is handed to background teardown on every exit path once
    /// it has launched; the caller gets the result without waiting for the
    /// browser process to die.
    async fn run_scrape(&self, query: &str) -> Result<Vec<PhoneEntry>, ScrapeError> {
        let plan = LaunchPlan::resolve(&self.config)
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;
        log::debug!("Launching browser: {}", plan.executable.display());

        let browser_config = plan
            .into_browser_config()
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        // The handler must be polled for the CDP connection to make progress.
        // It normally ends when the browser goes away; teardown aborts it as
        // a backstop in case the connection lingers.
        let drain = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = self.drive(&browser, query).await;

        let closing = teardown(browser);
        tokio::spawn(async move {
            let _ = closing.await;
            drain.abort();
        });

        result
    }

    /// Navigation and extraction against an already launched browser.
    async fn drive(&self, browser: &Browser, query: &str) -> Result<Vec<PhoneEntry>, ScrapeError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Launch(e.to_string()))?;

        block_heavy_resources(&page).await?;

        let url = self.config.search_url(&format_query(query));
        log::info!("Navigating to {}", url);

        match timeout(NAVIGATION_TIMEOUT, page.goto(url.clone())).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => return Err(ScrapeError::Navigation(e.to_string())),
            Err(_) => {
                return Err(ScrapeError::Navigation(format!(
                    "navigation to {} exceeded {:?}",
                    url, NAVIGATION_TIMEOUT
                )))
            }
        }

        wait_for_results(&page).await?;

        let html = page
            .content()
            .await
            .map_err(|e| ScrapeError::Extraction(e.to_string()))?;

        Ok(extract_phone_entries(&html))
    }
}

impl BrowserScraper {
    /// Folds a scrape outcome into the caller's accumulator: extracted
    /// entries are appended after the existing ones, a failure leaves the
    /// accumulator untouched. Stats and logging happen here so the whole
    /// completion step is testable without a browser.
    fn finish(
        &self,
        query: &str,
        mut existing: Vec<PhoneEntry>,
        outcome: Result<Vec<PhoneEntry>, ScrapeError>,
    ) -> Vec<PhoneEntry> {
        match outcome {
            Ok(entries) => {
                log::info!("Search '{}' returned {} entries", query, entries.len());
                self.stats.record_entries(entries.len());
                existing.extend(entries);
                existing
            }
            Err(e) => {
                log::error!("Search '{}' failed ({}): {}", query, e.kind(), e);
                self.stats.record_failure(&e);
                existing
            }
        }
    }
}

#[async_trait]
impl PhoneScraper for BrowserScraper {
    async fn scrape_search(&self, query: &str, existing: Vec<PhoneEntry>) -> Vec<PhoneEntry> {
        self.stats.record_search();
        let outcome = self.run_scrape(query).await;
        self.finish(query, existing, outcome)
    }
}

/// Enables fetch-domain interception and aborts every paused request.
///
/// The request patterns restrict pausing to the blocked resource types, so
/// the listener can abort unconditionally; document and XHR traffic never
/// reaches it.
async fn block_heavy_resources(page: &Page) -> Result<(), ScrapeError> {
    let patterns = BLOCKED_RESOURCE_TYPES
        .iter()
        .map(|resource_type| RequestPattern {
            url_pattern: Some("*".to_string()),
            resource_type: Some(resource_type.clone()),
            request_stage: None,
        })
        .collect();

    page.execute(fetch::EnableParams {
        patterns: Some(patterns),
        handle_auth_requests: None,
    })
    .await
    .map_err(|e| ScrapeError::Navigation(e.to_string()))?;

    let mut paused = page
        .event_listener::<EventRequestPaused>()
        .await
        .map_err(|e| ScrapeError::Navigation(e.to_string()))?;

    let interceptor = page.clone();
    tokio::spawn(async move {
        while let Some(event) = paused.next().await {
            let abort = FailRequestParams::new(event.request_id.clone(), ErrorReason::Aborted);
            if let Err(e) = interceptor.execute(abort).await {
                log::trace!("Failed to abort blocked request: {}", e);
                break;
            }
        }
    });

    Ok(())
}

/// Polls for the results container until it appears or the deadline passes.
///
/// The container's absence is indistinguishable here from a captcha
/// interstitial or a markup change; all of them surface as the same timeout.
async fn wait_for_results(page: &Page) -> Result<(), ScrapeError> {
    let deadline = tokio::time::Instant::now() + SELECTOR_WAIT_TIMEOUT;

    loop {
        if page.find_element(RESULTS_READY_SELECTOR).await.is_ok() {
            return Ok(());
        }
        if tokio::time::Instant::now() >= deadline {
            return Err(ScrapeError::SelectorTimeout {
                selector: RESULTS_READY_SELECTOR.to_string(),
                timeout_secs: SELECTOR_WAIT_TIMEOUT.as_secs(),
            });
        }
        tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
    }
}
