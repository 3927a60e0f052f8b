//! Background browser teardown.
//!
//! Closing the browser can take seconds the caller should not wait for, so
//! teardown runs as a detached task: a graceful close attempt with a short
//! deadline, then force-closing every page and one last close attempt. The
//! spawned task's handle is returned so callers that need to observe
//! completion (tests, shutdown hooks) can await it.

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::config::{TEARDOWN_FORCE_TIMEOUT, TEARDOWN_GRACE_TIMEOUT};

/// A page that can be forcibly closed during teardown.
#[async_trait]
pub trait ClosablePage: Send {
    async fn force_close(self) -> Result<(), String>;
}

/// A browser the teardown sequence can drive.
///
/// Implemented for the real CDP browser and for mocks in tests.
#[async_trait]
pub trait ClosableBrowser: Send + 'static {
    type Page: ClosablePage;

    async fn close(&mut self) -> Result<(), String>;
    async fn pages(&self) -> Result<Vec<Self::Page>, String>;
}

/// Starts tearing down the browser in the background and returns immediately.
///
/// The sequence never propagates an error: every failure past the graceful
/// attempt is swallowed, since at that point the process-level resources are
/// the only thing left to reclaim and the scrape result has already been
/// returned.
pub fn teardown<B: ClosableBrowser>(mut browser: B) -> JoinHandle<()> {
    tokio::spawn(async move {
        match timeout(TEARDOWN_GRACE_TIMEOUT, browser.close()).await {
            Ok(Ok(())) => {
                log::debug!("Browser closed gracefully");
                return;
            }
            Ok(Err(e)) => log::debug!("Graceful browser close failed: {}", e),
            Err(_) => log::debug!(
                "Graceful browser close exceeded {:?}",
                TEARDOWN_GRACE_TIMEOUT
            ),
        }

        // Force-close all pages in parallel, ignoring individual failures.
        let pages = browser.pages().await.unwrap_or_default();
        futures::future::join_all(pages.into_iter().map(|page| async move {
            if let Err(e) = page.force_close().await {
                log::trace!("Force page close failed: {}", e);
            }
        }))
        .await;

        // Final attempt with a tighter deadline; outcome no longer matters.
        let _ = timeout(TEARDOWN_FORCE_TIMEOUT, browser.close()).await;
        log::debug!("Browser teardown finished");
    })
}

#[async_trait]
impl ClosablePage for chromiumoxide::Page {
    async fn force_close(self) -> Result<(), String> {
        chromiumoxide::Page::close(self)
            .await
            .map_err(|e| e.to_string())
    }
}

#[async_trait]
impl ClosableBrowser for chromiumoxide::Browser {
    type Page = chromiumoxide::Page;

    async fn close(&mut self) -> Result<(), String> {
        chromiumoxide::Browser::close(self)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn pages(&self) -> Result<Vec<Self::Page>, String> {
        chromiumoxide::Browser::pages(self)
            .await
            .map_err(|e| e.to_string())
    }
}
