//! Configuration constants.
//!
//! This module defines all operational constants used throughout the
//! application: scrape timeouts, teardown deadlines, selectors, and the
//! outbound query-string contract.

use std::time::Duration;

/// Default base URL of the device database site.
pub const SEARCH_BASE_URL: &str = "https://www.gsmarena.com";

/// Path + query prefix for the search results page. The formatted query is
/// appended verbatim.
pub const SEARCH_PATH: &str = "/res.php3?sSearch=";

/// Navigation timeout for the search page.
///
/// Kept deliberately short: the results page is small once images and styles
/// are blocked, and a slow navigation almost always means the site is
/// throttling us rather than still rendering.
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(20);

/// How long to wait for the results container before giving up on the page.
pub const SELECTOR_WAIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Polling interval while waiting for the results container.
pub const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Grace period for the first, graceful `browser.close()` during teardown.
pub const TEARDOWN_GRACE_TIMEOUT: Duration = Duration::from_secs(3);

/// Deadline for the second close attempt after pages have been force-closed.
pub const TEARDOWN_FORCE_TIMEOUT: Duration = Duration::from_secs(1);

/// Selector whose presence marks a usable results page. Its absence covers
/// captcha interstitials, markup changes, and failed loads alike.
pub const RESULTS_READY_SELECTOR: &str = "#decrypted";

/// CSS path to the individual result list items.
pub const RESULT_ITEM_SELECTOR: &str = "div#review-body > .makers > ul > li";

/// Default packaged Chromium location for production deployments (the
/// serverless layer unpacks the browser here).
pub const PACKAGED_CHROMIUM_PATH: &str = "/opt/chromium/chrome";

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 3000;
