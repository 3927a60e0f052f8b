//! HTML extraction for the search results page.
//!
//! Turns the rendered results markup into [`PhoneEntry`] values. Extraction
//! happens over the full page HTML rather than inside the browser, so the
//! rules here are unit-testable against fixture markup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::RESULT_ITEM_SELECTOR;
use crate::models::PhoneEntry;

#[cfg(test)]
mod tests;

const LINK_SELECTOR_STR: &str = "a";
const IMAGE_SELECTOR_STR: &str = "a > img";
const NAME_SELECTOR_STR: &str = "a > strong > span";

static ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(RESULT_ITEM_SELECTOR).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse result item selector '{}': {}",
            RESULT_ITEM_SELECTOR,
            e
        );
        fallback_selector()
    })
});

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LINK_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse link selector: {}", e);
        fallback_selector()
    })
});

static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(IMAGE_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse image selector: {}", e);
        fallback_selector()
    })
});

static NAME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(NAME_SELECTOR_STR).unwrap_or_else(|e| {
        log::error!("Failed to parse name selector: {}", e);
        fallback_selector()
    })
});

/// A known-valid selector that matches nothing, used when a static selector
/// string fails to parse. Keeps extraction running instead of panicking.
fn fallback_selector() -> Selector {
    match Selector::parse("*:not(*)") {
        Ok(s) => s,
        Err(_) => unreachable!("'*:not(*)' is a valid selector"),
    }
}

/// Extracts phone entries from the rendered search results HTML.
///
/// Each result list item must carry a link, a thumbnail image, and a name
/// span; items missing any of the three are skipped without aborting the
/// rest of the page. Missing attributes on present elements degrade to
/// empty strings.
pub fn extract_phone_entries(html: &str) -> Vec<PhoneEntry> {
    let document = Html::parse_document(html);
    let mut entries = Vec::new();

    for item in document.select(&ITEM_SELECTOR) {
        match extract_entry(item) {
            Some(entry) => entries.push(entry),
            None => {
                log::debug!("Skipping malformed result item: {}", item.html());
            }
        }
    }

    log::debug!("Extracted {} phone entries", entries.len());
    entries
}

/// Extracts a single entry from a result list item, or `None` if the item
/// lacks any of the required elements.
fn extract_entry(item: ElementRef<'_>) -> Option<PhoneEntry> {
    let link = item.select(&LINK_SELECTOR).next()?;
    let image = item.select(&IMAGE_SELECTOR).next()?;
    let name = item.select(&NAME_SELECTOR).next()?;

    Some(PhoneEntry {
        id: link.value().attr("href").unwrap_or_default().to_string(),
        image: image.value().attr("src").unwrap_or_default().to_string(),
        name: name.text().collect::<String>().trim().to_string(),
    })
}
