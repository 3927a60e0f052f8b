//! Data models shared across the application.

use serde::{Deserialize, Serialize};

/// A single phone search result extracted from the device database.
///
/// All fields come straight from the scraped markup:
/// - `id` is the site-relative link path of the phone's detail page and serves
///   as an opaque identifier (e.g. `apple_iphone_15-12559.php`)
/// - `name` is the display name shown in the result list
/// - `image` is the thumbnail URL
///
/// Fields are non-empty whenever the source page provides them; a missing
/// attribute on an otherwise well-formed item degrades to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// Site-relative link path identifying the phone.
    pub id: String,
    /// Display name of the phone.
    pub name: String,
    /// Thumbnail image URL.
    pub image: String,
}
