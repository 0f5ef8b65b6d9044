//! Book record data structures.

use serde::{Deserialize, Serialize};

/// Origin taxonomy for an extracted record.
///
/// The target catalogue has no dedicated entry for this source site, so
/// every scraped record carries the reserved fallback variant for
/// unclassified external origins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookSource {
    /// Unclassified external origin
    Other,
}

impl BookSource {
    /// Stable string form, as used in the identity fingerprint.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookSource::Other => "OTHER",
        }
    }
}

/// One extracted shelf entry.
///
/// Constructed once per qualifying row and immutable afterwards. Optional
/// fields serialize as explicit `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Origin taxonomy entry
    pub source: BookSource,

    /// Source site's numeric identifier for the work
    pub external_id: Option<String>,

    /// Display title as rendered in the listing
    pub title: String,

    /// Comma-joined author display names
    pub authors: Option<String>,

    /// Page count parsed from a free-text cell
    pub page_count: Option<u32>,

    /// Publication year parsed from a free-text cell
    pub published_year: Option<u32>,

    /// Thumbnail image URL
    pub cover_url: Option<String>,

    /// Deduplication key over source, external id, title, and authors
    pub key_hash: String,
}
