use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifiers::VariantId;
use super::input::ContentInput;

/// One fully assembled candidate caption.
///
/// Created once per composition call and immutable afterwards; ownership
/// passes to the caller for storage or display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedVariant {
    pub id: VariantId,

    pub hook: String,
    pub story: String,
    pub value: String,
    pub cta: String,

    /// All four sections joined, followed by the hashtag block.
    pub full_caption: String,
    /// Deduplicated, ordered big-to-niche, capped at the hashtag maximum.
    /// Stored without the leading `#`.
    pub hashtags: Vec<String>,

    pub hook_reason: String,
    pub cta_reason: String,

    /// Back-reference to the input this variant was composed from.
    pub input: ContentInput,
    /// Informational only; never part of determinism checks.
    pub created_at: DateTime<Utc>,
}

/// A short reel script assembled from the reel section pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelScript {
    pub hook_line: String,
    pub broll_beat: String,
    pub on_screen_text: String,
    pub cta_line: String,
}
