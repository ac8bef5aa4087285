use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::ContentPillar;
use super::metrics::AnalysisResult;

/// A previously persisted post, supplied in full by the caller. The
/// engine keeps no history of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    pub id: String,
    /// Without the leading `#`.
    pub hashtags: Vec<String>,
    pub pillar: ContentPillar,
    pub created_at: DateTime<Utc>,
}

/// A persisted analysis result, joined to its post by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub post_id: String,
    pub result: AnalysisResult,
}

/// Aggregate performance of a single hashtag across the supplied history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagPerformance {
    pub tag: String,
    pub usage_count: usize,
    pub average_score: f64,
    /// Id of the highest scoring post that used the tag.
    pub best_post: String,
}

/// Aggregate performance of an exact hashtag set (order-independent).
/// Only reported once the set has enough samples to mean anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagSetPerformance {
    /// Sorted, deduplicated.
    pub tags: Vec<String>,
    pub average_score: f64,
    pub sample_size: usize,
}
