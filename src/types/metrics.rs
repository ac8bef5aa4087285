use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ContentPillar, PostFormat};

/// Raw engagement counters for one published post, as recorded by the
/// caller. All counts are non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetrics {
    pub reach: u64,
    pub impressions: u64,
    pub likes: u64,
    pub comments: u64,
    pub saves: u64,
    pub shares: u64,
    pub follows: u64,

    pub follower_count: u64,
    pub post_format: PostFormat,
    pub content_pillar: ContentPillar,
    pub date: DateTime<Utc>,
}

/// The five metrics tracked against the benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackedMetric {
    #[serde(rename = "engagementRate")]
    Engagement,
    #[serde(rename = "saveRate")]
    Save,
    #[serde(rename = "shareRate")]
    Share,
    #[serde(rename = "commentRate")]
    Comment,
    #[serde(rename = "followRate")]
    Follow,
}

impl TrackedMetric {
    pub const ALL: [TrackedMetric; 5] = [
        TrackedMetric::Engagement,
        TrackedMetric::Save,
        TrackedMetric::Share,
        TrackedMetric::Comment,
        TrackedMetric::Follow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedMetric::Engagement => "engagementRate",
            TrackedMetric::Save => "saveRate",
            TrackedMetric::Share => "shareRate",
            TrackedMetric::Comment => "commentRate",
            TrackedMetric::Follow => "followRate",
        }
    }
}

/// One row of the benchmark comparison: observed value against the
/// bucket's expected median, mapped onto the heuristic 0..=100 percentile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub metric: TrackedMetric,
    pub value: f64,
    pub benchmark: f64,
    pub percentile: f64,
}

/// Full diagnostic output for one `PostMetrics`.
///
/// One-to-one with its metrics instance; recomputed whenever the metrics
/// change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub engagement_rate: f64,
    pub save_rate: f64,
    pub share_rate: f64,
    pub comment_rate: f64,
    pub follow_rate: f64,

    /// Rounded weighted mean of the five percentiles.
    pub overall_score: u32,
    pub benchmark_comparison: Vec<BenchmarkComparison>,

    pub diagnosis: String,
    pub improvements: Vec<String>,
    pub ab_test_suggestion: String,
}
