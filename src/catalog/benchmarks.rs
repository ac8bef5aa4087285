//! The benchmark table: expected-rate bands keyed by post format and
//! follower-size bucket.
//!
//! Medians and spreads are tuning constants calibrated against typical
//! creator-account performance, not statistics derived from a dataset.
//! The spread is the rate distance that moves the percentile by 50
//! points, so `median` maps to 50 and `median + spread` maps to 100.
//! They are stable across calls; changing them is a scoring contract
//! change.

use serde::{Deserialize, Serialize};

use crate::types::{PostFormat, TrackedMetric};

/// Expected band for one metric: the bucket median and the percentile
/// scaling constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricBand {
    pub median: f64,
    pub spread: f64,
}

const fn band(median: f64, spread: f64) -> MetricBand {
    MetricBand { median, spread }
}

/// One benchmark row: a (format, follower bucket) segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub format: PostFormat,
    pub min_followers: u64,
    /// `None` marks the open-ended largest bucket.
    pub max_followers: Option<u64>,

    pub engagement: MetricBand,
    pub save: MetricBand,
    pub share: MetricBand,
    pub comment: MetricBand,
    pub follow: MetricBand,
}

impl BenchmarkRow {
    pub fn contains(&self, follower_count: u64) -> bool {
        follower_count >= self.min_followers
            && self.max_followers.map_or(true, |max| follower_count < max)
    }

    pub fn band(&self, metric: TrackedMetric) -> MetricBand {
        match metric {
            TrackedMetric::Engagement => self.engagement,
            TrackedMetric::Save => self.save,
            TrackedMetric::Share => self.share,
            TrackedMetric::Comment => self.comment,
            TrackedMetric::Follow => self.follow,
        }
    }
}

/// Read-only benchmark registry. Buckets are fixed, ascending and
/// non-overlapping per format, covering 0 to infinity.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        BenchmarkTable { rows }
    }

    /// The built-in production table.
    pub fn builtin() -> Self {
        BenchmarkTable { rows: builtin_rows() }
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    /// The row for this format whose bucket contains `follower_count`.
    /// The built-in table is total by construction; `None` only occurs
    /// for a substitute table with gaps.
    pub fn row_for(&self, format: PostFormat, follower_count: u64) -> Option<&BenchmarkRow> {
        self.rows
            .iter()
            .find(|row| row.format == format && row.contains(follower_count))
    }
}

const BUCKETS: [(u64, Option<u64>); 4] = [
    (0, Some(1_000)),
    (1_000, Some(10_000)),
    (10_000, Some(100_000)),
    (100_000, None),
];

// Engagement bands per format, largest for reels on small accounts and
// shrinking as follower count grows. Save/share/comment/follow bands
// follow the same shape at lower magnitudes.
fn builtin_rows() -> Vec<BenchmarkRow> {
    let mut rows = Vec::with_capacity(16);

    // (engagement medians per bucket, then a per-format multiplier for
    // the smaller metrics)
    let formats: [(PostFormat, [f64; 4], f64); 4] = [
        (PostFormat::Reel, [9.0, 7.0, 5.0, 3.5], 1.0),
        (PostFormat::Carousel, [8.0, 6.0, 4.5, 3.0], 1.2),
        (PostFormat::Image, [6.0, 4.5, 3.5, 2.5], 0.8),
        (PostFormat::Story, [5.0, 4.0, 3.0, 2.0], 0.6),
    ];

    for (format, engagement_medians, factor) in formats {
        for (bucket, (min, max)) in BUCKETS.into_iter().enumerate() {
            let e = engagement_medians[bucket];
            rows.push(BenchmarkRow {
                format,
                min_followers: min,
                max_followers: max,
                engagement: band(e, e),
                save: band(e * 0.15 * factor, e * 0.15 * factor),
                share: band(e * 0.08 * factor, e * 0.08 * factor),
                comment: band(e * 0.10 * factor, e * 0.10 * factor),
                follow: band(e * 0.05 * factor, e * 0.05 * factor),
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_buckets_cover_all_follower_counts() {
        let table = BenchmarkTable::builtin();
        let formats = [
            PostFormat::Reel,
            PostFormat::Carousel,
            PostFormat::Image,
            PostFormat::Story,
        ];
        let probes = [0, 999, 1_000, 9_999, 10_000, 99_999, 100_000, 5_000_000];

        for format in formats {
            for followers in probes {
                assert!(
                    table.row_for(format, followers).is_some(),
                    "no bucket for {format:?} at {followers} followers"
                );
            }
        }
    }

    #[test]
    fn builtin_buckets_do_not_overlap() {
        let table = BenchmarkTable::builtin();
        for format in [
            PostFormat::Reel,
            PostFormat::Carousel,
            PostFormat::Image,
            PostFormat::Story,
        ] {
            for followers in [0, 500, 1_000, 50_000, 100_000, 1_000_000] {
                let matching = table
                    .rows()
                    .iter()
                    .filter(|row| row.format == format && row.contains(followers))
                    .count();
                assert_eq!(matching, 1);
            }
        }
    }
}
