//! The metrics scorer: derives rates from raw counters, maps them onto
//! benchmark percentiles, and resolves the diagnosis decision table.

pub mod rates;
pub mod diagnosis;

use crate::catalog::{BenchmarkTable, MetricBand};
use crate::types::{AnalysisResult, BenchmarkComparison, PostMetrics, TrackedMetric};

pub use diagnosis::{Percentiles, HIGH, LOW};
pub use rates::{engagement_rate, rate_for, reach_rate, round2};

/// Weight of each percentile in the overall score. Engagement and save
/// carry the most signal about content quality; these are documented
/// tuning constants that sum to 1 and are stable across calls.
pub const SCORE_WEIGHTS: [(TrackedMetric, f64); 5] = [
    (TrackedMetric::Engagement, 0.30),
    (TrackedMetric::Save, 0.30),
    (TrackedMetric::Share, 0.15),
    (TrackedMetric::Comment, 0.15),
    (TrackedMetric::Follow, 0.10),
];

pub struct MetricsScorer {
    benchmarks: BenchmarkTable,
}

impl Default for MetricsScorer {
    fn default() -> Self {
        Self { benchmarks: BenchmarkTable::builtin() }
    }
}

impl MetricsScorer {
    pub fn new(benchmarks: BenchmarkTable) -> Self {
        Self { benchmarks }
    }

    /// Score one post against its (format, follower bucket) benchmark.
    ///
    /// Never errors: zero reach produces zero rates, and a substitute
    /// table with a missing bucket produces neutral percentiles of 50.
    pub fn score(&self, metrics: &PostMetrics) -> AnalysisResult {
        let row = self
            .benchmarks
            .row_for(metrics.post_format, metrics.follower_count);

        // 1. Benchmark comparison per tracked metric, fixed order.
        let comparison: Vec<BenchmarkComparison> = TrackedMetric::ALL
            .iter()
            .map(|&metric| {
                let value = rate_for(metrics, metric);
                match row {
                    Some(row) => {
                        let band = row.band(metric);
                        BenchmarkComparison {
                            metric,
                            value,
                            benchmark: band.median,
                            percentile: percentile(value, band),
                        }
                    }
                    None => BenchmarkComparison {
                        metric,
                        value,
                        benchmark: 0.0,
                        percentile: 50.0,
                    },
                }
            })
            .collect();

        debug_assert!(
            comparison
                .iter()
                .all(|c| (0.0..=100.0).contains(&c.percentile)),
            "percentile out of range"
        );

        // 2. Weighted overall score.
        let overall: f64 = SCORE_WEIGHTS
            .iter()
            .map(|&(metric, weight)| {
                let entry = comparison
                    .iter()
                    .find(|c| c.metric == metric)
                    .map(|c| c.percentile)
                    .unwrap_or(50.0);
                entry * weight
            })
            .sum();
        let overall_score = overall.round() as u32;

        // 3. Resolve the decision table.
        let p = Percentiles {
            engagement: comparison[0].percentile,
            save: comparison[1].percentile,
            share: comparison[2].percentile,
            comment: comparison[3].percentile,
            follow: comparison[4].percentile,
        };
        let (diagnosis, improvements, ab_test_suggestion) = diagnosis::select(&p);

        AnalysisResult {
            engagement_rate: rate_for(metrics, TrackedMetric::Engagement),
            save_rate: rate_for(metrics, TrackedMetric::Save),
            share_rate: rate_for(metrics, TrackedMetric::Share),
            comment_rate: rate_for(metrics, TrackedMetric::Comment),
            follow_rate: rate_for(metrics, TrackedMetric::Follow),
            overall_score,
            benchmark_comparison: comparison,
            diagnosis,
            improvements,
            ab_test_suggestion,
        }
    }
}

/// Heuristic percentile: 50 at the bucket median, moved 50 points per
/// `spread` of distance, clamped to 0..=100. The spread is a tuned
/// scaling constant from the benchmark row, not a statistical stddev.
pub fn percentile(value: f64, band: MetricBand) -> f64 {
    let spread = if band.spread > 0.0 { band.spread } else { 1.0 };
    (50.0 + (value - band.median) / spread * 50.0).clamp(0.0, 100.0)
}
