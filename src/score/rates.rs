//! Rate derivation from raw counters.
//!
//! All tracked rates are reach-denominated percentages rounded to two
//! decimal places. A post with zero reach has every rate defined as
//! exactly zero rather than NaN.

use crate::types::{PostMetrics, TrackedMetric};

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `count / reach * 100`, rounded to 2 decimals; 0 when reach is 0.
pub fn reach_rate(count: u64, reach: u64) -> f64 {
    if reach == 0 {
        return 0.0;
    }
    round2(count as f64 / reach as f64 * 100.0)
}

pub fn engagement_rate(m: &PostMetrics) -> f64 {
    reach_rate(m.likes + m.comments + m.saves + m.shares, m.reach)
}

pub fn rate_for(m: &PostMetrics, metric: TrackedMetric) -> f64 {
    match metric {
        TrackedMetric::Engagement => engagement_rate(m),
        TrackedMetric::Save => reach_rate(m.saves, m.reach),
        TrackedMetric::Share => reach_rate(m.shares, m.reach),
        TrackedMetric::Comment => reach_rate(m.comments, m.reach),
        TrackedMetric::Follow => reach_rate(m.follows, m.reach),
    }
}
