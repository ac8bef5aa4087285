//! Hashtag performance analytics over caller-supplied history.
//!
//! Pure functions over the full history, recomputed per call; the
//! engine keeps no incremental state. Accumulation goes through
//! `BTreeMap` and explicit first-seen indices so output ordering is
//! fully deterministic, never an artifact of hash iteration order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::{HashtagPerformance, HashtagSetPerformance, StoredPost, StoredResult};

/// Minimum samples before an exact hashtag set is reported. Smaller
/// groups are single-sample noise and silently excluded.
pub const SET_MIN_SAMPLES: usize = 2;

struct TagAccumulator {
    first_seen: usize,
    usage_count: usize,
    score_sum: f64,
    best_post: String,
    best_score: u32,
}

/// Rank every tag used by a post that has a matching result.
///
/// Ordered by average score descending, then usage count descending,
/// then first-seen order. Posts without a result contribute nothing.
pub fn analyze_hashtag_performance(
    posts: &[StoredPost],
    results: &[StoredResult],
) -> Vec<HashtagPerformance> {
    let scores = score_index(results);

    let mut accumulators: BTreeMap<&str, TagAccumulator> = BTreeMap::new();
    let mut next_seen = 0usize;

    for post in posts {
        let Some(&score) = scores.get(post.id.as_str()) else {
            continue;
        };

        for tag in &post.hashtags {
            let acc = accumulators.entry(tag.as_str()).or_insert_with(|| {
                let acc = TagAccumulator {
                    first_seen: next_seen,
                    usage_count: 0,
                    score_sum: 0.0,
                    best_post: post.id.clone(),
                    best_score: score,
                };
                next_seen += 1;
                acc
            });

            acc.usage_count += 1;
            acc.score_sum += f64::from(score);
            if score > acc.best_score {
                acc.best_score = score;
                acc.best_post = post.id.clone();
            }
        }
    }

    let mut ranked: Vec<(usize, HashtagPerformance)> = accumulators
        .into_iter()
        .map(|(tag, acc)| {
            (
                acc.first_seen,
                HashtagPerformance {
                    tag: tag.to_string(),
                    usage_count: acc.usage_count,
                    average_score: acc.score_sum / acc.usage_count as f64,
                    best_post: acc.best_post,
                },
            )
        })
        .collect();

    ranked.sort_by(|(seen_a, a), (seen_b, b)| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
            .then(b.usage_count.cmp(&a.usage_count))
            .then(seen_a.cmp(seen_b))
    });

    ranked.into_iter().map(|(_, perf)| perf).collect()
}

/// Rank exact hashtag sets (order-independent equality) with at least
/// [`SET_MIN_SAMPLES`] scored posts. Same ordering contract as
/// [`analyze_hashtag_performance`].
pub fn find_best_hashtag_sets(
    posts: &[StoredPost],
    results: &[StoredResult],
) -> Vec<HashtagSetPerformance> {
    let scores = score_index(results);

    struct SetAccumulator {
        first_seen: usize,
        sample_size: usize,
        score_sum: f64,
    }

    let mut accumulators: BTreeMap<Vec<String>, SetAccumulator> = BTreeMap::new();
    let mut next_seen = 0usize;

    for post in posts {
        let Some(&score) = scores.get(post.id.as_str()) else {
            continue;
        };
        if post.hashtags.is_empty() {
            continue;
        }

        // Sorted + deduplicated key makes equality order-independent.
        let mut key = post.hashtags.clone();
        key.sort();
        key.dedup();

        let acc = accumulators.entry(key).or_insert_with(|| {
            let acc = SetAccumulator {
                first_seen: next_seen,
                sample_size: 0,
                score_sum: 0.0,
            };
            next_seen += 1;
            acc
        });
        acc.sample_size += 1;
        acc.score_sum += f64::from(score);
    }

    let mut ranked: Vec<(usize, HashtagSetPerformance)> = accumulators
        .into_iter()
        .filter(|(_, acc)| acc.sample_size >= SET_MIN_SAMPLES)
        .map(|(tags, acc)| {
            (
                acc.first_seen,
                HashtagSetPerformance {
                    tags,
                    average_score: acc.score_sum / acc.sample_size as f64,
                    sample_size: acc.sample_size,
                },
            )
        })
        .collect();

    ranked.sort_by(|(seen_a, a), (seen_b, b)| {
        b.average_score
            .partial_cmp(&a.average_score)
            .unwrap_or(Ordering::Equal)
            .then(b.sample_size.cmp(&a.sample_size))
            .then(seen_a.cmp(seen_b))
    });

    ranked.into_iter().map(|(_, perf)| perf).collect()
}

fn score_index(results: &[StoredResult]) -> BTreeMap<&str, u32> {
    let mut index = BTreeMap::new();
    for result in results {
        // First result wins if a caller supplies duplicates.
        index
            .entry(result.post_id.as_str())
            .or_insert(result.result.overall_score);
    }
    index
}
