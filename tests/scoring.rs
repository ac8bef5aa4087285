use chrono::{TimeZone, Utc};
use creator_core::types::{ContentPillar, PostFormat, PostMetrics, TrackedMetric};
use creator_core::ContentEngine;

fn make_metrics() -> PostMetrics {
    PostMetrics {
        reach: 10_000,
        impressions: 12_000,
        likes: 500,
        comments: 30,
        saves: 100,
        shares: 20,
        follows: 15,
        follower_count: 5_000,
        post_format: PostFormat::Reel,
        content_pillar: ContentPillar::Education,
        date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    }
}

#[test]
fn worked_example_rates_match_contract() {
    let engine = ContentEngine::default();
    let result = engine.score(&make_metrics());

    // (500 + 30 + 100 + 20) / 10000 * 100 = 6.50
    assert_eq!(result.engagement_rate, 6.50);
    assert_eq!(result.save_rate, 1.00);
    assert_eq!(result.share_rate, 0.20);
    assert_eq!(result.comment_rate, 0.30);
    assert_eq!(result.follow_rate, 0.15);
}

#[test]
fn zero_reach_produces_zero_rates_not_nan() {
    let engine = ContentEngine::default();
    let mut metrics = make_metrics();
    metrics.reach = 0;

    let result = engine.score(&metrics);
    assert_eq!(result.engagement_rate, 0.0);
    assert_eq!(result.save_rate, 0.0);
    assert_eq!(result.share_rate, 0.0);
    assert_eq!(result.comment_rate, 0.0);
    assert_eq!(result.follow_rate, 0.0);
    for entry in &result.benchmark_comparison {
        assert!(entry.value == 0.0);
        assert!(!entry.percentile.is_nan());
    }
}

#[test]
fn percentiles_are_always_clamped() {
    let engine = ContentEngine::default();

    // A wildly overperforming post.
    let mut hot = make_metrics();
    hot.likes = 9_000;
    hot.saves = 5_000;
    hot.shares = 3_000;
    hot.comments = 2_000;
    hot.follows = 1_000;

    // A dead post.
    let mut cold = make_metrics();
    cold.likes = 0;
    cold.saves = 0;
    cold.shares = 0;
    cold.comments = 0;
    cold.follows = 0;

    for metrics in [hot, cold, make_metrics()] {
        let result = engine.score(&metrics);
        assert_eq!(result.benchmark_comparison.len(), 5);
        for entry in &result.benchmark_comparison {
            assert!(
                (0.0..=100.0).contains(&entry.percentile),
                "{:?} percentile {} out of range",
                entry.metric,
                entry.percentile
            );
        }
        assert!(result.overall_score <= 100);
    }
}

#[test]
fn comparison_rows_follow_the_tracked_metric_order() {
    let engine = ContentEngine::default();
    let result = engine.score(&make_metrics());

    let metrics: Vec<TrackedMetric> = result
        .benchmark_comparison
        .iter()
        .map(|entry| entry.metric)
        .collect();
    assert_eq!(metrics, TrackedMetric::ALL.to_vec());
}

#[test]
fn increasing_a_metric_never_decreases_the_overall_score() {
    let engine = ContentEngine::default();
    let baseline = engine.score(&make_metrics()).overall_score;

    let mut more_saves = make_metrics();
    more_saves.saves += 200;
    assert!(engine.score(&more_saves).overall_score >= baseline);

    let mut more_likes = make_metrics();
    more_likes.likes += 1_000;
    assert!(engine.score(&more_likes).overall_score >= baseline);

    let mut more_follows = make_metrics();
    more_follows.follows += 50;
    assert!(engine.score(&more_follows).overall_score >= baseline);
}

#[test]
fn diagnosis_and_improvements_are_never_empty() {
    let engine = ContentEngine::default();

    let extremes = [
        (0, 0, 0, 0, 0),
        (9_000, 5_000, 3_000, 2_000, 1_000),
        (500, 0, 0, 0, 0),
        (0, 500, 0, 0, 0),
    ];

    for (likes, saves, shares, comments, follows) in extremes {
        let mut metrics = make_metrics();
        metrics.likes = likes;
        metrics.saves = saves;
        metrics.shares = shares;
        metrics.comments = comments;
        metrics.follows = follows;

        let result = engine.score(&metrics);
        assert!(!result.diagnosis.is_empty());
        assert!(!result.improvements.is_empty());
        assert!(!result.ab_test_suggestion.is_empty());
    }
}

#[test]
fn follower_bucket_changes_the_benchmark() {
    let engine = ContentEngine::default();

    let small = engine.score(&make_metrics());

    let mut big_account = make_metrics();
    big_account.follower_count = 500_000;
    let big = engine.score(&big_account);

    // Larger accounts face smaller expected medians, so the same raw
    // numbers look better against the bigger bucket.
    let small_benchmark = small.benchmark_comparison[0].benchmark;
    let big_benchmark = big.benchmark_comparison[0].benchmark;
    assert!(big_benchmark < small_benchmark);
    assert!(big.benchmark_comparison[0].percentile >= small.benchmark_comparison[0].percentile);
}
