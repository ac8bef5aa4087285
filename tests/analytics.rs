use chrono::{TimeZone, Utc};
use creator_core::types::{AnalysisResult, ContentPillar, StoredPost, StoredResult};
use creator_core::{analyze_hashtag_performance, find_best_hashtag_sets};

fn make_post(id: &str, hashtags: &[&str]) -> StoredPost {
    StoredPost {
        id: id.into(),
        hashtags: hashtags.iter().map(|t| t.to_string()).collect(),
        pillar: ContentPillar::Education,
        created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    }
}

fn make_result(post_id: &str, overall_score: u32) -> StoredResult {
    StoredResult {
        post_id: post_id.into(),
        result: AnalysisResult {
            engagement_rate: 0.0,
            save_rate: 0.0,
            share_rate: 0.0,
            comment_rate: 0.0,
            follow_rate: 0.0,
            overall_score,
            benchmark_comparison: vec![],
            diagnosis: "d".into(),
            improvements: vec!["i".into()],
            ab_test_suggestion: "a".into(),
        },
    }
}

#[test]
fn tags_rank_by_average_score_then_usage() {
    let posts = vec![
        make_post("p1", &["fitness", "gym"]),
        make_post("p2", &["fitness", "homeworkouts"]),
        make_post("p3", &["gym"]),
    ];
    let results = vec![
        make_result("p1", 80),
        make_result("p2", 60),
        make_result("p3", 40),
    ];

    let ranked = analyze_hashtag_performance(&posts, &results);

    // fitness: avg 70 over 2 uses; gym: avg 60 over 2; homeworkouts: 60 over 1.
    assert_eq!(ranked[0].tag, "fitness");
    assert_eq!(ranked[0].usage_count, 2);
    assert_eq!(ranked[0].average_score, 70.0);
    assert_eq!(ranked[0].best_post, "p1");

    // Tie on average score broken by usage count.
    assert_eq!(ranked[1].tag, "gym");
    assert_eq!(ranked[2].tag, "homeworkouts");
}

#[test]
fn equal_score_and_usage_fall_back_to_first_seen_order() {
    let posts = vec![make_post("p1", &["alpha", "beta"])];
    let results = vec![make_result("p1", 50)];

    let ranked = analyze_hashtag_performance(&posts, &results);
    assert_eq!(ranked[0].tag, "alpha");
    assert_eq!(ranked[1].tag, "beta");
}

#[test]
fn posts_without_results_are_ignored() {
    let posts = vec![
        make_post("scored", &["fitness"]),
        make_post("unscored", &["orphan"]),
    ];
    let results = vec![make_result("scored", 75)];

    let ranked = analyze_hashtag_performance(&posts, &results);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].tag, "fitness");
}

#[test]
fn empty_history_yields_empty_output() {
    assert!(analyze_hashtag_performance(&[], &[]).is_empty());
    assert!(find_best_hashtag_sets(&[], &[]).is_empty());
}

#[test]
fn set_grouping_is_order_independent() {
    let posts = vec![
        make_post("p1", &["fitness", "gym", "workout"]),
        make_post("p2", &["workout", "fitness", "gym"]),
    ];
    let results = vec![make_result("p1", 80), make_result("p2", 60)];

    let sets = find_best_hashtag_sets(&posts, &results);
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].sample_size, 2);
    assert_eq!(sets[0].average_score, 70.0);

    let mut expected = vec!["fitness".to_string(), "gym".into(), "workout".into()];
    expected.sort();
    assert_eq!(sets[0].tags, expected);
}

#[test]
fn single_sample_sets_are_silently_excluded() {
    let posts = vec![
        make_post("p1", &["fitness", "gym"]),
        make_post("p2", &["fitness", "gym"]),
        make_post("p3", &["solo", "tags"]),
    ];
    let results = vec![
        make_result("p1", 80),
        make_result("p2", 70),
        make_result("p3", 95),
    ];

    let sets = find_best_hashtag_sets(&posts, &results);
    assert_eq!(sets.len(), 1, "single-sample set must not be reported");
    assert_eq!(sets[0].sample_size, 2);
}

#[test]
fn aggregation_is_deterministic_across_calls() {
    let posts = vec![
        make_post("p1", &["a", "b", "c"]),
        make_post("p2", &["c", "a"]),
        make_post("p3", &["b"]),
    ];
    let results = vec![
        make_result("p1", 55),
        make_result("p2", 65),
        make_result("p3", 45),
    ];

    let first = analyze_hashtag_performance(&posts, &results);
    let second = analyze_hashtag_performance(&posts, &results);
    assert_eq!(first, second);
}
