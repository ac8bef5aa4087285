use creator_core::types::{CheckCategory, ProfileCheckItem};
use creator_core::{calculate_profile_score, category_scores};

fn make_item(id: &str, category: CheckCategory, completed: bool) -> ProfileCheckItem {
    ProfileCheckItem {
        id: id.into(),
        category,
        label: id.into(),
        description: "what to fix".into(),
        psychology_reason: "why it matters".into(),
        completed,
        weight: 1,
    }
}

fn make_checklist() -> Vec<ProfileCheckItem> {
    vec![
        make_item("name-keyword", CheckCategory::Name, true),
        make_item("bio-promise", CheckCategory::Bio, true),
        make_item("bio-cadence", CheckCategory::Bio, false),
        make_item("cta-link", CheckCategory::Cta, false),
        make_item("photo-face", CheckCategory::Photo, true),
        make_item("highlights-cover", CheckCategory::Highlights, false),
    ]
}

#[test]
fn score_is_the_weighted_completion_ratio() {
    // 3 of 6 unit-weight items complete.
    assert_eq!(calculate_profile_score(&make_checklist()), 50);
}

#[test]
fn repeated_calls_are_stable() {
    let items = make_checklist();
    let first = calculate_profile_score(&items);
    for _ in 0..10 {
        assert_eq!(calculate_profile_score(&items), first);
    }
}

#[test]
fn toggling_one_item_and_back_restores_the_score() {
    let mut items = make_checklist();
    let original = calculate_profile_score(&items);

    items[3].completed = true;
    assert_ne!(calculate_profile_score(&items), original);

    items[3].completed = false;
    assert_eq!(calculate_profile_score(&items), original);
}

#[test]
fn heavier_items_move_the_score_more() {
    let mut items = vec![
        make_item("pinned-best", CheckCategory::Pinned, true),
        make_item("pinned-recent", CheckCategory::Pinned, false),
    ];
    assert_eq!(calculate_profile_score(&items), 50);

    items[0].weight = 3;
    assert_eq!(calculate_profile_score(&items), 75);
}

#[test]
fn category_breakdown_counts_and_scores() {
    let scores = category_scores(&make_checklist());

    let bio = scores[&CheckCategory::Bio];
    assert_eq!(bio.completed, 1);
    assert_eq!(bio.total, 2);
    assert_eq!(bio.score, 50);

    let name = scores[&CheckCategory::Name];
    assert_eq!(name.score, 100);

    // No pinned items in the list: defined as 0, not NaN.
    let pinned = scores[&CheckCategory::Pinned];
    assert_eq!(pinned.total, 0);
    assert_eq!(pinned.score, 0);

    // Every category is present in the map.
    assert_eq!(scores.len(), CheckCategory::ALL.len());
}
