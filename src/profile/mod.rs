//! Profile checklist scoring: weighted completion ratios, overall and
//! per category.

use std::collections::BTreeMap;

use crate::types::{CategoryScore, CheckCategory, ProfileCheckItem};

/// Weighted completion percentage over all items, rounded to the
/// nearest integer. An empty list scores 0.
pub fn calculate_profile_score(items: &[ProfileCheckItem]) -> u32 {
    weighted_score(items.iter())
}

/// Per-category completion summary. Categories with no items score 0
/// and report zero counts.
pub fn category_scores(items: &[ProfileCheckItem]) -> BTreeMap<CheckCategory, CategoryScore> {
    let mut scores = BTreeMap::new();

    for category in CheckCategory::ALL {
        let in_scope: Vec<&ProfileCheckItem> =
            items.iter().filter(|item| item.category == category).collect();

        scores.insert(
            category,
            CategoryScore {
                completed: in_scope.iter().filter(|item| item.completed).count(),
                total: in_scope.len(),
                score: weighted_score(in_scope.into_iter()),
            },
        );
    }

    scores
}

fn weighted_score<'a>(items: impl Iterator<Item = &'a ProfileCheckItem>) -> u32 {
    let mut completed_weight = 0u64;
    let mut total_weight = 0u64;

    for item in items {
        total_weight += u64::from(item.weight);
        if item.completed {
            completed_weight += u64::from(item.weight);
        }
    }

    if total_weight == 0 {
        return 0;
    }

    (completed_weight as f64 / total_weight as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: CheckCategory, completed: bool, weight: u32) -> ProfileCheckItem {
        ProfileCheckItem {
            id: id.into(),
            category,
            label: id.into(),
            description: String::new(),
            psychology_reason: String::new(),
            completed,
            weight,
        }
    }

    #[test]
    fn empty_list_scores_zero() {
        assert_eq!(calculate_profile_score(&[]), 0);
    }

    #[test]
    fn weights_shift_the_score() {
        let items = vec![
            item("a", CheckCategory::Bio, true, 3),
            item("b", CheckCategory::Bio, false, 1),
        ];
        assert_eq!(calculate_profile_score(&items), 75);
    }

    #[test]
    fn category_scores_cover_empty_categories() {
        let items = vec![item("a", CheckCategory::Name, true, 1)];
        let scores = category_scores(&items);

        assert_eq!(scores.len(), CheckCategory::ALL.len());
        assert_eq!(scores[&CheckCategory::Name].score, 100);
        let pinned = scores[&CheckCategory::Pinned];
        assert_eq!(pinned.total, 0);
        assert_eq!(pinned.score, 0);
    }

    #[test]
    fn toggling_an_item_and_back_restores_the_score() {
        let mut items = vec![
            item("a", CheckCategory::Cta, true, 2),
            item("b", CheckCategory::Cta, false, 1),
        ];
        let before = calculate_profile_score(&items);

        items[1].completed = true;
        let toggled = calculate_profile_score(&items);
        assert_ne!(before, toggled);

        items[1].completed = false;
        assert_eq!(calculate_profile_score(&items), before);
    }
}
