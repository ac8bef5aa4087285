use serde::{Deserialize, Serialize};

use super::enums::CheckCategory;

fn default_weight() -> u32 {
    1
}

/// One item of the fixed profile checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCheckItem {
    pub id: String,
    pub category: CheckCategory,
    pub label: String,
    pub description: String,
    pub psychology_reason: String,
    pub completed: bool,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// Per-category completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Number of completed items in the category.
    pub completed: usize,
    /// Number of items in the category.
    pub total: usize,
    /// Weighted completion percentage, rounded. 0 for an empty category.
    pub score: u32,
}
