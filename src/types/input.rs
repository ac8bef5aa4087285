use serde::{Deserialize, Serialize};

use super::enums::{Genre, HookType, TargetAction};

/// Structured marketing input for one composition call.
///
/// Immutable once constructed. Callers must ensure `theme` is non-blank
/// before handing it to the composer; the composer rejects a blank theme
/// as a contract violation rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    pub genre: Genre,
    pub theme: String,
    pub hook_type: HookType,
    pub target_action: TargetAction,
    /// Ordered; drawn round-robin into `{keyword}` placeholders.
    pub keywords: Vec<String>,
    pub include_emoji: bool,
}

impl ContentInput {
    pub fn theme_is_blank(&self) -> bool {
        self.theme.trim().is_empty()
    }

    /// Canonical byte form used for deterministic id and rotation-offset
    /// derivation. Field order is fixed; changing it changes every
    /// derived id.
    pub(crate) fn canonical_string(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.genre.as_str(),
            self.hook_type.as_str(),
            self.target_action.as_str(),
            self.theme,
            self.keywords.join(","),
            self.include_emoji,
        )
    }
}
