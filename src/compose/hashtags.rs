//! Hashtag block assembly.
//!
//! The genre's core set is merged with the hook-type and target-action
//! supplements, deduplicated preserving first-seen order, stably sorted
//! big-to-niche by popularity tier, and capped at the hashtag maximum.
//! Everything is driven by catalog order, so the output is fully
//! deterministic for a given input.

use crate::catalog::{Tag, TemplateCatalog, HASHTAG_MAX};
use crate::types::ContentInput;

pub fn assemble_hashtags(catalog: &TemplateCatalog, input: &ContentInput) -> Vec<String> {
    let mut merged: Vec<Tag> = Vec::new();

    let sources = [
        catalog.core_tags(input.genre),
        catalog.hook_supplement(input.hook_type),
        catalog.action_supplement(input.target_action),
    ];

    for source in sources {
        for tag in source {
            if !merged.iter().any(|seen| seen.name == tag.name) {
                merged.push(*tag);
            }
        }
    }

    // Stable sort keeps first-seen order within a tier.
    merged.sort_by_key(|tag| tag.tier);
    merged.truncate(HASHTAG_MAX);

    merged.into_iter().map(|tag| tag.name.to_string()).collect()
}
