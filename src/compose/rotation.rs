//! Index-derived fragment selection.
//!
//! Variety across variants comes from an explicit rotation index, not a
//! seeded PRNG: the starting offset for each slot is derived from the
//! input bytes alone, and variant `i` walks `offset + i` through the
//! pool. Identical input always selects identical fragments; different
//! variant positions never collide while the pool is large enough, and
//! cycle through the pool when it is not.

use sha2::{Digest, Sha256};

use crate::types::ContentInput;

/// Deterministic starting offset for one slot of one input.
pub fn slot_offset(input: &ContentInput, slot: &str) -> usize {
    let mut hasher = Sha256::new();
    hasher.update(input.canonical_string().as_bytes());
    hasher.update(b"/");
    hasher.update(slot.as_bytes());

    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);

    u64::from_be_bytes(bytes) as usize
}

/// Pool index for variant `index` given a slot offset. Cycles when the
/// pool is smaller than the variant count.
pub fn rotate(offset: usize, index: usize, pool_len: usize) -> usize {
    debug_assert!(pool_len > 0, "rotate over an empty pool");
    ((offset % pool_len) + (index % pool_len)) % pool_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentInput, Genre, HookType, TargetAction};

    fn input() -> ContentInput {
        ContentInput {
            genre: Genre::Fitness,
            theme: "morning workouts".into(),
            hook_type: HookType::Curiosity,
            target_action: TargetAction::Save,
            keywords: vec![],
            include_emoji: true,
        }
    }

    #[test]
    fn offset_is_stable_per_input_and_slot() {
        let a = slot_offset(&input(), "hook");
        let b = slot_offset(&input(), "hook");
        assert_eq!(a, b);
    }

    #[test]
    fn offset_differs_across_slots() {
        assert_ne!(slot_offset(&input(), "hook"), slot_offset(&input(), "story"));
    }

    #[test]
    fn rotation_is_distinct_while_pool_allows() {
        let offset = slot_offset(&input(), "hook");
        let picks: Vec<usize> = (0..4).map(|i| rotate(offset, i, 4)).collect();
        let mut sorted = picks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4, "picks collided: {picks:?}");
    }

    #[test]
    fn rotation_cycles_small_pools() {
        let offset = slot_offset(&input(), "cta");
        assert_eq!(rotate(offset, 0, 2), rotate(offset, 2, 2));
        assert_ne!(rotate(offset, 0, 2), rotate(offset, 1, 2));
    }
}
