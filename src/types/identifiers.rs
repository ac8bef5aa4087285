use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::input::ContentInput;

/// Deterministic variant identifier.
///
/// Derived from the canonical input bytes plus the variant index, so the
/// same input always yields the same id for the same position, and ids
/// are unique across positions within one call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    pub fn derive(input: &ContentInput, index: usize) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(input.canonical_string().as_bytes());
        hasher.update(b"#");
        hasher.update(index.to_string().as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        VariantId(format!("var:{}", &hex[..12]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
