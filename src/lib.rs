//! Deterministic content generation and performance scoring engine for
//! social creators.
//!
//! `creator-core` composes candidate captions, bios, and reel scripts
//! from a static template catalog, scores recorded post metrics against
//! segmented benchmarks, ranks hashtags across history, evaluates
//! paired experiments, and scores profile checklists. All operations
//! are deterministic and pure: identical inputs always produce
//! identical outputs, only the variant index introduces variety, and
//! the engine never persists anything itself.
//!
//! See <https://github.com/creatorenginehq/creator-engine> for the full
//! platform.

pub mod abtest;
pub mod analytics;
pub mod catalog;
pub mod compose;
pub mod profile;
pub mod score;
pub mod types;

use crate::catalog::{BenchmarkTable, TemplateCatalog};
use crate::compose::{ComposeError, VariantComposer};
use crate::score::MetricsScorer;
use crate::types::{
    AbTest, AbTestOutcome, AnalysisResult, ContentInput, GeneratedVariant, PostMetrics, ReelScript,
};

pub use abtest::{complete_test, evaluate_test};
pub use analytics::{analyze_hashtag_performance, find_best_hashtag_sets, SET_MIN_SAMPLES};
pub use compose::{assemble_hashtags, strip_emoji_tokens};
pub use profile::{calculate_profile_score, category_scores};

/// Facade bundling the composer and scorer over injected read-only
/// catalogs. Both catalogs are initialized once and never mutated, so
/// one engine can serve concurrent callers without locking.
pub struct ContentEngine {
    composer: VariantComposer,
    scorer: MetricsScorer,
}

impl Default for ContentEngine {
    fn default() -> Self {
        Self {
            composer: VariantComposer::default(),
            scorer: MetricsScorer::default(),
        }
    }
}

impl ContentEngine {
    pub fn new(catalog: TemplateCatalog, benchmarks: BenchmarkTable) -> Self {
        Self {
            composer: VariantComposer::new(catalog),
            scorer: MetricsScorer::new(benchmarks),
        }
    }

    pub fn compose(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<GeneratedVariant>, ComposeError> {
        self.composer.compose(input, count)
    }

    pub fn compose_bio(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<String>, ComposeError> {
        self.composer.compose_bio(input, count)
    }

    pub fn compose_reel_script(
        &self,
        input: &ContentInput,
        count: usize,
    ) -> Result<Vec<ReelScript>, ComposeError> {
        self.composer.compose_reel_script(input, count)
    }

    pub fn score(&self, metrics: &PostMetrics) -> AnalysisResult {
        self.scorer.score(metrics)
    }

    pub fn evaluate_test(&self, test: &AbTest) -> AbTestOutcome {
        abtest::evaluate_test(test)
    }
}
