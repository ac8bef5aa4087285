pub mod enums;
pub mod input;
pub mod variant;
pub mod metrics;
pub mod analytics;
pub mod abtest;
pub mod profile;
pub mod identifiers;

pub use enums::{CheckCategory, ContentPillar, Genre, HookType, PostFormat, TargetAction};
pub use input::ContentInput;
pub use variant::{GeneratedVariant, ReelScript};
pub use metrics::{AnalysisResult, BenchmarkComparison, PostMetrics, TrackedMetric};
pub use analytics::{HashtagPerformance, HashtagSetPerformance, StoredPost, StoredResult};
pub use abtest::{AbTest, AbTestOutcome, AbTestStatus, Confidence, TestVariable};
pub use profile::{CategoryScore, ProfileCheckItem};
pub use identifiers::VariantId;
