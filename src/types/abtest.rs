use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which side of a paired experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestVariable {
    A,
    B,
}

impl TestVariable {
    pub fn other(self) -> TestVariable {
        match self {
            TestVariable::A => TestVariable::B,
            TestVariable::B => TestVariable::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbTestStatus {
    Active,
    Completed,
}

/// A paired experiment record.
///
/// Created `Active` with null results; moves to `Completed` exactly once,
/// when both results are supplied, at which point `winner` and
/// `completed_at` are fixed permanently. The stored winner always matches
/// what the evaluator computes from the stored results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbTest {
    pub id: String,
    pub hypothesis: String,
    pub psychology_principle: String,
    pub variable_a: String,
    pub variable_b: String,
    /// Label of the metric being compared, e.g. "saves per 1k reach".
    pub metric: String,

    pub status: AbTestStatus,
    pub result_a: Option<f64>,
    pub result_b: Option<f64>,
    pub winner: Option<TestVariable>,
    pub learning: Option<String>,

    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Heuristic confidence label for an experiment outcome.
///
/// Derived from the relative difference between the two results against
/// fixed thresholds. This is a rough label, not a statistical p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    InsufficientData,
    Low,
    Moderate,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::InsufficientData => "insufficient data",
            Confidence::Low => "low",
            Confidence::Moderate => "moderate",
            Confidence::High => "high",
        }
    }
}

/// Result of evaluating one experiment. Pure data; the stored test is
/// never mutated by evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbTestOutcome {
    pub winner: Option<TestVariable>,
    pub confidence: Confidence,
    pub insight: String,
}
