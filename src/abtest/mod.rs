//! A/B test evaluation.
//!
//! The evaluator is pure: it reads the recorded results, never mutates
//! the stored test, and produces identical output on every call. The
//! confidence label is a heuristic derived from the relative difference
//! between the two results against fixed thresholds; it is not a
//! statistical p-value and must not be read as one.

use chrono::{DateTime, Utc};

use crate::types::{AbTest, AbTestOutcome, AbTestStatus, Confidence, TestVariable};

/// Relative difference below this is a low-confidence read.
pub const LOW_THRESHOLD: f64 = 0.10;
/// Relative difference below this (and at least `LOW_THRESHOLD`) is
/// moderate; anything larger is high.
pub const MODERATE_THRESHOLD: f64 = 0.25;

const EPSILON: f64 = 1e-9;

/// Evaluate one experiment.
///
/// Missing results produce a null winner with an "insufficient data"
/// label, not an error. Equal results are a tie: null winner, low
/// confidence.
pub fn evaluate_test(test: &AbTest) -> AbTestOutcome {
    let (Some(a), Some(b)) = (test.result_a, test.result_b) else {
        return AbTestOutcome {
            winner: None,
            confidence: Confidence::InsufficientData,
            insight: format!(
                "Record results for both variables of \"{}\" before drawing a conclusion.",
                test.hypothesis
            ),
        };
    };

    let winner = match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Greater) => Some(TestVariable::A),
        Some(std::cmp::Ordering::Less) => Some(TestVariable::B),
        _ => None,
    };

    let relative = (a - b).abs() / a.max(b).max(EPSILON);
    let confidence = if winner.is_none() || relative < LOW_THRESHOLD {
        Confidence::Low
    } else if relative < MODERATE_THRESHOLD {
        Confidence::Moderate
    } else {
        Confidence::High
    };

    AbTestOutcome {
        winner,
        confidence,
        insight: insight_for(&test.psychology_principle, winner, test),
    }
}

/// Complete an active test: fixes winner, learning, and completion time
/// permanently. Returns a new record; the input is untouched. The
/// stored winner always matches what [`evaluate_test`] computes from
/// the stored results.
pub fn complete_test(
    test: &AbTest,
    result_a: f64,
    result_b: f64,
    learning: Option<String>,
    completed_at: DateTime<Utc>,
) -> AbTest {
    let mut completed = test.clone();
    completed.result_a = Some(result_a);
    completed.result_b = Some(result_b);

    let outcome = evaluate_test(&completed);
    completed.winner = outcome.winner;
    completed.learning = learning.or(Some(outcome.insight));
    completed.status = AbTestStatus::Completed;
    completed.completed_at = Some(completed_at);

    completed
}

// Insight table keyed by psychology principle. Matching is on a
// lowercase substring so "Curiosity Gap" and "curiosity" both hit the
// curiosity row.
struct InsightRow {
    principle: &'static str,
    won: &'static str,
    lost: &'static str,
}

static INSIGHTS: &[InsightRow] = &[
    InsightRow {
        principle: "curiosity",
        won: "The curiosity framing pulled more of your audience through. Keep opening loops early, but make sure the payoff matches the tease or trust erodes.",
        lost: "The curiosity framing underperformed here. Your audience may prefer a direct promise over a withheld one for this topic.",
    },
    InsightRow {
        principle: "social proof",
        won: "Social proof moved the needle: your audience acts when they see others already have. Surface numbers, testimonials, or visible results more often.",
        lost: "Social proof did not win this round. With a smaller or newer audience, borrowed credibility can read as generic; your own results may carry more weight.",
    },
    InsightRow {
        principle: "loss aversion",
        won: "Framing the cost of inaction outperformed framing the gain. Your audience responds to what they stand to lose; use this sparingly so it keeps its edge.",
        lost: "The loss framing lost. This audience seems to respond better to aspiration than to warnings; lead with the upside.",
    },
    InsightRow {
        principle: "reciprocity",
        won: "Giving value up front won. The more you hand over for free, the more this audience gives back in engagement.",
        lost: "Up-front value alone did not win here. Pair the free value with a clearer ask; generosity without direction leaves the action on the table.",
    },
    InsightRow {
        principle: "scarcity",
        won: "The scarcity angle converted better. Limited framing creates urgency for this audience, but repeat it too often and it stops being believable.",
        lost: "Scarcity did not move this audience. Artificial urgency may be reading as pressure; test authentic deadlines instead.",
    },
];

fn insight_for(principle: &str, winner: Option<TestVariable>, test: &AbTest) -> String {
    let needle = principle.to_lowercase();
    let row = INSIGHTS
        .iter()
        .find(|row| needle.contains(row.principle));

    match (row, winner) {
        // Variable A is conventionally the principle-led variant.
        (Some(row), Some(TestVariable::A)) => row.won.to_string(),
        (Some(row), Some(TestVariable::B)) => row.lost.to_string(),
        (Some(_), None) | (None, None) => format!(
            "The results tied on {}. The variable you tested may not matter to this audience; test a bolder difference next.",
            test.metric
        ),
        (None, Some(side)) => format!(
            "Variable {} won on {}. Fold the winning choice into your default and test the next variable.",
            match side {
                TestVariable::A => "A",
                TestVariable::B => "B",
            },
            test.metric
        ),
    }
}
