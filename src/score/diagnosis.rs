//! The diagnosis decision table.
//!
//! An ordered list of rules over the five percentiles. The first
//! matching rule supplies the diagnosis and the A/B suggestion;
//! improvement lines are collected from every matching rule in order.
//! The final rule matches unconditionally, so every percentile
//! combination resolves to non-empty text.

/// The five benchmark percentiles of one analyzed post.
#[derive(Debug, Clone, Copy)]
pub struct Percentiles {
    pub engagement: f64,
    pub save: f64,
    pub share: f64,
    pub comment: f64,
    pub follow: f64,
}

/// Percentile below which a metric counts as weak.
pub const LOW: f64 = 35.0;
/// Percentile above which a metric counts as strong.
pub const HIGH: f64 = 65.0;

pub struct Rule {
    pub applies: fn(&Percentiles) -> bool,
    pub diagnosis: &'static str,
    pub improvement: &'static str,
    pub ab_suggestion: &'static str,
}

pub static RULES: &[Rule] = &[
    Rule {
        applies: |p| p.engagement >= HIGH && p.save >= HIGH,
        diagnosis: "This post is working on both fronts: people interact with it and they keep it. The topic and format combination is a repeatable winner for this account size.",
        improvement: "Turn this post into a series before the topic cools off; the audience has told you what they want more of.",
        ab_suggestion: "Test the same topic in your second-best format to see whether the topic or the format is doing the heavy lifting.",
    },
    Rule {
        applies: |p| p.engagement >= HIGH && p.save < LOW,
        diagnosis: "Reach and reactions are strong but almost nobody saves this post. It entertains in the moment without giving the audience anything worth returning to.",
        improvement: "Add a concrete, reference-worthy element: a checklist, a numbered framework, or exact steps people will want to look up later.",
        ab_suggestion: "Test an explicit save CTA against no CTA on the same content style and compare save rate.",
    },
    Rule {
        applies: |p| p.save >= HIGH && p.follow < LOW,
        diagnosis: "People value the content enough to save it but visiting your profile does not convert them into followers. The post is doing its job; the profile is dropping the handoff.",
        improvement: "Tighten the bio and pinned posts so a visitor understands within seconds what following gets them.",
        ab_suggestion: "Test a follow CTA that names your posting cadence against the current closing line.",
    },
    Rule {
        applies: |p| p.engagement >= HIGH && p.share < LOW,
        diagnosis: "The audience engages privately but does not pass the post along. The content lands personally without giving people a social reason to show it to someone else.",
        improvement: "Frame one line of the post as something the reader would send to a specific person, not broadcast to everyone.",
        ab_suggestion: "Test a 'send this to the friend who...' CTA against your usual one and compare share rate.",
    },
    Rule {
        applies: |p| p.comment < LOW && p.engagement >= LOW,
        diagnosis: "Other engagement is holding up but the comment section is quiet. The post reads as complete, leaving nothing for the audience to add.",
        improvement: "End with one genuinely open question, and reply to every early comment to keep threads alive.",
        ab_suggestion: "Test a binary either-or prompt against an open question as the closing line.",
    },
    Rule {
        applies: |p| p.engagement < LOW && p.save < LOW,
        diagnosis: "Both interaction and saves sit well below the benchmark for this format and account size. The hook is likely not earning the first few seconds of attention.",
        improvement: "Rewrite the first line to make a sharper promise or a bolder claim; nothing after the hook matters until the hook works.",
        ab_suggestion: "Test your current hook style against a number-led hook on the same topic.",
    },
    Rule {
        applies: |p| p.engagement < LOW,
        diagnosis: "Interaction is below the benchmark while other signals hold up. The content may be reaching people outside your core audience, or the topic may be drifting from what followers signed up for.",
        improvement: "Return to the topics your highest scoring posts covered and keep the format you used here.",
        ab_suggestion: "Test this format on a proven topic against a new topic to isolate which variable is dragging.",
    },
    Rule {
        applies: |p| p.follow >= HIGH,
        diagnosis: "This post converts viewers into followers at an unusually strong rate. It communicates what your account offers better than most of your content.",
        improvement: "Pin this post or rework it into your profile's first impression; it is your best advertisement right now.",
        ab_suggestion: "Test leading with the same promise in your next three hooks and watch follow rate.",
    },
    // Unconditional fallback keeps the table total.
    Rule {
        applies: |_| true,
        diagnosis: "Performance is within the expected range for this format and account size, with no single metric far from the benchmark.",
        improvement: "Change one variable at a time across upcoming posts so standout results are attributable.",
        ab_suggestion: "Test two hook styles on the same topic to start building your own benchmark history.",
    },
];

/// Resolve the table for one set of percentiles.
pub fn select(p: &Percentiles) -> (String, Vec<String>, String) {
    let matching: Vec<&Rule> = RULES.iter().filter(|rule| (rule.applies)(p)).collect();

    // The fallback rule guarantees at least one match.
    let first = matching[0];
    let improvements = matching
        .iter()
        .map(|rule| rule.improvement.to_string())
        .collect();

    (
        first.diagnosis.to_string(),
        improvements,
        first.ab_suggestion.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total() {
        // Probe the threshold lattice: every combination must resolve.
        let probes = [0.0, LOW, 50.0, HIGH, 100.0];
        for e in probes {
            for s in probes {
                for sh in probes {
                    for c in probes {
                        for f in probes {
                            let p = Percentiles {
                                engagement: e,
                                save: s,
                                share: sh,
                                comment: c,
                                follow: f,
                            };
                            let (diagnosis, improvements, ab) = select(&p);
                            assert!(!diagnosis.is_empty());
                            assert!(!improvements.is_empty());
                            assert!(!ab.is_empty());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn last_rule_is_unconditional() {
        let last = RULES.last().unwrap();
        let p = Percentiles {
            engagement: 50.0,
            save: 50.0,
            share: 50.0,
            comment: 50.0,
            follow: 50.0,
        };
        assert!((last.applies)(&p));
    }

    #[test]
    fn high_engagement_low_save_selects_save_diagnosis() {
        let p = Percentiles {
            engagement: 80.0,
            save: 10.0,
            share: 50.0,
            comment: 50.0,
            follow: 50.0,
        };
        let (diagnosis, _, _) = select(&p);
        assert!(diagnosis.contains("saves"), "unexpected diagnosis: {diagnosis}");
    }
}
