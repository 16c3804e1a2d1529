//! Built-in one-line cases with known labels

use fallacy_domain::Label;
use serde::{Deserialize, Serialize};

/// A short text with the labels it should produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledCase {
    /// Display name
    pub name: String,
    /// Text to analyze
    pub text: String,
    /// Expected non-`none` labels, in sentence order
    pub expected: Vec<Label>,
}

impl LabelledCase {
    fn new(name: &str, text: &str, expected: &[Label]) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            expected: expected.to_vec(),
        }
    }
}

/// The thirteen default cases: one per fallacy class plus a mixed paragraph
pub fn default_cases() -> Vec<LabelledCase> {
    vec![
        LabelledCase::new("Ad Hominem", "Are you stupid?", &[Label::AdHominem]),
        LabelledCase::new(
            "Ad Populum",
            "If most of these scientists are saying it, then it must be true!",
            &[Label::AdPopulum],
        ),
        LabelledCase::new(
            "False Causality",
            "The economy improved and then policies changed. The policies must have caused the improvement.",
            &[Label::FalseCausality],
        ),
        LabelledCase::new(
            "Appeal to Emotion",
            "Think of the children who will suffer!",
            &[Label::AppealToEmotion],
        ),
        LabelledCase::new(
            "Circular Reasoning",
            "If you didn't break it, then why is it broken?",
            &[Label::CircularReasoning],
        ),
        LabelledCase::new(
            "Faulty Generalization",
            "Some teens were rude, so all teenagers are disrespectful.",
            &[Label::FaultyGeneralization],
        ),
        LabelledCase::new(
            "False Dilemma",
            "You\u{2019}re either with us or against us.",
            &[Label::FalseDilemma],
        ),
        LabelledCase::new(
            "Equivocation",
            "A feather is light. What is light cannot be dark. Therefore, a feather cannot be dark.",
            &[Label::Equivocation],
        ),
        LabelledCase::new(
            "Fallacy of Credibility",
            "According to the famous billionaire, this policy is perfect, so it must be true.",
            &[Label::FallacyOfCredibility],
        ),
        LabelledCase::new(
            "Fallacy of Extension",
            "If we allow students to use calculators, soon they won't learn math at all.",
            &[Label::FallacyOfExtension],
        ),
        LabelledCase::new(
            "Fallacy of Relevance",
            "Your argument about climate policy is invalid because you drive a car.",
            &[Label::FallacyOfRelevance],
        ),
        LabelledCase::new(
            "Fallacy of Logic",
            "If A then B. B happened, so A must be true.",
            &[Label::FallacyOfLogic],
        ),
        LabelledCase::new(
            "Multiple Mixed",
            "Are you stupid? Everyone agrees this is right, so you should too.",
            &[Label::AdHominem, Label::AdPopulum],
        ),
    ]
}

/// Outcome of running one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Case name
    pub name: String,
    /// Expected labels
    pub expected: Vec<Label>,
    /// Label of every sentence, `none` included
    pub detected: Vec<Label>,
    /// The analysis completed and its output was written
    pub ok: bool,
    /// The detected fallacies are exactly the expected ones, in order
    pub matched: bool,
    /// Wall-clock time for this case
    pub seconds: f64,
    /// Where the case's detection report was written
    pub output_file: String,
    /// Failure description when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CaseOutcome {
    /// Whether `detected` (ignoring `none`) equals `expected`
    pub fn labels_match(expected: &[Label], detected: &[Label]) -> bool {
        detected
            .iter()
            .copied()
            .filter(Label::is_fallacy)
            .eq(expected.iter().copied())
    }
}

/// Summary of a whole case run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    /// Model identifier under test
    pub model: String,
    /// Number of cases run
    pub num_tests: usize,
    /// Cases that completed
    pub num_ok: usize,
    /// Wall-clock time for the run
    pub total_seconds: f64,
    /// `total_seconds / num_tests`, 0 for an empty run
    pub avg_seconds_per_test: f64,
    /// Per-case outcomes, in run order
    pub cases: Vec<CaseOutcome>,
}
