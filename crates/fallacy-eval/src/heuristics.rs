//! Keyword heuristics that derive expected labels for the fixture texts

use fallacy_domain::Label;
use std::fmt;

/// A fixture text and the heuristic used to label it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureProfile {
    /// Plain prose; every sentence is expected to be `none`
    Efficiency,
    /// Appeals to a celebrity's authority
    Confidence,
    /// One sentence per common fallacy, mixed with neutral prose
    Accuracy,
}

impl FixtureProfile {
    /// Every profile, in evaluation order
    pub const ALL: [FixtureProfile; 3] = [
        FixtureProfile::Efficiency,
        FixtureProfile::Confidence,
        FixtureProfile::Accuracy,
    ];

    /// Profile name as it appears in reports
    pub fn name(&self) -> &'static str {
        match self {
            FixtureProfile::Efficiency => "efficiency",
            FixtureProfile::Confidence => "confidence",
            FixtureProfile::Accuracy => "accuracy",
        }
    }

    /// Fixture file name inside the fixtures directory
    pub fn file_name(&self) -> String {
        format!("test_{}.txt", self.name())
    }

    /// Expected label for every sentence
    pub fn expected_labels(&self, sentences: &[String]) -> Vec<Label> {
        sentences
            .iter()
            .map(|sentence| self.expected_label(&sentence.to_lowercase()))
            .collect()
    }

    /// Later rules override earlier ones when several match
    fn expected_label(&self, lower: &str) -> Label {
        let mut label = Label::None;
        match self {
            FixtureProfile::Efficiency => {}
            FixtureProfile::Confidence => {
                if lower.contains("celebrity entrepreneur") {
                    label = Label::FallacyOfCredibility;
                }
            }
            FixtureProfile::Accuracy => {
                if lower.contains("everyone knows") || lower.contains("already agreed") {
                    label = Label::AdPopulum;
                }
                if lower.contains("enabled feature flags on monday") && lower.contains("tuesday") {
                    label = Label::FalseCausality;
                }
                if lower.contains("think of the families") {
                    label = Label::AppealToEmotion;
                }
                if lower.trim().starts_with("either you approve") {
                    label = Label::FalseDilemma;
                }
                if lower.contains("your analysis is worthless") || lower.contains("failed a class") {
                    label = Label::AdHominem;
                }
                if lower.contains("if this forecast is correct") && lower.contains("revenue is rising") {
                    label = Label::CircularReasoning;
                }
            }
        }
        label
    }
}

impl fmt::Display for FixtureProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_efficiency_is_all_none() {
        let labels = FixtureProfile::Efficiency
            .expected_labels(&owned(&["Everyone knows this.", "Think of the families!"]));
        assert_eq!(labels, vec![Label::None, Label::None]);
    }

    #[test]
    fn test_confidence_rule() {
        let labels = FixtureProfile::Confidence.expected_labels(&owned(&[
            "A Celebrity Entrepreneur endorsed the plan.",
            "The plan ships in May.",
        ]));
        assert_eq!(labels, vec![Label::FallacyOfCredibility, Label::None]);
    }

    #[test]
    fn test_accuracy_rules() {
        let labels = FixtureProfile::Accuracy.expected_labels(&owned(&[
            "Everyone knows the old system was slow.",
            "We enabled feature flags on Monday and the outage ended Tuesday, so the flags fixed it.",
            "Think of the families who depend on this release!",
            "Either you approve the budget or the project dies.",
            "Your analysis is worthless because you once failed a class.",
            "If this forecast is correct then revenue is rising, and revenue is rising because the forecast is correct.",
            "The meeting starts at noon.",
        ]));
        assert_eq!(
            labels,
            vec![
                Label::AdPopulum,
                Label::FalseCausality,
                Label::AppealToEmotion,
                Label::FalseDilemma,
                Label::AdHominem,
                Label::CircularReasoning,
                Label::None,
            ]
        );
    }

    #[test]
    fn test_later_rule_overrides() {
        let labels = FixtureProfile::Accuracy
            .expected_labels(&owned(&["Everyone knows your analysis is worthless."]));
        assert_eq!(labels, vec![Label::AdHominem]);
    }

    #[test]
    fn test_false_dilemma_requires_prefix() {
        let labels = FixtureProfile::Accuracy
            .expected_labels(&owned(&["So either you approve it or not."]));
        assert_eq!(labels, vec![Label::None]);
    }

    #[test]
    fn test_shipped_accuracy_fixture() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../fixtures")
            .join(FixtureProfile::Accuracy.file_name());
        let text = std::fs::read_to_string(path).unwrap();
        let sentences = fallacy_detector::SentenceSegmenter::new()
            .segment(text.trim())
            .sentences;

        assert_eq!(
            FixtureProfile::Accuracy.expected_labels(&sentences),
            vec![
                Label::None,
                Label::AdPopulum,
                Label::FalseCausality,
                Label::AppealToEmotion,
                Label::FalseDilemma,
                Label::AdHominem,
                Label::CircularReasoning,
                Label::AdPopulum,
                Label::None,
            ]
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(FixtureProfile::Accuracy.file_name(), "test_accuracy.txt");
        assert_eq!(FixtureProfile::Efficiency.to_string(), "efficiency");
    }
}
