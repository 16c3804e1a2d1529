//! Evaluation report types

use fallacy_domain::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::metrics::ClassMetrics;

/// Scores for one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    /// Fixture profile name
    pub name: String,
    /// Fixture file that was analyzed
    pub file: String,
    /// Sentences found in the fixture
    pub num_sentences: usize,
    /// Fraction of sentences labelled as expected
    pub accuracy: f64,
    /// Per-label scores
    pub per_class: BTreeMap<Label, ClassMetrics>,
}

/// Scores for every fixture at one threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Model identifier under test
    pub model: String,
    /// Threshold applied after detection
    pub threshold: f64,
    /// One entry per fixture
    pub tests: Vec<TestReport>,
}

impl EvaluationReport {
    /// Mean accuracy across fixtures, 0 when there are none
    pub fn mean_accuracy(&self) -> f64 {
        if self.tests.is_empty() {
            return 0.0;
        }
        self.tests.iter().map(|t| t.accuracy).sum::<f64>() / self.tests.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_report(accuracy: f64) -> TestReport {
        TestReport {
            name: "accuracy".to_string(),
            file: "fixtures/test_accuracy.txt".to_string(),
            num_sentences: 4,
            accuracy,
            per_class: BTreeMap::new(),
        }
    }

    #[test]
    fn test_mean_accuracy() {
        let report = EvaluationReport {
            model: "m".to_string(),
            threshold: 0.6,
            tests: vec![test_report(1.0), test_report(0.5)],
        };
        assert_eq!(report.mean_accuracy(), 0.75);

        let empty = EvaluationReport {
            tests: vec![],
            ..report
        };
        assert_eq!(empty.mean_accuracy(), 0.0);
    }

    #[test]
    fn test_report_json_shape() {
        let report = EvaluationReport {
            model: "ft:m".to_string(),
            threshold: 0.6,
            tests: vec![test_report(0.5)],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model"], "ft:m");
        assert_eq!(json["tests"][0]["name"], "accuracy");
        assert_eq!(json["tests"][0]["num_sentences"], 4);
    }
}
