//! Per-class precision, recall, F1 and overall accuracy

use fallacy_domain::{FallacyRecord, Label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts and scores for one label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// tp / (tp + fp), 0 when undefined
    pub precision: f64,
    /// tp / (tp + fn), 0 when undefined
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0 when undefined
    pub f1: f64,
    /// True positives
    pub tp: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ClassMetrics {
    fn from_counts(tp: usize, fp: usize, fn_: usize) -> Self {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
            tp,
            fp,
            fn_,
        }
    }
}

/// Scores for one comparison of expected against predicted labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// One entry for every label in the vocabulary
    pub per_class: BTreeMap<Label, ClassMetrics>,
    /// Fraction of expected positions predicted exactly
    pub accuracy: f64,
}

/// Compare `expected` and `predicted` position by position
///
/// Positions beyond the shorter sequence are ignored for the counts, but
/// accuracy is always divided by the full expected length.
pub fn compute_metrics(expected: &[Label], predicted: &[Label]) -> Metrics {
    let mut counts: BTreeMap<Label, (usize, usize, usize)> =
        Label::ALL.iter().map(|&label| (label, (0, 0, 0))).collect();
    let mut matches = 0;

    for (&truth, &guess) in expected.iter().zip(predicted) {
        if truth == guess {
            matches += 1;
            counts.entry(truth).or_default().0 += 1;
        } else {
            counts.entry(guess).or_default().1 += 1;
            counts.entry(truth).or_default().2 += 1;
        }
    }

    let per_class = counts
        .into_iter()
        .map(|(label, (tp, fp, fn_))| (label, ClassMetrics::from_counts(tp, fp, fn_)))
        .collect();

    let accuracy = if expected.is_empty() {
        0.0
    } else {
        matches as f64 / expected.len() as f64
    };

    Metrics {
        per_class,
        accuracy,
    }
}

/// Re-apply a confidence threshold to finished records
pub fn apply_threshold(records: &[FallacyRecord], threshold: f64) -> Vec<FallacyRecord> {
    records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            if record.confidence < threshold {
                record.fallacy_type = Label::None;
            }
            record
        })
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
