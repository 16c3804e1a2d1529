//! Record module - the output of one analysis

use crate::Label;
use serde::{Deserialize, Serialize};

/// Per-sentence analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallacyRecord {
    /// Final label after thresholding
    pub fallacy_type: Label,
    /// Sentence text
    pub text: String,
    /// Start character offset into the input
    pub start_char: usize,
    /// End character offset (exclusive)
    pub end_char: usize,
    /// Model confidence, rounded to 4 decimal places
    pub confidence: f64,
}

/// Everything produced by a single analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzed text
    pub input_text: String,
    /// Wall-clock time spent on the call
    pub elapsed_seconds: f64,
    /// One record per sentence, in sentence order
    pub fallacies: Vec<FallacyRecord>,
    /// Sorted, distinct non-`none` labels present among the records
    pub fallacy_types: Vec<Label>,
    /// Texts of sentences whose final label is not `none`
    pub sentences_with_fallacies: Vec<String>,
}

impl AnalysisResult {
    /// Degenerate result for input that yields no sentences
    pub fn empty(input_text: impl Into<String>, elapsed_seconds: f64) -> Self {
        Self {
            input_text: input_text.into(),
            elapsed_seconds,
            fallacies: Vec::new(),
            fallacy_types: Vec::new(),
            sentences_with_fallacies: Vec::new(),
        }
    }

    /// Number of analyzed sentences (one record per sentence)
    pub fn total_sentences(&self) -> usize {
        self.fallacies.len()
    }

    /// Final labels in sentence order
    pub fn labels(&self) -> Vec<Label> {
        self.fallacies.iter().map(|r| r.fallacy_type).collect()
    }
}

/// File-mode output document written by the command-line detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    /// The analyzed text
    pub input_text: String,
    /// Number of sentences found
    pub total_sentences: usize,
    /// One record per sentence
    pub fallacies: Vec<FallacyRecord>,
}

impl From<AnalysisResult> for DetectionReport {
    fn from(result: AnalysisResult) -> Self {
        Self {
            total_sentences: result.total_sentences(),
            input_text: result.input_text,
            fallacies: result.fallacies,
        }
    }
}

/// Round a confidence to 4 decimal places for display
pub fn round_confidence(confidence: f64) -> f64 {
    (confidence * 10_000.0).round() / 10_000.0
}
