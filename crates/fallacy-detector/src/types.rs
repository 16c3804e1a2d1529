//! Request types for the Detector

use serde::{Deserialize, Serialize};

/// Input to a single analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Paragraph to analyze
    pub text: String,

    /// Remote model identifier (e.g. a fine-tuned model id)
    pub model_id: String,

    /// Per-request confidence threshold; the configured one when `None`
    pub threshold: Option<f64>,
}

impl AnalysisRequest {
    /// Request using the configured threshold
    pub fn new(text: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_id: model_id.into(),
            threshold: None,
        }
    }

    /// Override the threshold for this request
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}
