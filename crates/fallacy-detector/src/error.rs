//! Error types for the Detector

use thiserror::Error;

/// Errors that can occur during an analysis
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Remote classifier failed (network, auth, quota, ...)
    #[error("LLM error: {0}")]
    Llm(String),

    /// Classifier response could not be parsed, even after recovery
    #[error("Response parse error: {0}")]
    Parse(String),

    /// Configuration error (e.g. no model identifier)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for DetectorError {
    fn from(e: serde_json::Error) -> Self {
        DetectorError::Parse(e.to_string())
    }
}
