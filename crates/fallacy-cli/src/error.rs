//! Error types for the CLI application.

use fallacy_detector::DetectorError;
use fallacy_eval::EvalError;
use fallacy_llm::LlmError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The classifier endpoint could not be set up
    #[error("Provider error: {0}")]
    Provider(#[from] LlmError),

    /// Pipeline error
    #[error("Detection failed: {0}")]
    Detector(#[from] DetectorError),

    /// Evaluation harness error
    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
