//! Error types for the evaluation harness

use fallacy_detector::DetectorError;
use thiserror::Error;

/// Errors that can occur while evaluating a model
#[derive(Error, Debug)]
pub enum EvalError {
    /// Reading a fixture or writing a report failed
    #[error("I/O error on {path}: {message}")]
    Io {
        /// File or directory involved
        path: String,
        /// Underlying error text
        message: String,
    },

    /// The detector failed on a fixture
    #[error(transparent)]
    Detector(#[from] DetectorError),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EvalError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        EvalError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(e: serde_json::Error) -> Self {
        EvalError::Serialization(e.to_string())
    }
}
