//! Configuration for the Detector

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default confidence threshold below which a label is suppressed
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default output-token budget for the classifier reply
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Configuration for the Detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum confidence for a non-`none` label to survive
    pub threshold: f64,

    /// Output-token cap sent with each classification request
    pub max_tokens: u32,

    /// Abbreviation table for the sentence segmenter (one entry per line).
    /// The built-in table is used when unset.
    pub abbreviations_path: Option<PathBuf>,
}

impl DetectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            ));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_tokens: DEFAULT_MAX_TOKENS,
            abbreviations_path: None,
        }
    }
}

impl DetectorConfig {
    /// Unthresholded preset: every label the model emits is kept.
    /// Used by the command-line `detect` command.
    pub fn unthresholded() -> Self {
        Self {
            threshold: 0.0,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
