//! Detector settings for the CLI.

use crate::error::{CliError, Result};
use fallacy_detector::DetectorConfig;
use std::fs;
use std::path::Path;

/// Load detector settings from `path`, or `defaults` when none is given.
pub fn load_detector_config(
    path: Option<&Path>,
    defaults: DetectorConfig,
) -> Result<DetectorConfig> {
    let Some(path) = path else {
        return Ok(defaults);
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = DetectorConfig::from_toml(&contents).map_err(CliError::Config)?;
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        assert_eq!(
            load_detector_config(None, DetectorConfig::unthresholded()).unwrap(),
            DetectorConfig::unthresholded()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detector.toml");
        fs::write(&path, "max_tokens = 2048\nabbreviations_path = \"abbrev.txt\"\n").unwrap();

        let config = load_detector_config(Some(&path), DetectorConfig::unthresholded()).unwrap();
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.abbreviations_path, Some(std::path::PathBuf::from("abbrev.txt")));
        assert_eq!(config.threshold, 0.6);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_detector_config(Some(&dir.path().join("absent.toml")), DetectorConfig::default());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detector.toml");
        fs::write(&path, "threshold = -0.5\n").unwrap();

        assert!(matches!(
            load_detector_config(Some(&path), DetectorConfig::default()),
            Err(CliError::Config(_))
        ));
    }
}
