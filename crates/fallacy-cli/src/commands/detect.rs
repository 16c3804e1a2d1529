//! Detect command implementation.

use crate::cli::DetectArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fallacy_detector::{AnalysisRequest, Detector};
use fallacy_domain::{CompletionProvider, DetectionReport};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Resolve the text to analyze: inline text, then file, then `stdin`.
///
/// The result is trimmed; blank input is an error.
pub fn read_input(text: Option<&str>, file: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    let raw = if let Some(text) = text {
        text.to_string()
    } else if let Some(path) = file {
        fs::read_to_string(path)?
    } else {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        buffer
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("No input text provided".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Execute the detect command.
pub async fn execute_detect<P>(
    args: DetectArgs,
    input: impl Read,
    detector: &Detector<P>,
    formatter: &Formatter,
) -> Result<DetectionReport>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let text = read_input(args.text.as_deref(), args.file.as_deref(), input)?;
    info!("Detecting fallacies in {} chars with '{}'", text.len(), args.model);

    let threshold = args.threshold.unwrap_or(detector.config().threshold);
    let result = detector
        .analyze(AnalysisRequest::new(text, args.model).with_threshold(threshold))
        .await?;
    let report = DetectionReport::from(result);

    fs::write(&args.output, serde_json::to_string_pretty(&report)?)?;

    println!("{}", formatter.detection(&report));
    println!("{}", formatter.saved(&args.output));
    Ok(report)
}
