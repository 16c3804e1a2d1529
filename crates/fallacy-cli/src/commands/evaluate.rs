//! Evaluate command implementation.

use crate::cli::EvaluateArgs;
use crate::error::Result;
use crate::output::Formatter;
use fallacy_detector::Detector;
use fallacy_domain::CompletionProvider;
use fallacy_eval::{evaluate_fixtures, write_json, EvaluationReport};

/// Execute the evaluate command.
pub async fn execute_evaluate<P>(
    args: EvaluateArgs,
    detector: &Detector<P>,
    formatter: &Formatter,
) -> Result<EvaluationReport>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let threshold = args.threshold.unwrap_or(detector.config().threshold);
    let report = evaluate_fixtures(detector, &args.model, threshold, &args.fixtures).await?;
    write_json(&args.out, &report)?;

    println!("{}", formatter.evaluation(&report));
    println!("{}", formatter.saved(&args.out));
    Ok(report)
}
