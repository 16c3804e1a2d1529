//! Cases command implementation.

use crate::cli::CasesArgs;
use crate::error::Result;
use crate::output::Formatter;
use fallacy_detector::Detector;
use fallacy_domain::CompletionProvider;
use fallacy_eval::{default_cases, run_cases, CaseSummary, SUMMARY_FILE};

/// Execute the cases command.
pub async fn execute_cases<P>(
    args: CasesArgs,
    detector: &Detector<P>,
    formatter: &Formatter,
) -> Result<CaseSummary>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let summary = run_cases(detector, &args.model, &default_cases(), &args.outdir).await?;

    println!("{}", formatter.case_summary(&summary));
    println!("{}", formatter.saved(&args.outdir.join(SUMMARY_FILE)));
    Ok(summary)
}
