//! Fallacy Detector Evaluation Harness
//!
//! Scores a classifier model against fixture texts whose expected labels are
//! derived from keyword heuristics, and runs a suite of one-line labelled
//! cases with per-case timing.
//!
//! # Metrics
//!
//! Per-class precision, recall and F1 come from exact tp/fp/fn counting over
//! the closed label vocabulary; accuracy is the fraction of sentences whose
//! predicted label equals the expected one.
//!
//! # Example Usage
//!
//! ```no_run
//! use fallacy_detector::{Detector, DetectorConfig};
//! use fallacy_eval::evaluate_fixtures;
//! use fallacy_llm::OpenAiProvider;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = Detector::new(OpenAiProvider::from_env()?, DetectorConfig::default());
//! let report = evaluate_fixtures(&detector, "ft:gpt-4o-mini:fallacies", 0.6, Path::new("fixtures")).await?;
//! println!("mean accuracy: {:.3}", report.mean_accuracy());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cases;
mod error;
mod heuristics;
mod metrics;
mod report;
mod runner;

pub use cases::{default_cases, CaseOutcome, CaseSummary, LabelledCase};
pub use error::EvalError;
pub use heuristics::FixtureProfile;
pub use metrics::{apply_threshold, compute_metrics, ClassMetrics, Metrics};
pub use report::{EvaluationReport, TestReport};
pub use runner::{evaluate_fixtures, run_cases, write_json, SUMMARY_FILE};
