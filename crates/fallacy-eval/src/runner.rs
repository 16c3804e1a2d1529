//! Run the detector over fixtures and labelled cases

use crate::cases::{CaseOutcome, CaseSummary, LabelledCase};
use crate::error::EvalError;
use crate::heuristics::FixtureProfile;
use crate::metrics::{apply_threshold, compute_metrics};
use crate::report::{EvaluationReport, TestReport};
use fallacy_detector::{AnalysisRequest, Detector};
use fallacy_domain::{CompletionProvider, DetectionReport};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Name of the summary written by [`run_cases`]
pub const SUMMARY_FILE: &str = "summary.json";

/// Score `model` on every fixture in `fixtures_dir` at `threshold`
///
/// Each fixture is analyzed unthresholded, then the threshold is applied to
/// the finished records before scoring against the heuristic labels.
pub async fn evaluate_fixtures<P>(
    detector: &Detector<P>,
    model: &str,
    threshold: f64,
    fixtures_dir: &Path,
) -> Result<EvaluationReport, EvalError>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let mut tests = Vec::new();

    for profile in FixtureProfile::ALL {
        let path = fixtures_dir.join(profile.file_name());
        let text = std::fs::read_to_string(&path).map_err(|e| EvalError::io(&path, e))?;

        let result = detector
            .analyze(AnalysisRequest::new(text.trim(), model).with_threshold(0.0))
            .await?;
        let records = apply_threshold(&result.fallacies, threshold);

        let sentences: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let expected = profile.expected_labels(&sentences);
        let predicted: Vec<_> = records.iter().map(|r| r.fallacy_type).collect();
        let metrics = compute_metrics(&expected, &predicted);

        info!(
            "Fixture '{}': {} sentences, accuracy {:.3}",
            profile,
            sentences.len(),
            metrics.accuracy
        );

        tests.push(TestReport {
            name: profile.name().to_string(),
            file: path.display().to_string(),
            num_sentences: sentences.len(),
            accuracy: metrics.accuracy,
            per_class: metrics.per_class,
        });
    }

    Ok(EvaluationReport {
        model: model.to_string(),
        threshold,
        tests,
    })
}

/// Run every case, writing one detection report per case plus a summary
///
/// A failing case is recorded in the summary and the run continues.
pub async fn run_cases<P>(
    detector: &Detector<P>,
    model: &str,
    cases: &[LabelledCase],
    out_dir: &Path,
) -> Result<CaseSummary, EvalError>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    std::fs::create_dir_all(out_dir).map_err(|e| EvalError::io(out_dir, e))?;

    let run_started = Instant::now();
    let mut outcomes = Vec::with_capacity(cases.len());

    for (i, case) in cases.iter().enumerate() {
        let output_path = out_dir.join(format!("case_{:02}.json", i + 1));
        let started = Instant::now();

        let attempt = match detector
            .analyze(AnalysisRequest::new(case.text.trim(), model).with_threshold(0.0))
            .await
        {
            Ok(result) => {
                let report = DetectionReport::from(result);
                write_json(&output_path, &report).map(|_| report)
            }
            Err(e) => Err(e.into()),
        };
        let seconds = started.elapsed().as_secs_f64();

        let outcome = match attempt {
            Ok(report) => {
                let detected: Vec<_> = report.fallacies.iter().map(|r| r.fallacy_type).collect();
                CaseOutcome {
                    name: case.name.clone(),
                    matched: CaseOutcome::labels_match(&case.expected, &detected),
                    expected: case.expected.clone(),
                    detected,
                    ok: true,
                    seconds,
                    output_file: output_path.display().to_string(),
                    error: None,
                }
            }
            Err(e) => {
                warn!("Case '{}' failed: {}", case.name, e);
                CaseOutcome {
                    name: case.name.clone(),
                    expected: case.expected.clone(),
                    detected: Vec::new(),
                    ok: false,
                    matched: false,
                    seconds,
                    output_file: output_path.display().to_string(),
                    error: Some(e.to_string()),
                }
            }
        };

        info!(
            "[{}/{}] {}: {:.2}s, ok={}",
            i + 1,
            cases.len(),
            outcome.name,
            outcome.seconds,
            outcome.ok
        );
        outcomes.push(outcome);
    }

    let total_seconds = run_started.elapsed().as_secs_f64();
    let summary = CaseSummary {
        model: model.to_string(),
        num_tests: cases.len(),
        num_ok: outcomes.iter().filter(|o| o.ok).count(),
        total_seconds,
        avg_seconds_per_test: if cases.is_empty() {
            0.0
        } else {
            total_seconds / cases.len() as f64
        },
        cases: outcomes,
    };

    write_json(&out_dir.join(SUMMARY_FILE), &summary)?;
    Ok(summary)
}

/// Write `value` as pretty JSON
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), EvalError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|e| EvalError::io(path, e))
}
