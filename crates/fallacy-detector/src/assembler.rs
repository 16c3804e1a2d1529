//! Join predictions with spans and apply the confidence threshold

use fallacy_domain::{round_confidence, AnalysisResult, FallacyRecord, Label, Prediction, Span};
use std::collections::BTreeSet;

/// Build one record per span, in span order
///
/// Each sentence takes the first prediction with its index, or
/// `("none", 0.0)` when there is none. A label whose confidence is below
/// `threshold` becomes `none`; the confidence itself is still reported.
pub fn assemble_records(
    spans: &[Span],
    predictions: &[Prediction],
    threshold: f64,
) -> Vec<FallacyRecord> {
    spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let (label, confidence) = predictions
                .iter()
                .find(|p| p.index == i)
                .map(|p| (p.label, p.confidence))
                .unwrap_or((Label::None, 0.0));

            let label = if confidence < threshold {
                Label::None
            } else {
                label
            };

            FallacyRecord {
                fallacy_type: label,
                text: span.text.clone(),
                start_char: span.start,
                end_char: span.end,
                confidence: round_confidence(confidence),
            }
        })
        .collect()
}

/// Wrap records with the aggregate views
pub fn summarize(
    input_text: impl Into<String>,
    elapsed_seconds: f64,
    records: Vec<FallacyRecord>,
) -> AnalysisResult {
    let fallacy_types: BTreeSet<Label> = records
        .iter()
        .map(|r| r.fallacy_type)
        .filter(Label::is_fallacy)
        .collect();

    let sentences_with_fallacies = records
        .iter()
        .filter(|r| r.fallacy_type.is_fallacy())
        .map(|r| r.text.clone())
        .collect();

    AnalysisResult {
        input_text: input_text.into(),
        elapsed_seconds,
        fallacies: records,
        fallacy_types: fallacy_types.into_iter().collect(),
        sentences_with_fallacies,
    }
}
