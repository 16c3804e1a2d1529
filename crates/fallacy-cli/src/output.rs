//! Output formatting for the CLI.

use colored::*;
use fallacy_domain::{DetectionReport, Label};
use fallacy_eval::{CaseSummary, EvaluationReport, TestReport};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Confirmation printed after a results file is written.
    pub fn saved(&self, path: &Path) -> String {
        self.colorize(&format!("Saved results to {}", path.display()), "green")
    }

    /// One line per flagged sentence of a detection report.
    pub fn detection(&self, report: &DetectionReport) -> String {
        let flagged: Vec<String> = report
            .fallacies
            .iter()
            .filter(|r| r.fallacy_type.is_fallacy())
            .map(|r| {
                format!(
                    "{} [{}..{}] {:.2} {}",
                    self.colorize(r.fallacy_type.as_str(), "yellow"),
                    r.start_char,
                    r.end_char,
                    r.confidence,
                    r.text
                )
            })
            .collect();

        if flagged.is_empty() {
            return self.info(&format!(
                "No fallacies in {} sentence(s)",
                report.total_sentences
            ));
        }
        flagged.join("\n")
    }

    /// Per-class scores for one fixture.
    ///
    /// Labels that never occur in either the expected or the predicted
    /// sequence are left out.
    pub fn test_report(&self, test: &TestReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Label", "Precision", "Recall", "F1", "TP", "FP", "FN"]);

        for (label, m) in test.per_class.iter().filter(|(_, m)| m.tp + m.fp + m.fn_ > 0) {
            builder.push_record([
                label.as_str().to_string(),
                format!("{:.3}", m.precision),
                format!("{:.3}", m.recall),
                format!("{:.3}", m.f1),
                m.tp.to_string(),
                m.fp.to_string(),
                m.fn_.to_string(),
            ]);
        }

        let header = self.colorize(
            &format!(
                "{} ({} sentences) accuracy {:.3}",
                test.name, test.num_sentences, test.accuracy
            ),
            "cyan",
        );
        format!("{}\n{}", header, styled(builder))
    }

    /// Every fixture table followed by the mean accuracy.
    pub fn evaluation(&self, report: &EvaluationReport) -> String {
        let mut sections: Vec<String> = report.tests.iter().map(|t| self.test_report(t)).collect();
        sections.push(self.info(&format!(
            "{} at threshold {}: mean accuracy {:.3}",
            report.model,
            report.threshold,
            report.mean_accuracy()
        )));
        sections.join("\n\n")
    }

    /// One row per labelled case plus a timing line.
    pub fn case_summary(&self, summary: &CaseSummary) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Case", "Expected", "Detected", "Match", "Seconds"]);

        for case in &summary.cases {
            let detected: Vec<Label> = case
                .detected
                .iter()
                .copied()
                .filter(Label::is_fallacy)
                .collect();
            let status = match (&case.error, case.matched) {
                (Some(_), _) => self.colorize("error", "red"),
                (None, true) => self.colorize("yes", "green"),
                (None, false) => self.colorize("no", "yellow"),
            };
            builder.push_record([
                case.name.clone(),
                join_labels(&case.expected),
                join_labels(&detected),
                status,
                format!("{:.2}", case.seconds),
            ]);
        }

        format!(
            "{}\n{}",
            styled(builder),
            self.info(&format!(
                "{}/{} ok, {:.2}s total, {:.2}s per test",
                summary.num_ok,
                summary.num_tests,
                summary.total_seconds,
                summary.avg_seconds_per_test
            ))
        )
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(message, "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn join_labels(labels: &[Label]) -> String {
    if labels.is_empty() {
        return "-".to_string();
    }
    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
