//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use fallacy_detector::DetectorConfig;
use std::path::PathBuf;

/// Environment variable that may supply `--model`
pub const MODEL_ID_ENV: &str = "FALLACY_MODEL_ID";

/// Fallacy detector - label every sentence of a paragraph with a rhetorical fallacy.
#[derive(Debug, Parser)]
#[command(name = "fallacy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Detector settings file (TOML). Its `threshold` applies to `detect`
    /// and `evaluate` unless `--threshold` is given; `cases` always records
    /// unthresholded labels.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze text and write the per-sentence labels to a JSON file
    Detect(DetectArgs),

    /// Score a model against the fixture texts
    Evaluate(EvaluateArgs),

    /// Run the built-in labelled cases and time each one
    Cases(CasesArgs),
}

impl Command {
    /// Detector settings used when no `--config` file is given
    pub fn default_detector_config(&self) -> DetectorConfig {
        match self {
            Command::Detect(_) => DetectorConfig::unthresholded(),
            Command::Evaluate(_) | Command::Cases(_) => DetectorConfig::default(),
        }
    }
}

/// Arguments for the detect command.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Fine-tuned model identifier
    #[arg(short, long, env = MODEL_ID_ENV)]
    pub model: String,

    /// Text to analyze
    #[arg(short, long)]
    pub text: Option<String>,

    /// File containing the text to analyze
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Where to write the JSON results
    #[arg(short, long, default_value = "output_openai.json")]
    pub output: PathBuf,

    /// Minimum confidence for a label to be kept
    /// [default: the --config threshold, else 0]
    #[arg(long)]
    pub threshold: Option<f64>,
}

/// Arguments for the evaluate command.
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Fine-tuned model identifier
    #[arg(short, long, env = MODEL_ID_ENV)]
    pub model: String,

    /// Threshold applied to the detected labels before scoring
    /// [default: the --config threshold, else 0.6]
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Directory holding the fixture texts
    #[arg(long, default_value = "fixtures")]
    pub fixtures: PathBuf,

    /// Where to write the evaluation report
    #[arg(long, default_value = "openai_eval_results.json")]
    pub out: PathBuf,
}

/// Arguments for the cases command.
#[derive(Debug, Args)]
pub struct CasesArgs {
    /// Fine-tuned model identifier
    #[arg(short, long, env = MODEL_ID_ENV)]
    pub model: String,

    /// Directory for the per-case results and the summary
    #[arg(long, default_value = "openai_tests")]
    pub outdir: PathBuf,
}
