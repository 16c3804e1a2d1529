//! Fallacy detector CLI library.
//!
//! Command-line surface over the detection pipeline: analyze a paragraph
//! into a JSON results file, score a model against the fixture texts, and
//! run the built-in labelled cases.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::load_detector_config;
pub use error::{CliError, Result};
pub use output::Formatter;
