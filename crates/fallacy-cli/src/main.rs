//! Fallacy detector CLI - label every sentence of a paragraph from the command line.

use clap::Parser;
use fallacy_cli::commands;
use fallacy_cli::{load_detector_config, Cli, Command, Formatter};
use fallacy_detector::Detector;
use fallacy_llm::OpenAiProvider;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> fallacy_cli::Result<()> {
    let cli = Cli::parse();

    let config = load_detector_config(cli.config.as_deref(), cli.command.default_detector_config())?;
    let formatter = Formatter::new(!cli.no_color);

    // Fail on a missing API key before any input is read or output written
    let provider = OpenAiProvider::from_env()?;
    let detector = Detector::new(provider, config);

    match cli.command {
        Command::Detect(args) => {
            commands::execute_detect(args, std::io::stdin(), &detector, &formatter).await?;
        }
        Command::Evaluate(args) => {
            commands::execute_evaluate(args, &detector, &formatter).await?;
        }
        Command::Cases(args) => {
            commands::execute_cases(args, &detector, &formatter).await?;
        }
    }

    Ok(())
}
