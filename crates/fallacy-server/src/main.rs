//! Fallacy Detector service binary
//!
//! Starts the HTTP server for sentence-level fallacy analysis.

use fallacy_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using defaults (127.0.0.1:8000)");
        eprintln!("Usage: fallacy-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default_local_config()
    };

    start_server(config.with_env_overrides()).await
}

fn print_help() {
    println!("Fallacy Detector Service - sentence-level fallacy analysis over HTTP");
    println!();
    println!("USAGE:");
    println!("    fallacy-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    OPENAI_API_KEY     Credential for the completion endpoint (required)");
    println!("    OPENAI_BASE_URL    Endpoint root (default: https://api.openai.com/v1)");
    println!("    FALLACY_MODEL_ID   Model used when a request omits model_id");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8000)");
    println!("    - default_model_id: Model used when a request omits one (optional)");
    println!("    - [detector]: threshold, max_tokens, abbreviations_path");
    println!();
}
