//! Fallacy Detector Service
//!
//! HTTP boundary around the detection pipeline: `POST /analyze` labels the
//! sentences of a paragraph, `GET /health` reports liveness.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use fallacy_detector::Detector;
use fallacy_llm::OpenAiProvider;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The remote classifier cannot be set up (e.g. missing API key)
    #[error("Provider error: {0}")]
    Provider(#[from] fallacy_llm::LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the analysis HTTP server
///
/// Builds the OpenAI provider from the environment before binding, so a
/// missing API key fails startup instead of every request.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let provider = OpenAiProvider::from_env()?;

    info!("Starting Fallacy Detector service");
    info!("Bind address: {}", config.bind_addr());
    info!("Provider endpoint: {}", provider.base_url());
    info!("Default threshold: {}", config.detector.threshold);
    match &config.default_model_id {
        Some(model) => info!("Default model: {}", model),
        None => warn!("No default model; requests must name model_id"),
    }

    let state = AppState {
        detector: Arc::new(Detector::new(provider, config.detector.clone())),
        default_model_id: config.default_model_id.clone(),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
