//! HTTP request handlers for the analysis service.
//!
//! Implements the analyze and health check endpoints using axum.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use fallacy_detector::{AnalysisRequest, Detector, DetectorError, DEFAULT_THRESHOLD};
use fallacy_domain::{AnalysisResult, CompletionProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
pub struct AppState<P: CompletionProvider> {
    /// The analysis pipeline
    pub detector: Arc<Detector<P>>,
    /// Model used when a request does not name one
    pub default_model_id: Option<String>,
}

impl<P: CompletionProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            detector: Arc::clone(&self.detector),
            default_model_id: self.default_model_id.clone(),
        }
    }
}

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Paragraph to analyze
    pub text: String,
    /// Model to use; falls back to the server default
    #[serde(default)]
    pub model_id: Option<String>,
    /// Minimum confidence for a label to be reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process is serving
    pub status: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request cannot be served as sent
    BadRequest(String),
    /// The pipeline failed
    Detector(DetectorError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Detector(DetectorError::Config(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Detector(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<DetectorError> for AppError {
    fn from(e: DetectorError) -> Self {
        AppError::Detector(e)
    }
}

/// POST /analyze - Label every sentence of the submitted text
async fn analyze<P>(
    State(state): State<AppState<P>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    let model_id = request
        .model_id
        .filter(|m| !m.trim().is_empty())
        .or_else(|| state.default_model_id.clone())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Model ID not provided (set model_id or FALLACY_MODEL_ID)".to_string(),
            )
        })?;

    info!(
        "Analyze request: {} chars, model '{}', threshold {}",
        request.text.len(),
        model_id,
        request.threshold
    );

    let result = state
        .detector
        .analyze(AnalysisRequest::new(request.text, model_id).with_threshold(request.threshold))
        .await
        .inspect_err(|e| error!("Analysis failed: {}", e))?;

    Ok(Json(result))
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    Router::new()
        .route("/analyze", post(analyze::<P>))
        .route("/health", get(health_check))
        .with_state(state)
}
