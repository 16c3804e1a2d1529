//! Fallacy Detector LLM Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `fallacy-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: Hosted chat-completion API
//!
//! # Examples
//!
//! ```
//! use fallacy_domain::{CompletionProvider, CompletionRequest};
//! use fallacy_llm::MockProvider;
//!
//! let provider = MockProvider::new(r#"{"results":[]}"#);
//! let request = CompletionRequest {
//!     model: "ft:test".to_string(),
//!     system: "classify".to_string(),
//!     user: "1. Hello.".to_string(),
//!     temperature: 0.0,
//!     max_tokens: 512,
//!     json_response: true,
//! };
//! assert_eq!(provider.complete(&request).unwrap(), r#"{"results":[]}"#);
//! ```

#![warn(missing_docs)]

pub mod openai;

use fallacy_domain::{CompletionProvider, CompletionRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The endpoint rejected the credential
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider could not be configured (e.g. missing API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses can be keyed by the exact user message; everything else gets
/// the default response.
///
/// # Examples
///
/// ```
/// use fallacy_domain::{CompletionProvider, CompletionRequest};
/// use fallacy_llm::MockProvider;
///
/// let mut provider = MockProvider::default();
/// provider.add_response("user prompt", "keyed response");
///
/// let request = CompletionRequest {
///     model: "m".to_string(),
///     system: String::new(),
///     user: "user prompt".to_string(),
///     temperature: 0.0,
///     max_tokens: 16,
///     json_response: true,
/// };
/// assert_eq!(provider.complete(&request).unwrap(), "keyed response");
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<CompletionRequest>>>,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a specific response for a given user message
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.lock_responses()
            .insert(user.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific user message
    pub fn add_error(&mut self, user: impl Into<String>) {
        self.lock_responses().insert(user.into(), MockReply::Error);
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) = 0;
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, HashMap<String, MockReply>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"{"results": []}"#)
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(request.clone());

        match self.lock_responses().get(&request.user) {
            Some(MockReply::Text(response)) => Ok(response.clone()),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}
