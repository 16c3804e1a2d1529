//! OpenAI Provider Implementation
//!
//! Provides integration with OpenAI-compatible chat-completion endpoints,
//! including fine-tuned model identifiers.
//!
//! # Features
//!
//! - Async HTTP communication with the Chat Completions API
//! - JSON response mode and deterministic sampling passed through from the request
//! - Status codes mapped onto `LlmError` variants
//! - No retries: any failure is returned to the caller as-is
//!
//! # Examples
//!
//! ```no_run
//! use fallacy_llm::OpenAiProvider;
//!
//! // Reads OPENAI_API_KEY (required) and OPENAI_BASE_URL (optional)
//! let provider = OpenAiProvider::from_env().expect("OPENAI_API_KEY must be set");
//! ```

use crate::LlmError;
use fallacy_domain::{CompletionProvider, CompletionRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// OpenAI chat-completion provider
pub struct OpenAiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer credential
    /// - `base_url`: API root, e.g. "https://api.openai.com/v1"
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            // No idle pool: a pooled connection can outlive the runtime that opened it
            client: reqwest::Client::builder()
                .pool_max_idle_per_host(0)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a provider from `OPENAI_API_KEY` and optional `OPENAI_BASE_URL`
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Config` if the API key is missing or blank.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::Config(format!("{} is not set in environment", API_KEY_ENV)))?;
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(api_key, base_url))
    }

    /// The API root this provider talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a chat completion and return the first choice's content
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The endpoint cannot be reached
    /// - The credential is rejected (401/403)
    /// - The model is unknown (404)
    /// - The rate limit or quota is exhausted (429)
    /// - The response has no message content
    pub async fn complete_async(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request
                .json_response
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        debug!(
            "Posting chat completion: model '{}', user message {} chars",
            request.model,
            request.user.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&error_text)
                .map(|body| body.error.message)
                .unwrap_or(error_text);

            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    LlmError::Authentication(message)
                }
                reqwest::StatusCode::NOT_FOUND if message.trim().is_empty() => {
                    LlmError::ModelNotAvailable(request.model.clone())
                }
                reqwest::StatusCode::NOT_FOUND => {
                    LlmError::ModelNotAvailable(format!("{}: {}", request.model, message))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded(message),
                _ => LlmError::Communication(format!("HTTP {}: {}", status, message)),
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Completion has no message content".to_string()))
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call. Inside a runtime this must run on
        // a blocking-pool thread (the detector uses spawn_blocking).
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.complete_async(request)),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
                .block_on(self.complete_async(request)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "ft:gpt-4o-mini:fallacies".to_string(),
            system: "Classify each sentence.".to_string(),
            user: "1. Are you stupid?".to_string(),
            temperature: 0.0,
            max_tokens: 512,
            json_response: true,
        }
    }

    #[test]
    fn test_provider_creation_trims_trailing_slash() {
        let provider = OpenAiProvider::new("sk-test", "http://localhost:1234/v1/");
        assert_eq!(provider.base_url(), "http://localhost:1234/v1");
    }

    #[test]
    fn test_complete_sends_expected_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "model": "ft:gpt-4o-mini:fallacies",
                "temperature": 0.0,
                "max_tokens": 512,
                "response_format": { "type": "json_object" },
                "messages": [
                    { "role": "system", "content": "Classify each sentence." },
                    { "role": "user", "content": "1. Are you stupid?" }
                ]
            })))
            .with_status(200)
            .with_body(
                r#"{"choices":[{"message":{"role":"assistant","content":"{\"results\":[]}"}}]}"#,
            )
            .create();

        let provider = OpenAiProvider::new("sk-test", server.url());
        let content = provider.complete(&request()).unwrap();

        assert_eq!(content, r#"{"results":[]}"#);
        mock.assert();
    }

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .create();

        let provider = OpenAiProvider::new("sk-bad", server.url());
        match provider.complete(&request()) {
            Err(LlmError::Authentication(msg)) => assert!(msg.contains("Incorrect API key")),
            other => panic!("Expected Authentication error, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_limit_and_missing_model() {
        let mut server = mockito::Server::new();
        let _limited = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":{"message":"You exceeded your current quota, please check your plan"}}"#)
            .create();
        let provider = OpenAiProvider::new("sk-test", server.url());
        match provider.complete(&request()) {
            Err(LlmError::RateLimitExceeded(msg)) => assert!(msg.contains("exceeded your current quota")),
            other => panic!("Expected RateLimitExceeded, got {:?}", other),
        }

        let mut server = mockito::Server::new();
        let _missing = server
            .mock("POST", "/chat/completions")
            .with_status(404)
            .with_body(r#"{"error":{"message":"The model `ft:gpt-4o-mini:fallacies` does not exist"}}"#)
            .create();
        let provider = OpenAiProvider::new("sk-test", server.url());
        let err = provider.complete(&request()).unwrap_err();
        assert!(matches!(err, LlmError::ModelNotAvailable(_)));
        assert_eq!(
            err.to_string(),
            "Model not available: ft:gpt-4o-mini:fallacies: The model `ft:gpt-4o-mini:fallacies` does not exist"
        );
    }

    #[test]
    fn test_missing_model_without_body_names_model() {
        let mut server = mockito::Server::new();
        let _missing = server
            .mock("POST", "/chat/completions")
            .with_status(404)
            .create();
        let provider = OpenAiProvider::new("sk-test", server.url());
        assert!(matches!(
            provider.complete(&request()),
            Err(LlmError::ModelNotAvailable(model)) if model == "ft:gpt-4o-mini:fallacies"
        ));
    }

    #[test]
    fn test_server_error_maps_to_communication() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("upstream exploded")
            .create();

        let provider = OpenAiProvider::new("sk-test", server.url());
        match provider.complete(&request()) {
            Err(LlmError::Communication(msg)) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("upstream exploded"));
            }
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_content_is_invalid_response() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
            .create();

        let provider = OpenAiProvider::new("sk-test", server.url());
        assert!(matches!(
            provider.complete(&request()),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unreachable_endpoint() {
        // Port 9 (discard) on localhost is not expected to host an HTTP server
        let provider = OpenAiProvider::new("sk-test", "http://127.0.0.1:9");
        assert!(matches!(
            provider.complete(&request()),
            Err(LlmError::Communication(_))
        ));
    }
}
