//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// A single chat-completion request to the remote classifier
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Remote model identifier
    pub model: String,
    /// System instruction
    pub system: String,
    /// User message
    pub user: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Output-token cap
    pub max_tokens: u32,
    /// Ask the endpoint to return a JSON object
    pub json_response: bool,
}

/// Trait for the remote completion endpoint
///
/// Implemented by the infrastructure layer (fallacy-llm). One method: submit
/// a prompt, receive the raw text of the single completion.
pub trait CompletionProvider {
    /// Error type for provider operations
    type Error;

    /// Submit the request and return the completion's text content
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}

impl<T: CompletionProvider + ?Sized> CompletionProvider for std::sync::Arc<T> {
    type Error = T::Error;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        (**self).complete(request)
    }
}
