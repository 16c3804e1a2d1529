//! Prompt construction for batch sentence classification

use crate::config::DetectorConfig;
use fallacy_domain::{CompletionRequest, Label};

/// Fixed system instruction sent with every classification request
pub const SYSTEM_PROMPT: &str = "Classify each sentence into exactly one label from the allowed set. \
Use the full paragraph context. Only label a fallacy if a clear, explicit instance is present; \
otherwise return 'none'. Respond ONLY in compact JSON: results=[{index,label,confidence}]. \
Set confidence to a probability between 0 and 1.";

/// Sampling temperature for every classification request
pub const SAMPLING_TEMPERATURE: f32 = 0.0;

/// Closing instruction appended to the user message
const OUTPUT_FORMAT_REMINDER: &str = "Return JSON with array 'results', each item: {index, label, confidence}. \
Index is the 1-based sentence number; label is one of the allowed labels; \
confidence is a probability 0..1 for the chosen label.";

/// Builds the classification prompt for one paragraph
pub struct PromptBuilder<'a> {
    text: &'a str,
    sentences: &'a [String],
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str, sentences: &'a [String]) -> Self {
        Self { text, sentences }
    }

    /// Render the user message: vocabulary, paragraph, numbered sentences
    pub fn user_message(&self) -> String {
        let numbered = self
            .sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| format!("{}. {}", i + 1, sentence))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "Allowed labels: {}.\nParagraph: {}\nSentences (numbered):\n{}\n\n{}",
            Label::vocabulary(),
            self.text,
            numbered,
            OUTPUT_FORMAT_REMINDER
        )
    }

    /// Build the full completion request for `model`
    pub fn build(&self, model: &str, config: &DetectorConfig) -> CompletionRequest {
        CompletionRequest {
            model: model.to_string(),
            system: SYSTEM_PROMPT.to_string(),
            user: self.user_message(),
            temperature: SAMPLING_TEMPERATURE,
            max_tokens: config.max_tokens,
            json_response: true,
        }
    }
}
