//! Fallacy Detector Pipeline
//!
//! Labels every sentence of a paragraph with one of the fixed fallacy
//! categories, using a remote chat-completion model as the classifier.
//!
//! # Architecture
//!
//! ```text
//! text → Segmenter → sentences ─┬→ Span Locator ─────────────────────┐
//!                               └→ Prompt Builder → Provider → Normalizer → Assembler → AnalysisResult
//! ```
//!
//! # Key Features
//!
//! - **Batch classification**: one remote call per paragraph, full context in the prompt
//! - **Lenient parsing**: recovers JSON wrapped in prose or code fences
//! - **Best-effort spans**: character offsets that degrade to estimates instead of failing
//! - **Thresholding**: low-confidence labels are reported as `none`
//!
//! # Example Usage
//!
//! ```no_run
//! use fallacy_detector::{AnalysisRequest, Detector, DetectorConfig};
//! use fallacy_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"results":[{"index":1,"label":"ad hominem","confidence":0.9}]}"#);
//! let detector = Detector::new(llm, DetectorConfig::default());
//!
//! let result = detector
//!     .analyze(AnalysisRequest::new("Are you stupid?", "ft:gpt-4o-mini:fallacies"))
//!     .await?;
//!
//! for record in &result.fallacies {
//!     println!("{} [{}..{}] {}", record.fallacy_type, record.start_char, record.end_char, record.text);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod detector;
mod error;
mod parser;
mod prompt;
mod segmenter;
mod spans;
mod types;

#[cfg(test)]
mod tests;

pub use assembler::{assemble_records, summarize};
pub use config::{DetectorConfig, DEFAULT_MAX_TOKENS, DEFAULT_THRESHOLD};
pub use detector::Detector;
pub use error::DetectorError;
pub use parser::parse_classifier_response;
pub use prompt::{PromptBuilder, SAMPLING_TEMPERATURE, SYSTEM_PROMPT};
pub use segmenter::{split_on_periods, Segmentation, SegmentationMethod, SentenceSegmenter};
pub use spans::{locate_span, locate_spans};
pub use types::AnalysisRequest;
