//! Fallacy Detector Domain Layer
//!
//! This crate contains the core vocabulary and value objects shared by every
//! other layer of the fallacy detector. It holds no I/O and no pipeline logic;
//! it defines what a label, a span, a prediction and an analysis result are,
//! plus the trait boundary for the remote classifier.
//!
//! ## Key Concepts
//!
//! - **Label**: One of the fixed 15 rhetorical-fallacy categories, `none` included
//! - **Span**: A half-open `[start, end)` character interval into the input text
//! - **Prediction**: A normalized `(index, label, confidence)` triple from the model
//! - **FallacyRecord**: The per-sentence unit of analysis output
//! - **AnalysisResult**: Everything produced by one analysis call
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency (for the JSON wire names)
//! - Pure data and invariants only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod prediction;
pub mod record;
pub mod span;
pub mod traits;

// Re-exports for convenience
pub use label::{Label, UnknownLabel};
pub use prediction::Prediction;
pub use record::{round_confidence, AnalysisResult, DetectionReport, FallacyRecord};
pub use span::{Span, SpanMatch};
pub use traits::{CompletionProvider, CompletionRequest};
