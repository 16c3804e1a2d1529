//! Core Detector implementation

use crate::assembler::{assemble_records, summarize};
use crate::config::DetectorConfig;
use crate::error::DetectorError;
use crate::parser::parse_classifier_response;
use crate::prompt::PromptBuilder;
use crate::segmenter::SentenceSegmenter;
use crate::spans::locate_spans;
use crate::types::AnalysisRequest;
use fallacy_domain::{AnalysisResult, CompletionProvider, CompletionRequest, Prediction, SpanMatch};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The Detector labels every sentence of a paragraph with a fallacy class
pub struct Detector<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: DetectorConfig,
    segmenter: Arc<SentenceSegmenter>,
}

impl<P> Detector<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new Detector
    ///
    /// Uses the process-wide segmenter unless the config names an
    /// abbreviation file, in which case that file backs a private one.
    pub fn new(provider: P, config: DetectorConfig) -> Self {
        let segmenter = match &config.abbreviations_path {
            Some(path) => Arc::new(SentenceSegmenter::with_abbreviations_file(path)),
            None => SentenceSegmenter::shared(),
        };
        Self {
            provider: Arc::new(provider),
            config,
            segmenter,
        }
    }

    /// Replace the sentence segmenter
    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = Arc::new(segmenter);
        self
    }

    /// The active configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Analyze one paragraph
    ///
    /// Text that yields no sentences short-circuits to an empty result
    /// without contacting the classifier.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, DetectorError> {
        let started = Instant::now();

        if request.model_id.trim().is_empty() {
            return Err(DetectorError::Config(
                "Model ID not provided".to_string(),
            ));
        }
        let threshold = request.threshold.unwrap_or(self.config.threshold);

        let segmentation = self.segmenter.segment(&request.text);
        info!(
            "Segmented {} chars into {} sentences ({:?})",
            request.text.len(),
            segmentation.sentences.len(),
            segmentation.method
        );

        if segmentation.sentences.is_empty() {
            return Ok(AnalysisResult::empty(
                request.text,
                started.elapsed().as_secs_f64(),
            ));
        }

        let spans = locate_spans(&request.text, &segmentation.sentences);
        let estimated = spans.iter().filter(|s| !s.is_exact()).count();
        if estimated > 0 {
            debug!("{} of {} spans are estimated", estimated, spans.len());
        }

        let predictions = self
            .classify(&request.model_id, &request.text, &segmentation.sentences)
            .await?;

        let spans: Vec<_> = spans.into_iter().map(SpanMatch::into_span).collect();
        let records = assemble_records(&spans, &predictions, threshold);
        let result = summarize(request.text, started.elapsed().as_secs_f64(), records);

        info!(
            "Analysis complete: {} sentences, {} flagged, {:.3}s",
            result.total_sentences(),
            result.sentences_with_fallacies.len(),
            result.elapsed_seconds
        );

        Ok(result)
    }

    /// Classify `sentences` of `text` in one remote call
    pub async fn classify(
        &self,
        model: &str,
        text: &str,
        sentences: &[String],
    ) -> Result<Vec<Prediction>, DetectorError> {
        let request = PromptBuilder::new(text, sentences).build(model, &self.config);
        debug!("Prompt length: {} chars", request.user.len());

        let response = self.call_provider(request).await?;
        debug!("Classifier response length: {} chars", response.len());

        parse_classifier_response(&response, sentences.len())
    }

    /// Call the completion provider
    async fn call_provider(&self, request: CompletionRequest) -> Result<String, DetectorError> {
        let provider = Arc::clone(&self.provider);

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&request)
                .map_err(|e| DetectorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| DetectorError::Llm(format!("Task join error: {}", e)))?
    }
}
