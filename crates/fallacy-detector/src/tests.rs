//! Pipeline tests for the Detector

#[cfg(test)]
mod tests {
    use crate::{AnalysisRequest, Detector, DetectorConfig, DetectorError, SentenceSegmenter};
    use fallacy_domain::Label;
    use fallacy_llm::MockProvider;
    use proptest::prelude::*;

    const MODEL: &str = "ft:gpt-4o-mini:fallacies";

    fn detector_with(response: &str) -> (Detector<MockProvider>, MockProvider) {
        let provider = MockProvider::new(response);
        let detector = Detector::new(provider.clone(), DetectorConfig::default());
        (detector, provider)
    }

    #[tokio::test]
    async fn test_single_ad_hominem() {
        let (detector, provider) = detector_with(
            r#"{"results":[{"index":1,"label":"ad hominem","confidence":0.9}]}"#,
        );

        let result = detector
            .analyze(AnalysisRequest::new("Are you stupid?", MODEL).with_threshold(0.6))
            .await
            .unwrap();

        assert_eq!(result.fallacies.len(), 1);
        let record = &result.fallacies[0];
        assert_eq!(record.fallacy_type, Label::AdHominem);
        assert_eq!(record.confidence, 0.9);
        assert_eq!(record.start_char, 0);
        assert_eq!(record.end_char, 15);
        assert_eq!(result.fallacy_types, vec![Label::AdHominem]);
        assert_eq!(result.sentences_with_fallacies, vec!["Are you stupid?"]);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_high_threshold_downgrades_to_none() {
        let (detector, _) = detector_with(
            r#"{"results":[{"index":1,"label":"ad hominem","confidence":0.9}]}"#,
        );

        let result = detector
            .analyze(AnalysisRequest::new("Are you stupid?", MODEL).with_threshold(0.95))
            .await
            .unwrap();

        assert_eq!(result.fallacies[0].fallacy_type, Label::None);
        assert_eq!(result.fallacies[0].confidence, 0.9);
        assert!(result.fallacy_types.is_empty());
        assert!(result.sentences_with_fallacies.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_index_discarded() {
        let (detector, _) = detector_with(
            r#"{"results":[{"index":5,"label":"ad hominem","confidence":0.9}]}"#,
        );

        let result = detector
            .analyze(AnalysisRequest::new("The sky is blue. Water is wet.", MODEL))
            .await
            .unwrap();

        assert_eq!(result.total_sentences(), 2);
        for record in &result.fallacies {
            assert_eq!(record.fallacy_type, Label::None);
            assert_eq!(record.confidence, 0.0);
        }
    }

    #[tokio::test]
    async fn test_wrapped_reply_is_recovered() {
        let (detector, _) = detector_with(
            r#"garbage{"results":[{"index":1,"label":"none","confidence":1.0}]}trailing"#,
        );

        let result = detector
            .analyze(AnalysisRequest::new("Are you stupid?", MODEL))
            .await
            .unwrap();

        assert_eq!(result.fallacies[0].fallacy_type, Label::None);
        assert_eq!(result.fallacies[0].confidence, 1.0);
    }

    #[tokio::test]
    async fn test_fallback_segmentation_still_spans() {
        let provider = MockProvider::default();
        let detector = Detector::new(provider, DetectorConfig::default())
            .with_segmenter(SentenceSegmenter::with_abbreviations_file("/nonexistent/table"));

        let text = "First claim .  Second claim.Third";
        let result = detector.analyze(AnalysisRequest::new(text, MODEL)).await.unwrap();

        let texts: Vec<&str> = result.fallacies.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["First claim", "Second claim", "Third"]);

        let bounds: Vec<(usize, usize)> = result
            .fallacies
            .iter()
            .map(|r| (r.start_char, r.end_char))
            .collect();
        assert_eq!(bounds, vec![(0, 11), (15, 27), (28, 33)]);
        for pair in bounds.windows(2) {
            assert!(pair[0].1 <= pair[1].0);
        }
    }

    #[tokio::test]
    async fn test_empty_input_skips_classifier() {
        let (detector, provider) = detector_with("not even json");

        for text in ["", "   ", "\n\t  \n"] {
            let result = detector.analyze(AnalysisRequest::new(text, MODEL)).await.unwrap();
            assert_eq!(result.total_sentences(), 0);
            assert!(result.fallacies.is_empty());
            assert!(result.fallacy_types.is_empty());
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_fatal() {
        let provider = MockProvider::default();
        let mut failing = provider.clone();
        // The user message is deterministic, so key the error on it
        let sentences = vec!["Are you stupid?".to_string()];
        let user = crate::PromptBuilder::new("Are you stupid?", &sentences).user_message();
        failing.add_error(user);

        let detector = Detector::new(provider, DetectorConfig::default());
        let result = detector.analyze(AnalysisRequest::new("Are you stupid?", MODEL)).await;
        assert!(matches!(result, Err(DetectorError::Llm(_))));
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_fatal() {
        let (detector, _) = detector_with("I cannot help with that.");
        let result = detector.analyze(AnalysisRequest::new("Are you stupid?", MODEL)).await;
        assert!(matches!(result, Err(DetectorError::Parse(_))));
    }

    #[tokio::test]
    async fn test_mixed_paragraph() {
        let (detector, _) = detector_with(
            r#"{"results":[
                {"index":2,"label":"ad populum","confidence":0.82},
                {"index":1,"label":"ad hominem","confidence":0.91},
                {"index":1,"label":"false dilemma","confidence":0.99}
            ]}"#,
        );

        let result = detector
            .analyze(AnalysisRequest::new(
                "Are you stupid? Everyone agrees this is right, so you should too.",
                MODEL,
            ))
            .await
            .unwrap();

        assert_eq!(result.labels(), vec![Label::AdHominem, Label::AdPopulum]);
        assert_eq!(result.fallacy_types, vec![Label::AdHominem, Label::AdPopulum]);
        assert_eq!(result.fallacies[1].start_char, 16);
        assert!(result.elapsed_seconds >= 0.0);
    }

    #[tokio::test]
    async fn test_config_threshold_applies_without_override() {
        let provider = MockProvider::new(
            r#"{"results":[{"index":1,"label":"ad hominem","confidence":0.5}]}"#,
        );
        let lenient = Detector::new(provider.clone(), DetectorConfig::unthresholded());
        let strict = Detector::new(provider, DetectorConfig::default());

        let request = AnalysisRequest::new("Are you stupid?", MODEL);
        let kept = lenient.analyze(request.clone()).await.unwrap();
        let dropped = strict.analyze(request).await.unwrap();

        assert_eq!(kept.fallacies[0].fallacy_type, Label::AdHominem);
        assert_eq!(dropped.fallacies[0].fallacy_type, Label::None);
    }

    proptest! {
        /// Property: blank input never reaches the classifier
        #[test]
        fn test_blank_input_property(text in "[ \t\n\r]{0,20}") {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let (detector, provider) = detector_with("{}");
            let result = runtime
                .block_on(detector.analyze(AnalysisRequest::new(text, MODEL)))
                .unwrap();
            prop_assert_eq!(result.total_sentences(), 0);
            prop_assert_eq!(provider.call_count(), 0);
        }
    }
}
