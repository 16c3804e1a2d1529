//! Span location: map sentences back to character offsets in the input
//!
//! Offsets count characters, not bytes. A sentence that cannot be found
//! verbatim after the cursor gets an estimated span starting at the cursor;
//! this never fails.

use fallacy_domain::{Span, SpanMatch};
use tracing::debug;

/// Locate `sentence` in `text` at or after the character offset `cursor`
pub fn locate_span(text: &str, sentence: &str, cursor: usize) -> SpanMatch {
    let found = advance_chars(text, 0, cursor)
        .and_then(|byte_cursor| text[byte_cursor..].find(sentence).map(|rel| byte_cursor + rel));

    match found {
        Some(byte_start) => {
            SpanMatch::Exact(Span::new(text[..byte_start].chars().count(), sentence))
        }
        None => {
            debug!("Sentence not found verbatim at offset {}, estimating span", cursor);
            SpanMatch::Estimated(Span::new(cursor, sentence))
        }
    }
}

/// Locate every sentence in order, advancing a cursor past each span
///
/// Gives the same spans as calling [`locate_span`] with the previous end,
/// but keeps a byte cursor alongside the character cursor so the text is
/// scanned once overall.
pub fn locate_spans(text: &str, sentences: &[String]) -> Vec<SpanMatch> {
    let mut char_cursor = 0;
    // `None` once the character cursor has run past the end of the text
    let mut byte_cursor = Some(0);

    sentences
        .iter()
        .map(|sentence| {
            let hit = byte_cursor
                .and_then(|from| text[from..].find(sentence.as_str()).map(|rel| (from, from + rel)));

            let found = match hit {
                Some((from, byte_start)) => {
                    let start = char_cursor + text[from..byte_start].chars().count();
                    byte_cursor = Some(byte_start + sentence.len());
                    SpanMatch::Exact(Span::new(start, sentence))
                }
                None => {
                    debug!(
                        "Sentence not found verbatim at offset {}, estimating span",
                        char_cursor
                    );
                    byte_cursor = byte_cursor
                        .and_then(|from| advance_chars(text, from, sentence.chars().count()));
                    SpanMatch::Estimated(Span::new(char_cursor, sentence))
                }
            };
            char_cursor = found.span().end;
            found
        })
        .collect()
}

/// Byte offset `chars` characters after byte offset `from`; the text length
/// when that lands exactly on the end; `None` past the end
fn advance_chars(text: &str, from: usize, chars: usize) -> Option<usize> {
    text[from..]
        .char_indices()
        .map(|(byte, _)| from + byte)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn owned(sentences: &[&str]) -> Vec<String> {
        sentences.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_spans() {
        let text = "Hello world. How are you?";
        let spans = locate_spans(text, &owned(&["Hello world.", "How are you?"]));

        assert!(spans.iter().all(SpanMatch::is_exact));
        assert_eq!(spans[0].span().start, 0);
        assert_eq!(spans[0].span().end, 12);
        assert_eq!(spans[1].span().start, 13);
        assert_eq!(spans[1].span().end, 25);
    }

    #[test]
    fn test_repeated_sentence_advances() {
        let text = "No. No. No.";
        let spans = locate_spans(text, &owned(&["No.", "No.", "No."]));
        let starts: Vec<usize> = spans.iter().map(|s| s.span().start).collect();
        assert_eq!(starts, vec![0, 4, 8]);
    }

    #[test]
    fn test_missing_sentence_is_estimated() {
        let text = "Hello   world. Bye.";
        let spans = locate_spans(text, &owned(&["Hello world.", "Bye."]));

        assert!(!spans[0].is_exact());
        assert_eq!(spans[0].span().start, 0);
        assert_eq!(spans[0].span().end, 12);
        // The cursor moved to 12, "Bye." is still found after it
        assert!(spans[1].is_exact());
        assert_eq!(spans[1].span().start, 15);
    }

    #[test]
    fn test_offsets_are_characters() {
        let text = "Café é bon. Très bien.";
        let spans = locate_spans(text, &owned(&["Café é bon.", "Très bien."]));
        assert_eq!(spans[0].span().end, 11);
        assert_eq!(spans[1].span().start, 12);
        assert_eq!(spans[1].span().end, 22);
    }

    #[test]
    fn test_cursor_past_end_is_estimated() {
        let found = locate_span("short", "short", 40);
        assert_eq!(found, SpanMatch::Estimated(Span::new(40, "short")));
    }

    #[test]
    fn test_estimated_span_past_end_keeps_estimating() {
        let text = "Short. Tail.";
        let spans = locate_spans(text, &owned(&["A much longer missing sentence.", "Tail."]));
        assert_eq!(spans[0], SpanMatch::Estimated(Span::new(0, "A much longer missing sentence.")));
        assert_eq!(spans[1], SpanMatch::Estimated(Span::new(31, "Tail.")));
    }

    proptest! {
        /// Property: the single-pass locator agrees with per-sentence lookups
        #[test]
        fn test_single_pass_matches_per_sentence_lookup(
            text in "[aé .ü]{0,40}",
            sentences in proptest::collection::vec("[aé.ü]{1,5}", 1..8),
        ) {
            let mut cursor = 0;
            let expected: Vec<SpanMatch> = sentences
                .iter()
                .map(|sentence| {
                    let found = locate_span(&text, sentence, cursor);
                    cursor = found.span().end;
                    found
                })
                .collect();
            prop_assert_eq!(locate_spans(&text, &sentences), expected);
        }


        /// Property: one span per sentence, starts never decrease
        #[test]
        fn test_span_coverage_property(
            text in "[a-c .]{0,40}",
            sentences in proptest::collection::vec("[a-c.]{1,6}", 1..8),
        ) {
            let spans = locate_spans(&text, &sentences);
            prop_assert_eq!(spans.len(), sentences.len());
            for pair in spans.windows(2) {
                prop_assert!(pair[0].span().start <= pair[1].span().start);
                prop_assert!(pair[0].span().end <= pair[1].span().start);
            }
            for (found, sentence) in spans.iter().zip(&sentences) {
                prop_assert_eq!(&found.span().text, sentence);
                prop_assert_eq!(found.span().len(), sentence.chars().count());
            }
        }
    }
}
