//! Span module - sentence positions in the original text

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` interval into the original input text
///
/// Offsets count Unicode scalar values (characters), not bytes, so that
/// `end - start` always equals the character length of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// The sentence this span was derived from
    pub text: String,
}

impl Span {
    /// Create a span starting at `start` and covering all of `text`
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self { start, end, text }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Outcome of locating one sentence in the original text
///
/// Segmenters may normalize whitespace or punctuation, in which case the
/// sentence no longer occurs verbatim. Lookup never fails: it degrades to an
/// estimated span at the cursor, and says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanMatch {
    /// The sentence was found verbatim at or after the cursor
    Exact(Span),
    /// Not found; the span starts at the cursor and has the sentence's length
    Estimated(Span),
}

impl SpanMatch {
    /// The span, regardless of how it was found
    pub fn span(&self) -> &Span {
        match self {
            SpanMatch::Exact(span) | SpanMatch::Estimated(span) => span,
        }
    }

    /// Consume the match and return the span
    pub fn into_span(self) -> Span {
        match self {
            SpanMatch::Exact(span) | SpanMatch::Estimated(span) => span,
        }
    }

    /// Whether the span is a verbatim match
    pub fn is_exact(&self) -> bool {
        matches!(self, SpanMatch::Exact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_length_counts_characters() {
        let span = Span::new(3, "Naïve café.");
        assert_eq!(span.len(), 11);
        assert_eq!(span.end, 14);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_match_accessors() {
        let exact = SpanMatch::Exact(Span::new(0, "Hi."));
        let estimated = SpanMatch::Estimated(Span::new(4, "Yo"));
        assert!(exact.is_exact());
        assert!(!estimated.is_exact());
        assert_eq!(estimated.span().start, 4);
        assert_eq!(exact.into_span().text, "Hi.");
    }
}
