//! Sentence segmentation
//!
//! The primary method runs Unicode UAX #29 sentence boundaries and then
//! re-joins pieces that were cut after a known abbreviation ("Dr. Smith").
//! The abbreviation table is the segmenter's model data. It is loaded on
//! first use, at most once per segmenter, and a load failure sends every
//! call on that segmenter to the fallback period split.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period but rarely end a sentence
const BUILTIN_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.", "Rev.", "Gen.", "Col.",
    "Capt.", "Lt.", "Sgt.", "Gov.", "Sen.", "Rep.", "Hon.", "vs.", "e.g.", "i.e.", "cf.", "approx.",
    "Fig.", "No.", "Vol.", "U.S.", "U.K.", "U.N.", "E.U.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.",
    "Jul.", "Aug.", "Sep.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Entries that are also ordinary sentence endings ("No." as an answer, a
/// month closing a sentence). These only join a following piece that starts
/// with a digit ("No. 5", "Jan. 12").
const NUMERIC_ABBREVIATIONS: &[&str] = &[
    "No.", "St.", "Fig.", "Vol.", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.", "Sep.",
    "Sept.", "Oct.", "Nov.", "Dec.",
];

/// How a held-back piece joins the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    Always,
    BeforeDigit,
}

/// Which method produced a segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationMethod {
    /// UAX #29 boundaries with abbreviation merging
    Primary,
    /// Literal period split
    Fallback,
}

/// Ordered sentences of one input text
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Non-empty, trimmed sentences in text order
    pub sentences: Vec<String>,
    /// Method that produced them
    pub method: SegmentationMethod,
}

/// Splits text into sentences
#[derive(Debug, Default)]
pub struct SentenceSegmenter {
    abbreviations_path: Option<PathBuf>,
    abbreviations: OnceLock<Result<HashSet<String>, String>>,
}

impl SentenceSegmenter {
    /// Segmenter backed by the built-in abbreviation table
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter whose abbreviation table is read from `path` on first use
    pub fn with_abbreviations_file(path: impl Into<PathBuf>) -> Self {
        Self {
            abbreviations_path: Some(path.into()),
            abbreviations: OnceLock::new(),
        }
    }

    /// Process-wide segmenter with the built-in table
    pub fn shared() -> Arc<SentenceSegmenter> {
        static SHARED: OnceLock<Arc<SentenceSegmenter>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(SentenceSegmenter::new())))
    }

    /// Split `text` into sentences
    ///
    /// Empty or whitespace-only text yields no sentences.
    pub fn segment(&self, text: &str) -> Segmentation {
        match self.model_data() {
            Ok(abbreviations) => Segmentation {
                sentences: split_primary(text, abbreviations),
                method: SegmentationMethod::Primary,
            },
            Err(reason) => {
                warn!("Primary segmenter unavailable ({}), using period split", reason);
                Segmentation {
                    sentences: split_on_periods(text),
                    method: SegmentationMethod::Fallback,
                }
            }
        }
    }

    fn model_data(&self) -> Result<&HashSet<String>, &str> {
        self.abbreviations
            .get_or_init(|| match &self.abbreviations_path {
                Some(path) => load_abbreviations(path),
                None => Ok(BUILTIN_ABBREVIATIONS.iter().map(|s| s.to_string()).collect()),
            })
            .as_ref()
            .map_err(String::as_str)
    }
}

fn load_abbreviations(path: &Path) -> Result<HashSet<String>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    let table: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if table.is_empty() {
        return Err(format!("{} contains no abbreviations", path.display()));
    }

    debug!("Loaded {} abbreviations from {}", table.len(), path.display());
    Ok(table)
}

fn split_primary(text: &str, abbreviations: &HashSet<String>) -> Vec<String> {
    let mut sentences = Vec::new();
    // Byte offset of a piece held back because it ended in an abbreviation
    let mut pending: Option<(usize, Join)> = None;

    for (offset, piece) in text.split_sentence_bound_indices() {
        if piece.trim().is_empty() {
            continue;
        }

        let begin = match pending.take() {
            Some((begin, Join::BeforeDigit))
                if !piece.trim_start().starts_with(|c: char| c.is_ascii_digit()) =>
            {
                sentences.push(text[begin..offset].trim().to_string());
                offset
            }
            Some((begin, _)) => begin,
            None => offset,
        };
        let candidate = text[begin..offset + piece.len()].trim();

        if let Some(join) = abbreviation_join(candidate, abbreviations) {
            pending = Some((begin, join));
            continue;
        }
        sentences.push(candidate.to_string());
    }

    if let Some((begin, _)) = pending {
        let rest = text[begin..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
    }

    sentences
}

fn abbreviation_join(sentence: &str, abbreviations: &HashSet<String>) -> Option<Join> {
    let token = sentence.split_whitespace().last()?;
    if !abbreviations.contains(token) {
        return None;
    }
    if NUMERIC_ABBREVIATIONS.contains(&token) {
        Some(Join::BeforeDigit)
    } else {
        Some(Join::Always)
    }
}

/// Fallback segmentation: split on every `.`, trim, drop empties
pub fn split_on_periods(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
