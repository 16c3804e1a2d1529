//! Label module - the closed fallacy vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rhetorical-fallacy category
///
/// The vocabulary is fixed at compile time. `None` is the sentinel meaning
/// "no fallacy detected" and is what every unclassified or suppressed
/// sentence ends up with.
///
/// Variants are declared in alphabetical order of their wire names so the
/// derived `Ord` sorts labels the same way their strings sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Attacking the person instead of the argument
    #[serde(rename = "ad hominem")]
    AdHominem,

    /// Appeal to popularity
    #[serde(rename = "ad populum")]
    AdPopulum,

    /// Manipulating feelings in place of reasons
    #[serde(rename = "appeal to emotion")]
    AppealToEmotion,

    /// The conclusion is assumed by a premise
    #[serde(rename = "circular reasoning")]
    CircularReasoning,

    /// A key term shifts meaning mid-argument
    #[serde(rename = "equivocation")]
    Equivocation,

    /// Misplaced trust in (or attack on) a source's authority
    #[serde(rename = "fallacy of credibility")]
    FallacyOfCredibility,

    /// Slippery slope and straw-man style exaggeration
    #[serde(rename = "fallacy of extension")]
    FallacyOfExtension,

    /// Formally invalid inference
    #[serde(rename = "fallacy of logic")]
    FallacyOfLogic,

    /// Irrelevant premises offered as support
    #[serde(rename = "fallacy of relevance")]
    FallacyOfRelevance,

    /// Correlation or sequence taken as causation
    #[serde(rename = "false causality")]
    FalseCausality,

    /// Only two options presented when more exist
    #[serde(rename = "false dilemma")]
    FalseDilemma,

    /// Broad conclusion from too few cases
    #[serde(rename = "faulty generalization")]
    FaultyGeneralization,

    /// Deliberately misleading argumentation
    #[serde(rename = "intentional")]
    Intentional,

    /// A fallacy that fits none of the other categories
    #[serde(rename = "miscellaneous")]
    Miscellaneous,

    /// No fallacy detected
    #[serde(rename = "none")]
    None,
}

/// Error returned when a string is not one of the 15 labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl Label {
    /// Every label, in vocabulary order
    pub const ALL: [Label; 15] = [
        Label::AdHominem,
        Label::AdPopulum,
        Label::AppealToEmotion,
        Label::CircularReasoning,
        Label::Equivocation,
        Label::FallacyOfCredibility,
        Label::FallacyOfExtension,
        Label::FallacyOfLogic,
        Label::FallacyOfRelevance,
        Label::FalseCausality,
        Label::FalseDilemma,
        Label::FaultyGeneralization,
        Label::Intentional,
        Label::Miscellaneous,
        Label::None,
    ];

    /// Get the wire name of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::AdHominem => "ad hominem",
            Label::AdPopulum => "ad populum",
            Label::AppealToEmotion => "appeal to emotion",
            Label::CircularReasoning => "circular reasoning",
            Label::Equivocation => "equivocation",
            Label::FallacyOfCredibility => "fallacy of credibility",
            Label::FallacyOfExtension => "fallacy of extension",
            Label::FallacyOfLogic => "fallacy of logic",
            Label::FallacyOfRelevance => "fallacy of relevance",
            Label::FalseCausality => "false causality",
            Label::FalseDilemma => "false dilemma",
            Label::FaultyGeneralization => "faulty generalization",
            Label::Intentional => "intentional",
            Label::Miscellaneous => "miscellaneous",
            Label::None => "none",
        }
    }

    /// Parse an exact wire name
    ///
    /// Matching is case-sensitive: the model is told the exact vocabulary,
    /// and anything else is treated as outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.as_str() == s)
    }

    /// Whether this label reports an actual fallacy
    pub fn is_fallacy(&self) -> bool {
        !matches!(self, Label::None)
    }

    /// The vocabulary joined with `", "`, as shown to the model
    pub fn vocabulary() -> String {
        Self::ALL
            .iter()
            .map(Label::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::None
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}
