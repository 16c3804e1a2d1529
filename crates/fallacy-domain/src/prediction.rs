//! Prediction module - normalized model output

use crate::Label;

/// One normalized per-sentence prediction from the classifier
///
/// Only the normalizer creates these, so every instance already satisfies
/// the invariants: `index` addresses an existing sentence (0-based) and
/// `confidence` lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 0-based sentence index
    pub index: usize,
    /// Predicted label
    pub label: Label,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

impl Prediction {
    /// Create a prediction, clamping confidence into `[0, 1]`
    ///
    /// NaN is treated as no confidence at all.
    pub fn new(index: usize, label: Label, confidence: f64) -> Self {
        Self {
            index,
            label,
            confidence: clamp_unit(confidence),
        }
    }
}

/// Clamp a value into `[0, 1]`, mapping NaN to 0
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_clamps_out_of_range() {
        assert_eq!(Prediction::new(0, Label::AdHominem, 1.7).confidence, 1.0);
        assert_eq!(Prediction::new(0, Label::AdHominem, -0.2).confidence, 0.0);
        assert_eq!(Prediction::new(0, Label::AdHominem, f64::NAN).confidence, 0.0);
        assert_eq!(Prediction::new(0, Label::AdHominem, f64::INFINITY).confidence, 1.0);
    }

    proptest! {
        /// Property: confidence always lands in [0, 1]
        #[test]
        fn test_confidence_clamp_property(raw in proptest::num::f64::ANY) {
            let p = Prediction::new(0, Label::None, raw);
            prop_assert!((0.0..=1.0).contains(&p.confidence));
        }
    }
}
