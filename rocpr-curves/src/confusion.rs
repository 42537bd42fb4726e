//! Running confusion-matrix counts threaded through every threshold sweep.

use crate::example::Label;

/// Binary confusion-matrix counts at one decision threshold.
///
/// Sweeps start from [`ConfusionState::all_negative`] and move one example
/// at a time into the predicted-positive side with [`absorb`](Self::absorb),
/// so `tp + fn_` and `fp + tn` never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusionState {
    pub tp: usize,
    pub fp: usize,
    pub fn_: usize,
    pub tn: usize,
}

impl ConfusionState {
    /// Every example predicted negative: `(0, 0, positives, negatives)`.
    pub fn all_negative(positives: usize, negatives: usize) -> Self {
        Self {
            tp: 0,
            fp: 0,
            fn_: positives,
            tn: negatives,
        }
    }

    /// Reclassify one example with the given label as predicted positive.
    #[inline]
    pub fn absorb(&mut self, label: Label) {
        match label {
            Label::Positive => {
                debug_assert!(self.fn_ > 0, "absorbed more positives than exist");
                self.tp += 1;
                self.fn_ -= 1;
            }
            Label::Negative => {
                debug_assert!(self.tn > 0, "absorbed more negatives than exist");
                self.fp += 1;
                self.tn -= 1;
            }
        }
    }

    /// Total positives, `tp + fn`.
    #[inline]
    pub fn positives(&self) -> usize {
        self.tp + self.fn_
    }

    /// Total negatives, `fp + tn`.
    #[inline]
    pub fn negatives(&self) -> usize {
        self.fp + self.tn
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.fn_ + self.tn
    }

    /// `(tp + tn) / total`.
    pub fn accuracy(&self) -> f64 {
        (self.tp + self.tn) as f64 / self.total() as f64
    }

    /// True positive rate (sensitivity): `tp / (tp + fn)`.
    pub fn true_positive_rate(&self) -> f64 {
        self.tp as f64 / self.positives() as f64
    }

    /// False positive rate: `fp / (fp + tn)`.
    pub fn false_positive_rate(&self) -> f64 {
        self.fp as f64 / self.negatives() as f64
    }

    /// Recall, identical to the true positive rate.
    #[inline]
    pub fn recall(&self) -> f64 {
        self.true_positive_rate()
    }

    /// Precision: `tp / (tp + fp)`.
    ///
    /// Only meaningful once at least one example is predicted positive.
    pub fn precision(&self) -> f64 {
        self.tp as f64 / (self.tp + self.fp) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_preserves_class_totals() {
        let mut s = ConfusionState::all_negative(3, 2);
        for label in [Label::Positive, Label::Negative, Label::Positive] {
            s.absorb(label);
            assert_eq!(s.positives(), 3);
            assert_eq!(s.negatives(), 2);
            assert_eq!(s.total(), 5);
        }
        assert_eq!(
            s,
            ConfusionState {
                tp: 2,
                fp: 1,
                fn_: 1,
                tn: 1
            }
        );
    }

    #[test]
    fn rates() {
        let s = ConfusionState {
            tp: 2,
            fp: 1,
            fn_: 2,
            tn: 3,
        };
        assert!((s.accuracy() - 5.0 / 8.0).abs() < 1e-12);
        assert!((s.true_positive_rate() - 0.5).abs() < 1e-12);
        assert!((s.false_positive_rate() - 0.25).abs() < 1e-12);
        assert!((s.precision() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(s.recall(), s.true_positive_rate());
    }

    #[test]
    fn all_negative_accuracy_is_negative_share() {
        let s = ConfusionState::all_negative(1, 3);
        assert!((s.accuracy() - 0.75).abs() < 1e-12);
    }
}
