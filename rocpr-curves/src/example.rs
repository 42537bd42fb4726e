//! Scored examples and the sorted working copy every sweep runs over.

use rocpr_core::{Labeled, Result, RocprError, Scored};

use crate::confusion::ConfusionState;

/// Ground-truth class of an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Label {
    #[cfg_attr(feature = "serde", serde(alias = "pos"))]
    Positive,
    #[cfg_attr(feature = "serde", serde(alias = "neg"))]
    Negative,
}

impl Label {
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// A predicted score paired with its ground-truth label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredExample {
    /// Classifier output; higher means "more likely positive".
    pub score: f64,
    /// Ground truth.
    pub label: Label,
}

impl ScoredExample {
    pub fn new(score: f64, label: impl Into<Label>) -> Self {
        Self {
            score,
            label: label.into(),
        }
    }

    /// A positive example with the given score.
    pub fn positive(score: f64) -> Self {
        Self::new(score, Label::Positive)
    }

    /// A negative example with the given score.
    pub fn negative(score: f64) -> Self {
        Self::new(score, Label::Negative)
    }
}

impl Scored for ScoredExample {
    fn score(&self) -> f64 {
        self.score
    }
}

impl Labeled for ScoredExample {
    fn is_positive(&self) -> bool {
        self.label.is_positive()
    }
}

/// Examples sorted by descending score, with their class totals.
///
/// The sort is stable: examples sharing a score keep their input order.
/// Construction guarantees at least one positive and one negative example,
/// so every rate computed from a sweep over this list has a non-zero
/// denominator.
#[derive(Debug, Clone)]
pub struct PreparedExamples {
    sorted: Vec<ScoredExample>,
    positives: usize,
    negatives: usize,
}

impl PreparedExamples {
    /// Number of positive examples.
    #[inline]
    pub fn positives(&self) -> usize {
        self.positives
    }

    /// Number of negative examples.
    #[inline]
    pub fn negatives(&self) -> usize {
        self.negatives
    }

    /// Total number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`: preparation rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The examples in descending-score order.
    pub fn examples(&self) -> &[ScoredExample] {
        &self.sorted
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredExample> {
        self.sorted.iter()
    }

    /// Runs of examples sharing the same score, highest score first.
    ///
    /// Each run is one distinct decision threshold.
    pub fn tied_blocks(&self) -> impl Iterator<Item = &[ScoredExample]> + '_ {
        self.sorted.chunk_by(|a, b| a.score == b.score)
    }

    /// Confusion counts with every example predicted negative.
    pub fn initial_state(&self) -> ConfusionState {
        ConfusionState::all_negative(self.positives, self.negatives)
    }
}

impl<'a> IntoIterator for &'a PreparedExamples {
    type Item = &'a ScoredExample;
    type IntoIter = std::slice::Iter<'a, ScoredExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted.iter()
    }
}

/// Sort examples by descending score and count both classes.
///
/// # Errors
///
/// Returns [`RocprError::InvalidInput`] if the input is empty or any score is
/// NaN or infinite, and [`RocprError::DegenerateDataset`] if either class is
/// missing.
pub fn prepare<T: Scored + Labeled>(examples: &[T]) -> Result<PreparedExamples> {
    if examples.is_empty() {
        return Err(RocprError::InvalidInput("empty example list".into()));
    }

    let mut sorted = Vec::with_capacity(examples.len());
    let mut positives = 0usize;
    for (i, ex) in examples.iter().enumerate() {
        let score = ex.score();
        if !score.is_finite() {
            return Err(RocprError::InvalidInput(format!(
                "example {i} has non-finite score {score}"
            )));
        }
        if ex.is_positive() {
            positives += 1;
        }
        // Adding 0.0 folds -0.0 into 0.0 so total_cmp agrees with `==`.
        sorted.push(ScoredExample::new(score + 0.0, ex.is_positive()));
    }
    let negatives = sorted.len() - positives;

    if positives == 0 || negatives == 0 {
        return Err(RocprError::DegenerateDataset {
            positives,
            negatives,
        });
    }

    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(PreparedExamples {
        sorted,
        positives,
        negatives,
    })
}
