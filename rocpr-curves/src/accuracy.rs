//! Maximum accuracy over all decision thresholds.

use rocpr_core::{Labeled, Result, Scored};

use crate::example::{prepare, PreparedExamples};

/// Accuracy before each example is reclassified as positive, plus the
/// accuracy of the final all-positive state.
///
/// The returned list has `len + 1` entries. The first is the accuracy of
/// predicting every example negative, the last the accuracy of predicting
/// every example positive.
pub fn accuracy_sweep(examples: &PreparedExamples) -> Vec<f64> {
    let mut state = examples.initial_state();
    let mut accuracies = Vec::with_capacity(examples.len() + 1);
    for ex in examples {
        accuracies.push(state.accuracy());
        state.absorb(ex.label);
    }
    accuracies.push(state.accuracy());
    accuracies
}

/// The largest value of [`accuracy_sweep`].
pub fn max_accuracy(examples: &PreparedExamples) -> f64 {
    accuracy_sweep(examples)
        .into_iter()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Best accuracy reachable by thresholding the scores of `examples`.
///
/// # Errors
///
/// Same conditions as [`prepare`].
pub fn compute_max_accuracy<T: Scored + Labeled>(examples: &[T]) -> Result<f64> {
    let prepared = prepare(examples)?;
    let best = max_accuracy(&prepared);
    tracing::debug!(
        examples = prepared.len(),
        positives = prepared.positives(),
        negatives = prepared.negatives(),
        max_accuracy = best,
        "computed maximum accuracy"
    );
    Ok(best)
}
