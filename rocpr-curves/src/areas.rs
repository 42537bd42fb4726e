//! Both curves and their areas from a single preparation pass.

use rocpr_core::{Labeled, Result, Scored};

use crate::curve::CurvePoint;
use crate::example::{prepare, PreparedExamples};
use crate::pr::{pr_curve, ZeroRecallAnchor};
use crate::roc::roc_curve;

/// ROC and PR curves of one example list, with their areas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveAreas {
    /// Area under the ROC curve.
    pub auc_roc: f64,
    /// `(FPR, TPR)` points ending at `(1, 1)`.
    pub roc: Vec<CurvePoint>,
    /// Area under the interpolated PR curve.
    pub auc_pr: f64,
    /// Interpolated `(recall, precision)` points ending at recall 1.
    pub pr: Vec<CurvePoint>,
    /// Zero-recall anchor the PR curve opened with.
    pub pr_anchor: ZeroRecallAnchor,
}

impl CurveAreas {
    /// `(auc_roc, roc, auc_pr, pr)`.
    pub fn into_parts(self) -> (f64, Vec<CurvePoint>, f64, Vec<CurvePoint>) {
        (self.auc_roc, self.roc, self.auc_pr, self.pr)
    }
}

/// Build both curves from examples that are already prepared.
pub fn compute_areas_prepared(examples: &PreparedExamples) -> CurveAreas {
    let roc = roc_curve(examples);
    let pr = pr_curve(examples);
    CurveAreas {
        auc_roc: roc.auc,
        roc: roc.points,
        auc_pr: pr.auc,
        pr: pr.points,
        pr_anchor: pr.anchor,
    }
}

/// Compute the ROC and PR curves of `examples` and the area under each.
///
/// # Errors
///
/// Returns [`rocpr_core::RocprError::InvalidInput`] for an empty list or a
/// non-finite score, and [`rocpr_core::RocprError::DegenerateDataset`] when
/// either class is missing. Nothing is computed in either case.
pub fn compute_areas<T: Scored + Labeled>(examples: &[T]) -> Result<CurveAreas> {
    let prepared = prepare(examples)?;
    let areas = compute_areas_prepared(&prepared);
    tracing::debug!(
        examples = prepared.len(),
        positives = prepared.positives(),
        negatives = prepared.negatives(),
        roc_points = areas.roc.len(),
        pr_points = areas.pr.len(),
        auc_roc = areas.auc_roc,
        auc_pr = areas.auc_pr,
        "computed ROC and PR areas"
    );
    Ok(areas)
}
