//! ROC curve by threshold sweep, with its area by trapezoid summation.
//!
//! Points come out of the sweep already ordered by threshold, and consecutive
//! points never move left or down, so the area under the polyline is a plain
//! running sum of trapezoids from the origin to `(1, 1)`.

use crate::curve::{trapezoid, CurvePoint};
use crate::example::PreparedExamples;

/// ROC curve with its area.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// `(FPR, TPR)` points in emission order, ending at `(1, 1)`.
    pub points: Vec<CurvePoint>,
    /// Area under the curve.
    pub auc: f64,
}

/// Sweep the thresholds and emit one `(FPR, TPR)` point per distinct score.
///
/// A point is emitted when an example's score drops strictly below the last
/// emitted threshold, using the counts *before* that example is absorbed.
/// The first example therefore always emits `(0, 0)`. Examples tied with the
/// current threshold are absorbed silently. The `(1, 1)` corner closes the
/// curve.
pub fn roc_points(examples: &PreparedExamples) -> Vec<CurvePoint> {
    let mut state = examples.initial_state();
    let mut threshold = f64::INFINITY;
    let mut points = Vec::new();

    for ex in examples {
        if ex.score < threshold {
            let point = CurvePoint::new(state.false_positive_rate(), state.true_positive_rate());
            tracing::trace!(threshold = ex.score, fpr = point.x, tpr = point.y, "roc point");
            points.push(point);
            threshold = ex.score;
        }
        state.absorb(ex.label);
    }

    points.push(CurvePoint::UNIT);
    points
}

/// Area under a ROC polyline that implicitly starts at the origin.
pub fn hull_area(points: &[CurvePoint]) -> f64 {
    let mut prev = CurvePoint::ORIGIN;
    let mut auc = 0.0;
    for &p in points {
        auc += trapezoid(prev, p);
        prev = p;
    }
    auc
}

/// Build the ROC curve and its area.
pub fn roc_curve(examples: &PreparedExamples) -> RocCurve {
    let points = roc_points(examples);
    let auc = hull_area(&points);
    RocCurve { points, auc }
}
