//! Precision-recall curve with Davis–Goadrich interpolation.
//!
//! The raw sweep yields one `(recall, precision)` point per distinct score.
//! Precision is not linear between two such points, so straight lines
//! between them over- or under-state the area. Between two raw points `A`
//! and `B` that differ by `N = TP_B - TP_A` true positives, the curve is
//! filled in with `N` points at integer true-positive steps: false positives
//! grow linearly with each step and precision is recomputed from the
//! interpolated counts.
//!
//! Reference: J. Davis and M. Goadrich, "The Relationship Between
//! Precision-Recall and ROC Curves", ICML 2006.

use crate::confusion::ConfusionState;
use crate::curve::{trapezoid, CurvePoint};
use crate::example::PreparedExamples;

/// A point of the raw PR sweep, with the counts it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPrPoint {
    pub recall: f64,
    pub precision: f64,
    /// True positives at this threshold.
    pub tp: usize,
    /// False positives at this threshold.
    pub fp: usize,
}

impl RawPrPoint {
    fn from_state(state: &ConfusionState) -> Self {
        Self {
            recall: state.recall(),
            precision: state.precision(),
            tp: state.tp,
            fp: state.fp,
        }
    }

    pub fn as_point(&self) -> CurvePoint {
        CurvePoint::new(self.recall, self.precision)
    }
}

/// Where the interpolated PR curve starts on the `recall = 0` axis.
///
/// Precision at zero recall is `0 / 0`. When the raw sweep itself opens at
/// exactly `(0, 0)` (the highest-scored block holds no positives) the curve
/// starts at the origin. Otherwise it starts level with the precision of the
/// first raw point that holds a true positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroRecallAnchor {
    /// Start at `(0.0, 0.0)`.
    Origin,
    /// Start at `(0.0, P)` with `P` the first non-zero-recall precision.
    FirstPrecision,
}

impl ZeroRecallAnchor {
    /// Choose the anchor for a raw sweep.
    pub fn for_points(points: &[RawPrPoint]) -> Self {
        match points.first() {
            Some(p) if p.recall == 0.0 && p.precision == 0.0 => ZeroRecallAnchor::Origin,
            _ => ZeroRecallAnchor::FirstPrecision,
        }
    }

    /// The anchor point, given the precision of the first raw point with a
    /// true positive.
    pub fn point(self, first_precision: f64) -> CurvePoint {
        match self {
            ZeroRecallAnchor::Origin => CurvePoint::ORIGIN,
            ZeroRecallAnchor::FirstPrecision => CurvePoint::new(0.0, first_precision),
        }
    }
}

/// Interpolated PR curve with its area.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrCurve {
    /// `(recall, precision)` points in increasing recall, ending at recall 1.
    pub points: Vec<CurvePoint>,
    /// Area under the interpolated curve.
    pub auc: f64,
    /// Which zero-recall anchor opened the curve.
    pub anchor: ZeroRecallAnchor,
}

/// Raw `(recall, precision)` sweep.
///
/// Counts are seeded with the highest-scored example already predicted
/// positive, so precision is always defined. Each later example whose score
/// drops strictly below the current threshold emits a point from the counts
/// before it is absorbed. The final point is `(1, TP / (TP + FP))` with every
/// example predicted positive.
pub fn pr_raw_points(examples: &PreparedExamples) -> Vec<RawPrPoint> {
    let sorted = examples.examples();
    let Some((first, rest)) = sorted.split_first() else {
        return Vec::new();
    };

    let mut state = examples.initial_state();
    state.absorb(first.label);
    let mut threshold = first.score;
    let mut points = Vec::new();

    for ex in rest {
        if ex.score < threshold {
            points.push(RawPrPoint::from_state(&state));
            threshold = ex.score;
        }
        state.absorb(ex.label);
    }

    points.push(RawPrPoint {
        recall: 1.0,
        ..RawPrPoint::from_state(&state)
    });
    points
}

/// Interpolate a raw sweep and integrate the area beneath it.
///
/// Raw points without true positives sit on the `recall = 0` axis and add no
/// area; they are replaced by a single anchor (see [`ZeroRecallAnchor`])
/// emitted before the first point that has one.
pub fn interpolate(points: &[RawPrPoint], positives: usize) -> PrCurve {
    let anchor = ZeroRecallAnchor::for_points(points);
    let total = positives as f64;

    let mut curve = Vec::with_capacity(positives + points.len() + 1);
    let mut auc = 0.0;
    let (mut tpa, mut fpa) = (0usize, 0usize);

    for raw in points {
        let (tpb, fpb) = (raw.tp, raw.fp);
        if tpb == 0 {
            fpa = fpb;
            continue;
        }

        let mut prev = if tpa == 0 {
            let start = anchor.point(raw.precision);
            curve.push(start);
            start
        } else {
            CurvePoint::new(tpa as f64 / total, tpa as f64 / (tpa + fpa) as f64)
        };

        let n = tpb - tpa;
        if n < 1 {
            let b = raw.as_point();
            auc += trapezoid(prev, b);
            curve.push(b);
        } else {
            // Extra false positives per extra true positive between A and B.
            let skew = (fpb - fpa) as f64;
            for i in 1..=n {
                let tp = (tpa + i) as f64;
                let fp = fpa as f64 + skew * i as f64 / n as f64;
                let p = CurvePoint::new(tp / total, tp / (tp + fp));
                auc += trapezoid(prev, p);
                curve.push(p);
                prev = p;
            }
        }

        tpa = tpb;
        fpa = fpb;
    }

    PrCurve {
        points: curve,
        auc,
        anchor,
    }
}

/// Build the interpolated PR curve and its area.
pub fn pr_curve(examples: &PreparedExamples) -> PrCurve {
    let raw = pr_raw_points(examples);
    interpolate(&raw, examples.positives())
}
