//! Curve value types shared by the ROC and PR builders.

/// A single `(x, y)` point on an evaluation curve.
///
/// `(FPR, TPR)` on a ROC curve, `(recall, precision)` on a PR curve. Both
/// coordinates lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    /// Create a point from its two coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// The `(1, 1)` corner that closes every ROC curve.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    /// Return the point as an `(x, y)` tuple.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Which evaluation curve a list of points describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveKind {
    /// False-positive rate against true-positive rate.
    Roc,
    /// Recall against precision.
    PrecisionRecall,
}

impl CurveKind {
    /// Series label used when the curve is rendered.
    pub fn label(&self) -> &'static str {
        match self {
            CurveKind::Roc => "ROC",
            CurveKind::PrecisionRecall => "PR",
        }
    }
}

/// Signed area of the trapezoid strip between `a` and `b` under the curve.
///
/// Negative when `b.x < a.x`; the sweeps never produce that ordering.
#[inline]
pub fn trapezoid(a: CurvePoint, b: CurvePoint) -> f64 {
    (b.x - a.x) * (b.y + a.y) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trapezoid_unit_square_diagonal() {
        assert!((trapezoid(CurvePoint::ORIGIN, CurvePoint::UNIT) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn trapezoid_vertical_segment_is_zero() {
        let a = CurvePoint::new(0.5, 0.2);
        let b = CurvePoint::new(0.5, 0.9);
        assert_eq!(trapezoid(a, b), 0.0);
    }

    #[test]
    fn trapezoid_is_signed() {
        let a = CurvePoint::new(0.0, 1.0);
        let b = CurvePoint::new(0.5, 1.0);
        assert!((trapezoid(a, b) + trapezoid(b, a)).abs() < 1e-12);
    }

    #[test]
    fn labels() {
        assert_eq!(CurveKind::Roc.label(), "ROC");
        assert_eq!(CurveKind::PrecisionRecall.label(), "PR");
    }

    #[test]
    fn from_tuple() {
        let p: CurvePoint = (0.25, 0.75).into();
        assert_eq!(p.as_tuple(), (0.25, 0.75));
    }
}
