//! Core trait definitions shared across rocpr crates.

/// A type that carries a numeric score (predicted probability, margin, etc.).
pub trait Scored {
    /// The score value. Higher means "more likely positive".
    fn score(&self) -> f64;
}

/// A type that carries a binary ground-truth label.
pub trait Labeled {
    /// Whether the ground truth is the positive class.
    fn is_positive(&self) -> bool;
}

impl Scored for (f64, bool) {
    fn score(&self) -> f64 {
        self.0
    }
}

impl Labeled for (f64, bool) {
    fn is_positive(&self) -> bool {
        self.1
    }
}
