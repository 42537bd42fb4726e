//! Structured error types for rocpr.

use thiserror::Error;

/// Unified error type for all rocpr operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RocprError {
    /// Invalid input (empty example list, non-finite scores, malformed JSON)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The examples lack one of the two classes, so rates divide by zero
    #[error(
        "degenerate dataset: {positives} positive and {negatives} negative examples \
         (need at least one of each)"
    )]
    DegenerateDataset { positives: usize, negatives: usize },

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl RocprError {
    /// Stable snake_case name of the variant, for machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            RocprError::InvalidInput(_) => "invalid_input",
            RocprError::DegenerateDataset { .. } => "degenerate_dataset",
            RocprError::Other(_) => "other",
        }
    }
}

/// Convenience alias used throughout rocpr.
pub type Result<T> = std::result::Result<T, RocprError>;
