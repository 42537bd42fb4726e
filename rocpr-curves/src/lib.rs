//! Binary-classifier evaluation curves for the rocpr crates.
//!
//! Computes the Receiver Operating Characteristic (ROC) and Precision-Recall
//! (PR) curves of a list of scored examples, their exact areas, and the
//! maximum accuracy reachable over all decision thresholds.
//!
//! - **Example preparation** — [`prepare`] sorts by descending score and counts classes
//! - **Accuracy sweep** — [`compute_max_accuracy`], [`accuracy_sweep`]
//! - **ROC** — threshold sweep plus trapezoid area, see [`roc`]
//! - **PR** — threshold sweep plus Davis–Goadrich interpolation, see [`pr`]
//! - **Orchestrator** — [`compute_areas`] runs everything once
//!
//! # Example
//!
//! ```
//! use rocpr_curves::{compute_areas, ScoredExample};
//!
//! let examples = [
//!     ScoredExample::positive(0.9),
//!     ScoredExample::negative(0.8),
//!     ScoredExample::positive(0.7),
//!     ScoredExample::negative(0.6),
//! ];
//! let areas = compute_areas(&examples).unwrap();
//! assert!((areas.auc_roc - 0.75).abs() < 1e-12);
//! ```

pub mod accuracy;
pub mod areas;
pub mod confusion;
pub mod curve;
pub mod example;
pub mod pr;
pub mod roc;

pub use accuracy::{accuracy_sweep, compute_max_accuracy, max_accuracy};
pub use areas::{compute_areas, compute_areas_prepared, CurveAreas};
pub use confusion::ConfusionState;
pub use curve::{CurveKind, CurvePoint};
pub use example::{prepare, Label, PreparedExamples, ScoredExample};
pub use pr::{pr_curve, PrCurve, RawPrPoint, ZeroRecallAnchor};
pub use roc::{roc_curve, RocCurve};
