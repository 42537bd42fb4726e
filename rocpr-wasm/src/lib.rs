//! JSON boundary and chart packaging for the rocpr curves.
//!
//! Two layers:
//!
//! - [`diagram`] — typed packaging of ROC/PR curves into a chart schema
//!   (fixed 0–1 axes, ticks every 0.1, series labelled `"ROC"` / `"PR"`)
//! - [`curves`] — string-in/JSON-out wrappers for every entry point, for
//!   environments such as browsers and sandboxed workers
//!
//! Every JSON function returns a `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! `#[wasm_bindgen]` annotations are only applied with the `wasm` feature.
//!
//! # Example
//!
//! ```
//! let json = rocpr_wasm::compute_areas_json(
//!     r#"[{"score": 0.9, "label": "pos"}, {"score": 0.1, "label": "neg"}]"#,
//! );
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"]["auc_roc"], 1.0);
//! ```

pub mod curves;
pub mod diagram;
pub mod error;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use curves::{
    compute_areas_diagrams_json, compute_areas_diagrams_with_config_json, compute_areas_json,
    compute_max_accuracy_json,
};
pub use diagram::{
    compute_areas_diagrams, Axis, CurveDiagrams, Diagram, DiagramAxes, DiagramConfig, DiagramData,
    DiagramRow, Tick, MAX_TICK_INTERVALS,
};
