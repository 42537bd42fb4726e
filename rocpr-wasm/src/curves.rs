//! Curve and accuracy wrappers with JSON input/output.
//!
//! Examples are passed as a JSON array of objects:
//!
//! ```json
//! [{"score": 0.9, "label": "positive"}, {"score": 0.4, "label": "neg"}]
//! ```
//!
//! `label` accepts `"positive"`/`"pos"` and `"negative"`/`"neg"`.

use rocpr_core::{Result, RocprError};
use rocpr_curves::ScoredExample;

use crate::diagram::{compute_areas_diagrams, DiagramConfig};
use crate::error::envelope;

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

fn parse_examples(json: &str) -> Result<Vec<ScoredExample>> {
    serde_json::from_str::<Vec<ScoredExample>>(json)
        .map_err(|e| RocprError::InvalidInput(format!("invalid examples JSON: {e}")))
}

fn parse_config(json: &str) -> Result<DiagramConfig> {
    serde_json::from_str::<DiagramConfig>(json)
        .map_err(|e| RocprError::InvalidInput(format!("invalid diagram config JSON: {e}")))
}

/// ROC and PR curves with their areas.
///
/// Returns JSON `{"ok": {"auc_roc", "roc", "auc_pr", "pr", "pr_anchor"}}`
/// where each curve is a list of `{"x", "y"}` points.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compute_areas_json(examples_json: &str) -> String {
    envelope(parse_examples(examples_json).and_then(|ex| rocpr_curves::compute_areas(&ex)))
}

/// Both areas with chart-ready diagrams, using the default 0–1 axes.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compute_areas_diagrams_json(examples_json: &str) -> String {
    envelope(
        parse_examples(examples_json)
            .and_then(|ex| compute_areas_diagrams(&ex, &DiagramConfig::default())),
    )
}

/// Like [`compute_areas_diagrams_json`] with a JSON [`DiagramConfig`].
///
/// Missing config fields take their defaults, so `"{}"` is valid.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compute_areas_diagrams_with_config_json(examples_json: &str, config_json: &str) -> String {
    envelope(parse_config(config_json).and_then(|config| {
        parse_examples(examples_json).and_then(|ex| compute_areas_diagrams(&ex, &config))
    }))
}

/// Maximum accuracy over all thresholds, as `{"ok": <number>}`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn compute_max_accuracy_json(examples_json: &str) -> String {
    envelope(
        parse_examples(examples_json).and_then(|ex| rocpr_curves::compute_max_accuracy(&ex)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALTERNATING: &str = r#"[
        {"score": 0.9, "label": "positive"},
        {"score": 0.8, "label": "negative"},
        {"score": 0.7, "label": "pos"},
        {"score": 0.6, "label": "neg"}
    ]"#;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn areas_json_shape() {
        let v = parse(&compute_areas_json(ALTERNATING));
        assert!((v["ok"]["auc_roc"].as_f64().unwrap() - 0.75).abs() < 1e-12);
        let roc = v["ok"]["roc"].as_array().unwrap();
        assert_eq!(roc.len(), 5);
        assert_eq!(roc[4]["x"], 1.0);
        assert_eq!(roc[4]["y"], 1.0);
        assert_eq!(v["ok"]["pr_anchor"], "FirstPrecision");
    }

    #[test]
    fn diagrams_json_shape() {
        let v = parse(&compute_areas_diagrams_json(ALTERNATING));
        assert_eq!(v["ok"]["roc"]["data"]["rows"][0][1], "ROC");
        assert_eq!(v["ok"]["pr"]["data"]["rows"][0][1], "PR");
        assert_eq!(
            v["ok"]["roc"]["axis"]["x"]["tick"]["values"]
                .as_array()
                .unwrap()
                .len(),
            11
        );
    }

    #[test]
    fn diagrams_with_partial_config() {
        let v = parse(&compute_areas_diagrams_with_config_json(
            ALTERNATING,
            r#"{"tick_step": 0.25}"#,
        ));
        let ticks = v["ok"]["pr"]["axis"]["y"]["tick"]["values"].as_array().unwrap();
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[1], 0.25);
    }

    #[test]
    fn max_accuracy_json_value() {
        let v = parse(&compute_max_accuracy_json(ALTERNATING));
        assert!((v["ok"].as_f64().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn malformed_json_is_error() {
        let v = parse(&compute_areas_json("not json"));
        assert!(v["error"].as_str().unwrap().contains("invalid examples JSON"));
        assert_eq!(v["kind"], "invalid_input");
    }

    #[test]
    fn unknown_label_is_error() {
        let v = parse(&compute_max_accuracy_json(r#"[{"score": 0.5, "label": "maybe"}]"#));
        assert!(v["error"].is_string());
    }

    #[test]
    fn degenerate_is_error() {
        let v = parse(&compute_areas_json(r#"[{"score": 0.5, "label": "pos"}]"#));
        assert!(v["error"].as_str().unwrap().contains("degenerate dataset"));
        assert_eq!(v["kind"], "degenerate_dataset");
    }

    #[test]
    fn tiny_tick_step_is_error_not_panic() {
        let v = parse(&compute_areas_diagrams_with_config_json(
            r#"[{"score": 0.9, "label": "pos"}, {"score": 0.1, "label": "neg"}]"#,
            r#"{"tick_step": 1e-300}"#,
        ));
        assert!(v["error"].as_str().unwrap().contains("too many ticks"));
        assert_eq!(v["kind"], "invalid_input");
    }

    #[test]
    fn non_dividing_tick_step_is_error() {
        let v = parse(&compute_areas_diagrams_with_config_json(
            ALTERNATING,
            r#"{"tick_step": 0.3}"#,
        ));
        assert!(v["error"].as_str().unwrap().contains("does not divide"));
    }

    #[test]
    fn empty_list_is_error() {
        let v = parse(&compute_areas_diagrams_json("[]"));
        assert!(v["error"].as_str().unwrap().contains("empty example list"));
    }
}
