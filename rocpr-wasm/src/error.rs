//! JSON envelope returned by every boundary function.
//!
//! Success is `{"ok": <value>}`. Failure is
//! `{"error": "<message>", "kind": "<variant>"}`, where `kind` is
//! [`RocprError::kind`] so callers can branch without parsing the message.

use serde::Serialize;

use rocpr_core::{Result, RocprError};

/// Last-resort failure text when even the error envelope cannot be encoded.
const ENCODING_FAILED: &str = r#"{"error":"failed to encode error","kind":"other"}"#;

/// Encode a success value as `{"ok": val}`.
///
/// A value that fails to encode (for example a map with non-string keys)
/// is reported as an `other` error instead.
pub fn envelope_ok<T: Serialize>(val: &T) -> String {
    #[derive(Serialize)]
    struct Success<'a, T: Serialize> {
        ok: &'a T,
    }
    serde_json::to_string(&Success { ok: val }).unwrap_or_else(|e| {
        envelope_err(&RocprError::Other(format!("failed to encode result: {e}")))
    })
}

/// Encode an error as `{"error": msg, "kind": kind}`.
pub fn envelope_err(err: &RocprError) -> String {
    #[derive(Serialize)]
    struct Failure {
        error: String,
        kind: &'static str,
    }
    tracing::debug!(kind = err.kind(), error = %err, "boundary call failed");
    serde_json::to_string(&Failure {
        error: err.to_string(),
        kind: err.kind(),
    })
    .unwrap_or_else(|_| ENCODING_FAILED.into())
}

/// Encode either side of a `rocpr_core::Result`.
pub fn envelope<T: Serialize>(r: Result<T>) -> String {
    match r {
        Ok(val) => envelope_ok(&val),
        Err(e) => envelope_err(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn success_has_only_ok() {
        let v = parse(&envelope(Ok(0.75)));
        assert_eq!(v["ok"], 0.75);
        assert!(v.get("error").is_none());
    }

    #[test]
    fn degenerate_carries_kind() {
        let r: Result<f64> = Err(RocprError::DegenerateDataset {
            positives: 0,
            negatives: 4,
        });
        let v = parse(&envelope(r));
        assert!(v["error"].as_str().unwrap().contains("degenerate dataset"));
        assert_eq!(v["kind"], "degenerate_dataset");
        assert!(v.get("ok").is_none());
    }

    #[test]
    fn invalid_input_carries_kind() {
        let v = parse(&envelope_err(&RocprError::InvalidInput("bad".into())));
        assert_eq!(v["error"], "invalid input: bad");
        assert_eq!(v["kind"], "invalid_input");
    }

    #[test]
    fn unencodable_success_becomes_other_error() {
        use std::collections::BTreeMap;
        // serde_json refuses non-string map keys that are not integers.
        let mut m = BTreeMap::new();
        m.insert(vec![1u8], 1);
        let v = parse(&envelope_ok(&m));
        assert_eq!(v["kind"], "other");
        assert!(v["error"].as_str().unwrap().contains("failed to encode result"));
    }

    #[test]
    fn fallback_text_is_valid_json() {
        let v = parse(ENCODING_FAILED);
        assert_eq!(v["kind"], "other");
    }
}
