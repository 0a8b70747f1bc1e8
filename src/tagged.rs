//! Key-presence rendering of operation results.
//!
//! Callers on the JS side of a binding expect `{success: true, ...}`, a bare
//! payload, or `{error: "<message>"}`, and check for the `error` key.
//! [`to_tagged`] produces exactly one of those shapes from a typed result.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::MiniAppError;

/// Render `result` in the tagged shape.
///
/// - `Ok(())` (or any payload serializing to `null`) → `{"success": true}`
/// - `Ok(payload)` → the serialized payload
/// - `Err(e)` → `{"error": e.to_string()}`
pub fn to_tagged<T: Serialize>(result: &Result<T, MiniAppError>) -> Value {
    match result {
        Ok(payload) => match serde_json::to_value(payload) {
            Ok(Value::Null) => json!({ "success": true }),
            Ok(value) => value,
            Err(e) => json!({ "error": e.to_string() }),
        },
        Err(e) => json!({ "error": e.to_string() }),
    }
}

/// Whether a tagged value denotes success (no `error` key).
pub fn is_success(tagged: &Value) -> bool {
    tagged.get("error").is_none()
}
