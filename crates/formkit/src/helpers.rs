//! Helpers for the rendering layer.

use serde_json::{Map, Value};

use crate::config::Disabled;

/// Resolve a field's `disabled` attribute against the current data snapshot:
/// a literal is returned as-is, a field reference follows the named field's
/// truthiness (absent name counts as false).
pub fn is_field_disabled(disabled: &Disabled, data: &Map<String, Value>) -> bool {
    match disabled {
        Disabled::Flag(flag) => *flag,
        Disabled::Field(name) => data.get(name).map(is_truthy).unwrap_or(false),
    }
}

/// Script-style truthiness: null, false, 0, NaN and "" are falsy, arrays and
/// objects always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
