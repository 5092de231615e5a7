//! Example-value conversion shared by the encoder and decoder.
//!
//! Examples are edited as plain strings but stored as typed JSON values,
//! so both directions need a lossy, never-failing conversion.

use crate::flow::ParamType;
use serde_json::Value;

/// Coerces a raw example string into a JSON value matching the declared
/// type. Unparseable numerics degrade to zero and anything that is not
/// (case-insensitively) `"true"` becomes `false`.
pub(crate) fn coerce_example(param_type: ParamType, raw: &str) -> Value {
    match param_type {
        ParamType::Integer => Value::from(parse_integer(raw)),
        ParamType::Number => Value::from(raw.trim().parse::<f64>().unwrap_or(0.0)),
        ParamType::Boolean => Value::from(raw.trim().eq_ignore_ascii_case("true")),
        ParamType::String => Value::from(raw),
    }
}

/// Like [`coerce_example`], but an absent or empty raw example yields no
/// value at all, so the `example` key is omitted from the document.
pub(crate) fn optional_example(param_type: ParamType, raw: Option<&str>) -> Option<Value> {
    match raw {
        Some(text) if !text.is_empty() => Some(coerce_example(param_type, text)),
        _ => None,
    }
}

/// Turns a stored JSON example back into its editable string form.
/// Strings lose their quotes, everything else keeps its JSON rendering,
/// and `null` becomes empty.
pub(crate) fn stringify_example(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .or_else(|_| trimmed.parse::<f64>().map(|float| float as i64))
        .unwrap_or(0)
}
