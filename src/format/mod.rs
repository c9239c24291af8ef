//! Rendering helpers shared by command bodies and the dispatcher.

mod inspect;

pub use inspect::inspect;

use crate::core::ScriptError;
use crate::parser::split_tokens;
use serde::Serialize;
use serde_json::Value;

pub const PERMISSION_DENIED_LINE: &str = "🔒 Rise the permission first.";

/// Pretty JSON with `indent` spaces; `0` gives the compact form.
pub fn json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, ScriptError> {
    if indent == 0 {
        return Ok(serde_json::to_string(value)?);
    }

    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ScriptError::Json(e.to_string()))
}

/// Walks object keys (and numeric array indices) shallowest first.
///
/// Keys are re-tokenized, so `["a b", "c"]` walks `a`, `b`, `c`. Any miss
/// yields `Value::Null`.
pub fn nested_property<S: AsRef<str>>(value: &Value, keys: &[S]) -> Value {
    let mut current = value;
    for key in split_tokens(keys) {
        let next = match current {
            Value::Object(map) => map.get(&key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(child) => current = child,
            None => return Value::Null,
        }
    }
    current.clone()
}

pub fn not_allowed() -> &'static str {
    PERMISSION_DENIED_LINE
}

pub fn unknown_command(name: &str) -> String {
    format!("❌ CommandNotFound: {}", name)
}

pub fn unknown_modifier(name: &str) -> String {
    format!("❌ ModifierNotFound: {}", name)
}

/// Diagnostic line for a failure caught at the dispatcher boundary.
pub fn error_line(err: &ScriptError) -> String {
    match err.detail() {
        Some(detail) => format!("❌ NXS Error: {}\n\n{}", err, detail),
        None => format!("❌ NXS Error: {}", err),
    }
}
