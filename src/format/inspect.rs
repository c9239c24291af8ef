//! Human-readable dump of JSON records.
//!
//! Strings are single-quoted, identifier-like object keys are printed bare
//! and containers nested deeper than the requested depth collapse to
//! `[Object]` / `[Array]`. Short containers stay on one line.

use serde_json::{Map, Value};

/// Containers rendered wider than this break onto multiple lines.
const LINE_WIDTH: usize = 72;
const INDENT: &str = "  ";

pub fn inspect(value: &Value, depth: usize) -> String {
    render(value, 0, depth)
}

fn render(value: &Value, level: usize, depth: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            if level > depth {
                return "[Array]".to_string();
            }
            let parts: Vec<String> = items
                .iter()
                .map(|item| render(item, level + 1, depth))
                .collect();
            wrap('[', ']', parts, level)
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            if level > depth {
                return "[Object]".to_string();
            }
            wrap('{', '}', render_entries(map, level, depth), level)
        }
    }
}

fn render_entries(map: &Map<String, Value>, level: usize, depth: usize) -> Vec<String> {
    map.iter()
        .map(|(key, value)| format!("{}: {}", render_key(key), render(value, level + 1, depth)))
        .collect()
}

fn wrap(open: char, close: char, parts: Vec<String>, level: usize) -> String {
    let single = format!("{} {} {}", open, parts.join(", "), close);
    if single.len() <= LINE_WIDTH && !single.contains('\n') {
        return single;
    }

    let inner_indent = INDENT.repeat(level + 1);
    let body = parts
        .iter()
        .map(|part| format!("{}{}", inner_indent, part))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{}\n{}\n{}{}", open, body, INDENT.repeat(level), close)
}

fn render_key(key: &str) -> String {
    let mut chars = key.chars();
    let identifier = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if identifier { key.to_string() } else { quote(key) }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
