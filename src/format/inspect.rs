//! Human-readable rendering of arbitrary values.
//!
//! Values are `serde_json::Value` trees, so rendering can never loop on a
//! cycle; the depth limit keeps deeply nested documents short.
use serde::Serialize;
use serde_json::{Map, Value};

/// Controls how [`inspect`] lays values out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOptions {
    /// How many levels of nesting to expand. `None` expands everything.
    pub depth: Option<usize>,
    /// Containers whose single-line form is longer than this are broken up.
    pub break_length: usize,
    /// Render object keys in sorted order instead of insertion order.
    pub sort_keys: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            depth: Some(2),
            break_length: 80,
            sort_keys: false,
        }
    }
}

impl InspectOptions {
    pub fn with_depth(mut self, depth: Option<usize>) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_break_length(mut self, break_length: usize) -> Self {
        self.break_length = break_length;
        self
    }

    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

/// Renders a value the way a console `dir` shows it.
pub fn inspect(value: &Value, options: &InspectOptions) -> String {
    render(value, 0, 0, options)
}

/// Serializes then renders any value. Serialization failures become a
/// placeholder instead of an error.
pub fn inspect_serialize<T: Serialize + ?Sized>(value: &T, options: &InspectOptions) -> String {
    match serde_json::to_value(value) {
        Ok(value) => inspect(&value, options),
        Err(err) => format!("[Unserializable: {err}]"),
    }
}

fn render(value: &Value, level: usize, indent: usize, options: &InspectOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            if beyond_depth(level, options) {
                return "[Array]".to_string();
            }
            let entries = items
                .iter()
                .map(|item| render(item, level + 1, indent + 2, options))
                .collect::<Vec<_>>();
            wrap('[', ']', &entries, indent, options)
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            if beyond_depth(level, options) {
                return "[Object]".to_string();
            }
            let entries = object_entries(map, options)
                .into_iter()
                .map(|(key, item)| {
                    format!("{}: {}", render_key(key), render(item, level + 1, indent + 2, options))
                })
                .collect::<Vec<_>>();
            wrap('{', '}', &entries, indent, options)
        }
    }
}

fn beyond_depth(level: usize, options: &InspectOptions) -> bool {
    options.depth.is_some_and(|depth| level > depth)
}

fn object_entries<'a>(map: &'a Map<String, Value>, options: &InspectOptions) -> Vec<(&'a str, &'a Value)> {
    let mut entries: Vec<(&str, &Value)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    if options.sort_keys {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    entries
}

fn wrap(open: char, close: char, entries: &[String], indent: usize, options: &InspectOptions) -> String {
    let single = format!("{open} {} {close}", entries.join(", "));
    let multiline = entries.iter().any(|entry| entry.contains('\n'));
    if !multiline && indent + single.chars().count() <= options.break_length {
        return single;
    }

    let pad = " ".repeat(indent + 2);
    let body = entries
        .iter()
        .map(|entry| format!("{pad}{entry}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{open}\n{body}\n{}{close}", " ".repeat(indent))
}

fn render_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        quote(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
