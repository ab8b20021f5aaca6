//! printf-style interpolation of verb arguments.
use super::inspect::{inspect, InspectOptions};
use serde_json::Value;

/// Joins verb arguments into a single message.
///
/// A lone string argument is returned verbatim. When the first argument is a
/// string, its `%s %d %i %f %j %o %O %c %%` placeholders consume the following
/// arguments left to right; a placeholder with nothing left to consume stays
/// literal. Whatever remains is appended with single spaces, strings raw and
/// everything else inspected.
pub fn format_args(values: &[Value]) -> String {
    let Some((first, rest)) = values.split_first() else {
        return String::new();
    };

    let (mut out, consumed) = match first {
        Value::String(template) if rest.is_empty() => return template.clone(),
        Value::String(template) => interpolate(template, rest),
        other => (display(other), 0),
    };

    for value in &rest[consumed..] {
        out.push(' ');
        out.push_str(&display(value));
    }
    out
}

fn interpolate(template: &str, values: &[Value]) -> (String, usize) {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&spec) = chars.peek() else {
            out.push('%');
            break;
        };
        if spec == '%' {
            chars.next();
            out.push('%');
            continue;
        }
        if !matches!(spec, 's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c') || next >= values.len() {
            out.push('%');
            continue;
        }
        chars.next();
        let value = &values[next];
        next += 1;
        match spec {
            's' => out.push_str(&display(value)),
            'd' => out.push_str(&number_or_nan(value, false)),
            'i' => out.push_str(&number_or_nan(value, true)),
            'f' => out.push_str(&number_or_nan(value, false)),
            'j' => out.push_str(&serde_json::to_string(value).unwrap_or_default()),
            'o' | 'O' => out.push_str(&inspect(value, &InspectOptions::default())),
            _ => {}
        }
    }
    (out, next)
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => inspect(other, &InspectOptions::default()),
    }
}

fn number_or_nan(value: &Value, truncate: bool) -> String {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => {
            let n = if truncate { n.trunc() } else { n };
            n.to_string()
        }
        _ => "NaN".to_string(),
    }
}
