//! Generic value → JSON text rendering
//!
//! Renders a plain value (string, list, or key/value mapping) into JSON text.
//! Used by the export path to embed context payloads in the text form.
//! Mappings render their pairs in native iteration order, which with
//! `preserve_order` is insertion order. Any other value kind renders as empty
//! text, a deliberate non-fatal degradation of the text form, not an error.

use serde_json::Value;

/// Options for text-form output
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Escape quotes, backslashes and control characters in emitted strings.
    ///
    /// Off by default: legacy output performs no escaping, which keeps it
    /// byte-compatible with the historical producer but not strictly
    /// machine-parseable when values contain quotes or control characters.
    pub escape_strings: bool,
}

impl TextOptions {
    /// Options producing strictly parseable JSON text
    pub fn escaped() -> Self {
        TextOptions {
            escape_strings: true,
        }
    }
}

/// Render a value as JSON text
pub fn render_value(value: &Value, options: &TextOptions) -> String {
    match value {
        Value::String(text) => quote(text, options),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| render_value(item, options))
                .collect();
            format!("[{}]", rendered.join(","))
        }
        Value::Object(entries) => {
            let pairs: Vec<String> = entries
                .iter()
                .map(|(key, value)| {
                    format!("{}:{}", quote(key, options), render_value(value, options))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        _ => String::new(),
    }
}

/// Emit a quoted string literal
pub fn quote(text: &str, options: &TextOptions) -> String {
    if options.escape_strings {
        format!("\"{}\"", escape_json_string(text))
    } else {
        format!("\"{text}\"")
    }
}

fn escape_json_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
