//! Purpose: Verbose echo of JSON-RPC traffic to stdout.
//! Exports: `print_at_level`, `render_at_level`.
//! Role: Diagnostics for humans; never part of the data written to caller buffers.
//! Invariants: Level 0 prints nothing; level 1 shortens long strings; level 2+ is verbatim.
use serde_json::{Map, Value};

const MAX_STRING_LEN: usize = 150;
const KEEP_CHARS: usize = 25;

pub fn print_at_level(value: &Value, level: u64) {
    if let Some(text) = render_at_level(value, level) {
        println!("{text}");
    }
}

pub fn render_at_level(value: &Value, level: u64) -> Option<String> {
    let rendered = match level {
        0 => return None,
        1 => serde_json::to_string_pretty(&shorten(value)),
        _ => serde_json::to_string_pretty(value),
    };
    // Serializing a `Value` cannot fail.
    rendered.ok()
}

fn shorten(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(shorten_str(text)),
        Value::Array(items) => Value::Array(items.iter().map(shorten).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), shorten(value)))
                .collect::<Map<_, _>>(),
        ),
        other => other.clone(),
    }
}

fn shorten_str(text: &str) -> String {
    let count = text.chars().count();
    if count <= MAX_STRING_LEN {
        return text.to_string();
    }
    let head: String = text.chars().take(KEEP_CHARS).collect();
    let tail: String = text.chars().skip(count - KEEP_CHARS).collect();
    format!("{head}...[{count} chars]...{tail}")
}
