//! Confirmation view model: the submitted draft as display lines

use super::forms::RegistrationDraft;
use serde_json::Value;

/// Flatten a transferred draft into `(key, display value)` pairs in record
/// order. A missing draft yields no entries.
pub fn confirmation_entries(draft: Option<&RegistrationDraft>) -> Vec<(String, String)> {
    let Some(draft) = draft else {
        return Vec::new();
    };

    match serde_json::to_value(draft) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| (key, display_value(&value)))
            .collect(),
        Ok(_) => Vec::new(),
        Err(err) => {
            tracing::warn!("Failed to flatten submitted draft: {err}");
            Vec::new()
        }
    }
}

/// Plain-text form of a value (strings without quotes)
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Clipboard text for the confirmation list, one `key: value` per line
pub fn confirmation_text(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
