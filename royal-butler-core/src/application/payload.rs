//! Answer payload decoding

use serde_json::Value;
use tracing::warn;

/// Turns an `agentResponse` payload into display text.
///
/// A JSON object with a `value` field yields that field; any other payload
/// is shown verbatim. An empty or absent payload yields `formatting_error`.
pub fn resolve_answer(payload: Option<&str>, formatting_error: &str) -> String {
    let raw = match payload {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            warn!("Answer payload is empty");
            return formatting_error.to_string();
        }
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(fields)) => match fields.get("value") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => {
                warn!("Structured answer payload has no 'value' field");
                raw.to_string()
            }
            Some(other) => other.to_string(),
        },
        Ok(_) => raw.to_string(),
        Err(err) => {
            warn!(error = %err, "Failed to parse answer payload; showing raw text");
            raw.to_string()
        }
    }
}
