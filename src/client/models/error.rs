//! Failure response bodies

use serde::Deserialize;
use serde_json::Value;

/// Body the server sends with a non-success status
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// A message string, or a list of validation entries on 422
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human-readable message, if the body carries one
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(entries) => {
                let msgs: Vec<&str> = entries
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Extract the failure message from a raw body, or use `fallback`
pub fn failure_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .unwrap_or_else(|| fallback.to_string())
}
