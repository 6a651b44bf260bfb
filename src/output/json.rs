//! JSON output envelope
//!
//! Command results are emitted as `{"data": ..., "meta": {...}}` so scripts
//! can tell which tokenauth build produced them.

use chrono::Utc;
use serde::Serialize;

/// Command result plus metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata attached to every JSON result
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the output was produced
    pub timestamp: String,
    /// tokenauth version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        let meta = Metadata {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        Self { data, meta }
    }
}

/// Wrap `data` in the envelope and pretty-print it
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
