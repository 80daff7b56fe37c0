//! Checksum calculation for session integrity
//!
//! Raw sessions are hashed before any transformation so the prep report can
//! bind each prepared session to the exact bytes it was derived from.

use crate::domain::{ArgusError, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of JSON data
///
/// Uses canonical JSON serialization (recursively sorted object keys, no
/// whitespace) so semantically identical documents hash identically.
///
/// # Examples
///
/// ```
/// use argus::core::hash::calculate_checksum;
/// use serde_json::json;
///
/// let data = json!({"key": "value"});
/// let checksum = calculate_checksum(&data).unwrap();
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum(data: &Value) -> Result<String> {
    let normalized = normalize_json(data);

    let data_str = serde_json::to_string(&normalized)
        .map_err(|e| ArgusError::Serialization(e.to_string()))?;

    Ok(calculate_checksum_bytes(data_str.as_bytes()))
}

/// Normalize JSON value to ensure consistent key ordering
///
/// Recursively sorts all object keys so that semantically identical JSON
/// produces the same checksum.
fn normalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted: std::collections::BTreeMap<String, Value> =
                std::collections::BTreeMap::new();
            for (k, v) in map {
                sorted.insert(k.clone(), normalize_json(v));
            }
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(normalize_json).collect()),
        _ => value.clone(),
    }
}

/// Calculate SHA-256 checksum of raw bytes
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}

/// Manifest hash over a set of session digests
///
/// One line per session, `session_id:raw_sha256`, sorted, then hashed.
/// Selection order does not affect the manifest.
pub fn manifest_hash(entries: &[(String, String)]) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|(session_id, digest)| format!("{session_id}:{digest}"))
        .collect();
    lines.sort();
    calculate_checksum_bytes(lines.join("\n").as_bytes())
}
