//! Redaction reporting
//!
//! Every redaction decision must be explainable to the contributor before
//! consent: the report aggregates counts, and the per-placeholder metadata
//! map answers "what was redacted and why" without exposing the original
//! values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata recorded for one allocated placeholder
///
/// Deliberately excludes the original value; only its length survives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderInfo {
    /// The placeholder token, e.g. `<AWS_KEY_1>`
    pub placeholder: String,
    /// Redaction category that triggered it
    pub category: String,
    /// Name of the rule (catalogue pattern, custom index, or detector)
    pub rule: String,
    /// Length of the original value in characters
    pub length: usize,
}

/// Aggregate view of one sanitizer's run state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionReport {
    /// Total replacement occurrences (repeats of one value all count)
    pub total_redactions: usize,
    /// Replacement occurrences by category label
    pub counts_by_category: BTreeMap<String, usize>,
    /// Number of distinct placeholders allocated
    pub distinct_placeholders: usize,
    /// Number of strings in which at least one redaction happened
    pub total_strings_touched: usize,
    /// Non-fatal configuration warnings (skipped custom regex, etc.)
    pub warnings: Vec<String>,
    /// Labels of the pattern categories that were active
    pub enabled_categories: Vec<String>,
}

impl RedactionReport {
    /// True when nothing was redacted and nothing went wrong
    pub fn is_clean(&self) -> bool {
        self.total_redactions == 0 && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_clean() {
        let report = RedactionReport {
            total_redactions: 0,
            counts_by_category: BTreeMap::new(),
            distinct_placeholders: 0,
            total_strings_touched: 0,
            warnings: vec![],
            enabled_categories: vec![],
        };
        assert!(report.is_clean());
    }

    #[test]
    fn test_not_clean_with_warnings() {
        let report = RedactionReport {
            total_redactions: 0,
            counts_by_category: BTreeMap::new(),
            distinct_placeholders: 0,
            total_strings_touched: 0,
            warnings: vec!["custom regex skipped".to_string()],
            enabled_categories: vec![],
        };
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_serializes_with_stable_keys() {
        let report = RedactionReport {
            total_redactions: 2,
            counts_by_category: [("secrets".to_string(), 2)].into_iter().collect(),
            distinct_placeholders: 1,
            total_strings_touched: 1,
            warnings: vec![],
            enabled_categories: vec!["secrets".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("total_redactions").is_some());
        assert!(json.get("counts_by_category").is_some());
        assert!(json.get("total_strings_touched").is_some());
    }
}
