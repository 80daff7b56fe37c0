//! Prep report
//!
//! The prep report is persisted into exported bundles and read by tooling
//! long after export, so its field names and nesting are a stable contract.
//! Add fields if needed; never rename or remove them.

use crate::config::ArgusConfig;
use crate::core::hash::manifest_hash;
use crate::core::prepare::pipeline::PreparationResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Longest custom regex source echoed into the report
const CUSTOM_REGEX_ECHO_CHARS: usize = 64;

/// Contributor block of the prep report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContributor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<String>,
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_preference: Option<String>,
}

/// One selected session inside the inputs block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedSession {
    pub session_id: String,
    pub raw_sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path_hint: Option<String>,
    pub score: u32,
}

/// Inputs block: what went into this bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInputs {
    /// Hash over the sorted `session_id:raw_sha256` lines of the selection
    pub raw_export_manifest_sha256: String,
    pub selected_sessions: Vec<SelectedSession>,
}

/// Residue verdict as persisted in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResidue {
    pub warnings: Vec<String>,
    pub blocked: bool,
}

/// Redaction block: what was done to the content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRedaction {
    pub counts: BTreeMap<String, usize>,
    pub total_strings_touched: usize,
    pub enabled_categories: Vec<String>,
    /// Custom regex sources, truncated; enough to audit intent without
    /// reproducing an arbitrarily long pattern
    pub custom_regexes: Vec<String>,
    pub residue_check_results: ReportResidue,
}

/// Rights block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRights {
    pub license: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights_statement: Option<String>,
}

/// Contributor attestation block, filled in by the consent surface
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserAttestation {
    /// Contributor confirmed the reviewed content contains no third-party
    /// confidential material
    pub reviewed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attested_at_utc: Option<DateTime<Utc>>,
}

/// The stable prep report persisted into exported bundles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepReport {
    pub app_version: String,
    pub created_at_utc: DateTime<Utc>,
    pub bundle_id: String,
    pub contributor: ReportContributor,
    pub inputs: ReportInputs,
    pub redaction: ReportRedaction,
    pub rights: ReportRights,
    pub user_attestation: UserAttestation,
}

/// Build a prep report for one preparation batch
///
/// `bundle_id` and `created_at_utc` are fresh per call; everything else is
/// a pure function of the config and the preparation result.
pub fn build_prep_report(config: &ArgusConfig, result: &PreparationResult) -> PrepReport {
    let manifest_entries: Vec<(String, String)> = result
        .sessions
        .iter()
        .map(|s| (s.session_id.clone(), s.raw_sha256.clone()))
        .collect();

    let selected_sessions = result
        .sessions
        .iter()
        .map(|s| SelectedSession {
            session_id: s.session_id.clone(),
            raw_sha256: s.raw_sha256.clone(),
            source_path_hint: s.source_path_hint.clone(),
            score: s.score,
        })
        .collect();

    let custom_regexes = config
        .redaction
        .custom_regex
        .iter()
        .map(|src| truncate_chars(src, CUSTOM_REGEX_ECHO_CHARS))
        .collect();

    PrepReport {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        created_at_utc: Utc::now(),
        bundle_id: Uuid::new_v4().to_string(),
        contributor: ReportContributor {
            contributor_id: config.contributor.contributor_id.clone(),
            license: config.contributor.license.clone(),
            ai_preference: config.contributor.ai_preference.clone(),
        },
        inputs: ReportInputs {
            raw_export_manifest_sha256: manifest_hash(&manifest_entries),
            selected_sessions,
        },
        redaction: ReportRedaction {
            counts: result.redaction.counts_by_category.clone(),
            total_strings_touched: result.redaction.total_strings_touched,
            enabled_categories: result.redaction.enabled_categories.clone(),
            custom_regexes,
            residue_check_results: ReportResidue {
                warnings: result.residue.warnings.clone(),
                blocked: result.residue.blocked,
            },
        },
        rights: ReportRights {
            license: config.contributor.license.clone(),
            rights_statement: config.contributor.rights_statement.clone(),
        },
        user_attestation: UserAttestation::default(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prepare::pipeline::PreparationPipeline;
    use crate::domain::RawSession;
    use serde_json::json;

    fn result_for(sessions: &[RawSession]) -> PreparationResult {
        PreparationPipeline::new(ArgusConfig::default())
            .unwrap()
            .prepare_sessions(sessions)
            .unwrap()
    }

    fn chat(id: &str) -> RawSession {
        RawSession::new(
            id,
            "chat",
            json!({"messages": [{"role": "user", "content": "hello"}]}),
        )
    }

    #[test]
    fn test_report_shape_is_stable() {
        let report = build_prep_report(&ArgusConfig::default(), &result_for(&[chat("s-1")]));
        let value = serde_json::to_value(&report).unwrap();

        for key in [
            "app_version",
            "created_at_utc",
            "bundle_id",
            "contributor",
            "inputs",
            "redaction",
            "rights",
            "user_attestation",
        ] {
            assert!(value.get(key).is_some(), "missing top-level key {key}");
        }
        assert!(value["inputs"].get("raw_export_manifest_sha256").is_some());
        assert!(value["inputs"].get("selected_sessions").is_some());
        assert!(value["redaction"].get("residue_check_results").is_some());
        assert!(value["redaction"]["residue_check_results"]
            .get("blocked")
            .is_some());
    }

    #[test]
    fn test_manifest_hash_independent_of_selection_order() {
        let forward = result_for(&[chat("s-1"), chat("s-2")]);
        let reversed = result_for(&[chat("s-2"), chat("s-1")]);

        let config = ArgusConfig::default();
        let report_a = build_prep_report(&config, &forward);
        let report_b = build_prep_report(&config, &reversed);
        assert_eq!(
            report_a.inputs.raw_export_manifest_sha256,
            report_b.inputs.raw_export_manifest_sha256
        );
    }

    #[test]
    fn test_bundle_ids_are_unique() {
        let result = result_for(&[chat("s-1")]);
        let config = ArgusConfig::default();
        let a = build_prep_report(&config, &result);
        let b = build_prep_report(&config, &result);
        assert_ne!(a.bundle_id, b.bundle_id);
    }

    #[test]
    fn test_custom_regexes_truncated() {
        let mut config = ArgusConfig::default();
        config.redaction.custom_regex = vec!["x".repeat(200)];
        let report = build_prep_report(&config, &result_for(&[chat("s-1")]));
        assert!(report.redaction.custom_regexes[0].len() < 200);
        assert!(report.redaction.custom_regexes[0].ends_with("..."));
    }

    #[test]
    fn test_contributor_copied_from_config() {
        let mut config = ArgusConfig::default();
        config.contributor.contributor_id = Some("anon-7".to_string());
        config.contributor.license = "CC0-1.0".to_string();
        let report = build_prep_report(&config, &result_for(&[chat("s-1")]));
        assert_eq!(report.contributor.contributor_id.as_deref(), Some("anon-7"));
        assert_eq!(report.rights.license, "CC0-1.0");
    }
}
