//! Canonical redaction pattern catalogue
//!
//! The catalogue is versioned TOML data, embedded at compile time and also
//! loadable from a file for auditing and testing. The sanitizer consumes a
//! [`PatternSet`]: the category-filtered, compiled subset matching the
//! active redaction configuration.
//!
//! Structural validation (missing fields, uncompilable regex, overbreadth
//! advisories) lives in [`validate_definition`]. It is an authoring-time
//! check; the sanitize hot path never runs it, and a definition that fails
//! to compile there degrades to a recorded warning.

use crate::config::RedactionConfig;
use crate::domain::{PatternError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Redaction category a pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    Secrets,
    Credentials,
    Pii,
    Network,
    Paths,
}

impl PatternCategory {
    /// Stable label used in reports and redaction counts
    pub fn label(&self) -> &'static str {
        match self {
            PatternCategory::Secrets => "secrets",
            PatternCategory::Credentials => "credentials",
            PatternCategory::Pii => "pii",
            PatternCategory::Network => "network",
            PatternCategory::Paths => "paths",
        }
    }

    /// Application precedence: secrets and credentials run before the rest
    /// so that, e.g., a connection string is consumed whole rather than
    /// having its embedded user@host fragment taken by the email pattern.
    fn rank(&self) -> u8 {
        match self {
            PatternCategory::Secrets => 0,
            PatternCategory::Credentials => 1,
            PatternCategory::Pii => 2,
            PatternCategory::Network => 3,
            PatternCategory::Paths => 4,
        }
    }
}

/// One pattern definition as it appears in the catalogue TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDefinition {
    /// Placeholder prefix for substituted tokens (`<PREFIX_n>`)
    pub placeholder: String,
    /// Regex sources; any match is redacted
    pub regex: Vec<String>,
    /// Redaction category
    pub category: PatternCategory,
    /// Human explanation shown in the review UI
    #[serde(default)]
    pub description: String,
    /// Disabled patterns are kept for history but never applied
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Catalogue file shape
#[derive(Debug, Deserialize)]
struct PatternCatalogue {
    version: String,
    patterns: BTreeMap<String, PatternDefinition>,
}

/// A compiled pattern ready for the sanitizer
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Catalogue name of the definition
    pub name: String,
    /// Placeholder prefix
    pub placeholder: String,
    /// Redaction category
    pub category: PatternCategory,
    /// Compiled regexes
    pub regexes: Vec<Regex>,
}

/// The versioned catalogue of canonical redaction patterns
pub struct PatternRegistry {
    version: String,
    definitions: BTreeMap<String, PatternDefinition>,
}

impl PatternRegistry {
    /// Load the catalogue embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(include_str!("../../patterns/redaction_patterns.toml"))
    }

    /// Load a catalogue from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            PatternError::ReadFailed(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse a catalogue from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let catalogue: PatternCatalogue =
            toml::from_str(content).map_err(|e| PatternError::ParseFailed(e.to_string()))?;
        Ok(Self {
            version: catalogue.version,
            definitions: catalogue.patterns,
        })
    }

    /// Catalogue version string
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All definitions, keyed by name
    pub fn definitions(&self) -> &BTreeMap<String, PatternDefinition> {
        &self.definitions
    }

    /// Look up one definition by name
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.definitions.get(name)
    }

    /// Compile the subset of enabled patterns selected by the redaction
    /// configuration
    ///
    /// Definitions that fail to compile are skipped with a recorded warning;
    /// sanitization proceeds best-effort with everything else.
    pub fn pattern_set(&self, config: &RedactionConfig) -> PatternSet {
        let mut patterns = Vec::new();
        let mut warnings = Vec::new();
        let mut enabled_categories = Vec::new();

        for category in [
            PatternCategory::Secrets,
            PatternCategory::Credentials,
            PatternCategory::Pii,
            PatternCategory::Network,
            PatternCategory::Paths,
        ] {
            if category_enabled(category, config) {
                enabled_categories.push(category.label().to_string());
            }
        }

        for (name, def) in &self.definitions {
            if !def.enabled || !category_enabled(def.category, config) {
                continue;
            }

            let mut regexes = Vec::new();
            for source in &def.regex {
                match Regex::new(source) {
                    Ok(re) => regexes.push(re),
                    Err(e) => {
                        warnings.push(format!("pattern '{name}' regex skipped: {e}"));
                    }
                }
            }
            if regexes.is_empty() {
                continue;
            }

            patterns.push(CompiledPattern {
                name: name.clone(),
                placeholder: def.placeholder.clone(),
                category: def.category,
                regexes,
            });
        }

        // Deterministic application order: category precedence, then name
        patterns.sort_by(|a, b| {
            a.category
                .rank()
                .cmp(&b.category.rank())
                .then_with(|| a.name.cmp(&b.name))
        });

        PatternSet {
            patterns,
            enabled_categories,
            warnings,
        }
    }
}

fn category_enabled(category: PatternCategory, config: &RedactionConfig) -> bool {
    match category {
        PatternCategory::Secrets | PatternCategory::Credentials => config.redact_secrets,
        PatternCategory::Pii | PatternCategory::Network => config.redact_pii,
        PatternCategory::Paths => config.redact_paths,
    }
}

/// Compiled, category-filtered patterns plus construction diagnostics
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    /// Compiled patterns in application order
    pub patterns: Vec<CompiledPattern>,
    /// Labels of the categories this set covers
    pub enabled_categories: Vec<String>,
    /// Non-fatal problems found while compiling
    pub warnings: Vec<String>,
}

/// A single finding from the authoring-time validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Definition cannot be used at all
    Error(String),
    /// Definition works but looks risky (overbreadth, backtracking)
    Advisory(String),
}

/// Validate one pattern definition
///
/// Returns every structural error and advisory finding. Advisories flag
/// constructs that tend to over-match (`.*`, unbounded `.+`) or explode
/// under backtracking (nested quantifiers); they do not block use.
pub fn validate_definition(name: &str, def: &PatternDefinition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if def.placeholder.is_empty() {
        issues.push(ValidationIssue::Error(format!(
            "pattern '{name}': placeholder must not be empty"
        )));
    }
    if !def
        .placeholder
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        issues.push(ValidationIssue::Advisory(format!(
            "pattern '{name}': placeholder '{}' is not UPPER_SNAKE_CASE",
            def.placeholder
        )));
    }
    if def.regex.is_empty() {
        issues.push(ValidationIssue::Error(format!(
            "pattern '{name}': regex list must not be empty"
        )));
    }

    for source in &def.regex {
        if let Err(e) = Regex::new(source) {
            issues.push(ValidationIssue::Error(format!(
                "pattern '{name}': regex does not compile: {e}"
            )));
            continue;
        }

        if source.contains(".*") && !source.contains(".*?") {
            issues.push(ValidationIssue::Advisory(format!(
                "pattern '{name}': greedy '.*' risks over-matching: {source}"
            )));
        }
        if source.contains(")+") && source.contains("+)") {
            issues.push(ValidationIssue::Advisory(format!(
                "pattern '{name}': nested quantifiers risk slow matching: {source}"
            )));
        }
        if source.len() < 6 {
            issues.push(ValidationIssue::Advisory(format!(
                "pattern '{name}': very short regex is likely overbroad: {source}"
            )));
        }
    }

    issues
}
