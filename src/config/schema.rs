//! Configuration schema types
//!
//! Root structure mapping to the `argus.toml` file. Every section has
//! serde defaults so a minimal (or missing) file still yields a usable,
//! privacy-conservative configuration.

use serde::{Deserialize, Serialize};

/// Main Argus configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArgusConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Redaction behavior
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Field selection
    #[serde(default)]
    pub fields: FieldsConfig,

    /// Contributor identity and licensing for the prep report
    #[serde(default)]
    pub contributor: ContributorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ArgusConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.redaction.validate()?;
        self.fields.validate()?;
        self.contributor.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("application.name cannot be empty".to_string());
        }
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!(
                "application.log_level must be one of trace, debug, info, warn, error (got '{other}')"
            )),
        }
    }
}

/// Redaction behavior
///
/// The defaults are deliberately conservative: every category on, entropy
/// detection on. Turning things off is an explicit contributor choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Redact secrets and credentials (API keys, tokens, connection strings)
    #[serde(default = "default_true")]
    pub redact_secrets: bool,

    /// Redact personal information (emails, phone numbers) and network
    /// addresses
    #[serde(default = "default_true")]
    pub redact_pii: bool,

    /// Redact username-bearing filesystem paths
    #[serde(default = "default_true")]
    pub redact_paths: bool,

    /// Replace entire fenced code blocks with a placeholder
    #[serde(default)]
    pub mask_code_blocks: bool,

    /// Additional regex sources applied after the catalogue patterns
    #[serde(default)]
    pub custom_regex: Vec<String>,

    /// Entropy-based detection of secrets no pattern knows about
    #[serde(default = "default_true")]
    pub enable_high_entropy: bool,

    /// Minimum candidate length for entropy detection (floored at 20)
    #[serde(default = "default_entropy_min_length")]
    pub entropy_min_length: usize,

    /// Entropy threshold in bits per character
    #[serde(default = "default_entropy_threshold")]
    pub entropy_threshold: f64,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_secrets: true,
            redact_pii: true,
            redact_paths: true,
            mask_code_blocks: false,
            custom_regex: Vec::new(),
            enable_high_entropy: true,
            entropy_min_length: default_entropy_min_length(),
            entropy_threshold: default_entropy_threshold(),
        }
    }
}

impl RedactionConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=8.0).contains(&self.entropy_threshold) {
            return Err(format!(
                "redaction.entropy_threshold must be between 0.0 and 8.0 (got {})",
                self.entropy_threshold
            ));
        }
        if self.custom_regex.iter().any(|s| s.trim().is_empty()) {
            return Err("redaction.custom_regex entries cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Field selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FieldsConfig {
    /// Schema paths to keep; `None` keeps the default selection
    /// (essential and recommended fields)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Vec<String>>,
}

impl FieldsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(selected) = &self.selected {
            if selected.iter().any(|p| p.trim().is_empty()) {
                return Err("fields.selected entries cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

/// Contributor identity and licensing, copied verbatim into the prep report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorConfig {
    /// Stable pseudonymous contributor identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributor_id: Option<String>,

    /// License the contribution is offered under
    #[serde(default = "default_license")]
    pub license: String,

    /// Contributor's stated preference about AI training use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_preference: Option<String>,

    /// Free-text rights statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights_statement: Option<String>,
}

impl Default for ContributorConfig {
    fn default() -> Self {
        Self {
            contributor_id: None,
            license: default_license(),
            ai_preference: None,
            rights_statement: None,
        }
    }
}

impl ContributorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.license.trim().is_empty() {
            return Err("contributor.license cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: daily, hourly, or never
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" | "never" => Ok(()),
            other => Err(format!(
                "logging.local_rotation must be daily, hourly, or never (got '{other}')"
            )),
        }
    }
}

fn default_app_name() -> String {
    "argus".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_entropy_min_length() -> usize {
    20
}

// The maximum entropy of a 20-char candidate is log2(20) ~= 4.32 bits, so
// the threshold has to sit below that to ever fire on short keys.
fn default_entropy_threshold() -> f64 {
    3.8
}

fn default_license() -> String {
    "CC-BY-4.0".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArgusConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_are_conservative() {
        let redaction = RedactionConfig::default();
        assert!(redaction.redact_secrets);
        assert!(redaction.redact_pii);
        assert!(redaction.redact_paths);
        assert!(redaction.enable_high_entropy);
        assert!(!redaction.mask_code_blocks);
    }

    #[test]
    fn test_empty_toml_deserializes_to_defaults() {
        let config: ArgusConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert!(config.redaction.redact_secrets);
        assert!(config.fields.selected.is_none());
        assert_eq!(config.contributor.license, "CC-BY-4.0");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = ArgusConfig {
            application: ApplicationConfig {
                log_level: "verbose".to_string(),
                ..ApplicationConfig::default()
            },
            ..ArgusConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_entropy_threshold_bounds() {
        let config = RedactionConfig {
            entropy_threshold: 9.5,
            ..RedactionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_custom_regex_entry_rejected() {
        let config = RedactionConfig {
            custom_regex: vec!["  ".to_string()],
            ..RedactionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let config = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_keys() {
        let toml = r#"
[redaction]
redact_paths = false
entropy_threshold = 4.0
"#;
        let config: ArgusConfig = toml::from_str(toml).unwrap();
        assert!(!config.redaction.redact_paths);
        assert!(config.redaction.redact_secrets);
        assert_eq!(config.redaction.entropy_threshold, 4.0);
    }
}
