//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ArgusConfig;
use crate::domain::errors::ArgusError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ArgusConfig
/// 4. Applies environment variable overrides (ARGUS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsing fails, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use argus::config::loader::load_config;
///
/// let config = load_config("argus.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ArgusConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ArgusError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ArgusError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ArgusConfig = toml::from_str(&contents)
        .map_err(|e| ArgusError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ArgusError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. A referenced but unset variable is an
/// error; all missing names are reported together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var regex is valid");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ArgusError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the ARGUS_* prefix
///
/// Variables follow the pattern ARGUS_<SECTION>_<KEY>, for example
/// ARGUS_REDACTION_REDACT_SECRETS or ARGUS_APPLICATION_LOG_LEVEL.
fn apply_env_overrides(config: &mut ArgusConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("ARGUS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Redaction overrides
    if let Ok(val) = std::env::var("ARGUS_REDACTION_REDACT_SECRETS") {
        config.redaction.redact_secrets = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_REDACT_PII") {
        config.redaction.redact_pii = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_REDACT_PATHS") {
        config.redaction.redact_paths = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_MASK_CODE_BLOCKS") {
        config.redaction.mask_code_blocks = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_ENABLE_HIGH_ENTROPY") {
        config.redaction.enable_high_entropy = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_ENTROPY_THRESHOLD") {
        if let Ok(threshold) = val.parse() {
            config.redaction.entropy_threshold = threshold;
        }
    }
    if let Ok(val) = std::env::var("ARGUS_REDACTION_ENTROPY_MIN_LENGTH") {
        if let Ok(min_length) = val.parse() {
            config.redaction.entropy_min_length = min_length;
        }
    }

    // Contributor overrides
    if let Ok(val) = std::env::var("ARGUS_CONTRIBUTOR_CONTRIBUTOR_ID") {
        config.contributor.contributor_id = Some(val);
    }
    if let Ok(val) = std::env::var("ARGUS_CONTRIBUTOR_LICENSE") {
        config.contributor.license = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ARGUS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ARGUS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

/// A commented sample configuration, written by `argus init`
pub fn sample_config() -> String {
    r#"# Argus configuration.
#
# Values of the form ${VAR} are substituted from the environment at load
# time. Any key can also be overridden with an ARGUS_<SECTION>_<KEY>
# environment variable.

[application]
name = "argus"
log_level = "info"

[redaction]
# Every category defaults to on. Turning one off is an explicit choice.
redact_secrets = true
redact_pii = true
redact_paths = true
# Replace entire fenced code blocks with <CODE_BLOCK_n>.
mask_code_blocks = false
# Extra patterns applied after the built-in catalogue.
custom_regex = []
# Statistical detection of secrets no pattern knows about.
enable_high_entropy = true
entropy_min_length = 20
entropy_threshold = 3.8

[fields]
# Omit to keep the default selection (essential and recommended fields).
# selected = ["session.id", "messages.role", "messages.content"]

[contributor]
# contributor_id = "anon-1234"
license = "CC-BY-4.0"
# ai_preference = "allow-training"

[logging]
local_enabled = true
local_path = "logs"
local_rotation = "daily"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("ARGUS_TEST_SUBST_VAR", "anon-42");
        let input = "contributor_id = \"${ARGUS_TEST_SUBST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "contributor_id = \"anon-42\"\n");
        std::env::remove_var("ARGUS_TEST_SUBST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("ARGUS_TEST_MISSING_VAR");
        let input = "contributor_id = \"${ARGUS_TEST_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# uses ${ARGUS_NOT_SET_ANYWHERE}\nlog_level = \"info\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${ARGUS_NOT_SET_ANYWHERE}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
name = "argus"
log_level = "debug"

[redaction]
redact_paths = false

[contributor]
license = "CC0-1.0"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert!(!config.redaction.redact_paths);
        assert_eq!(config.contributor.license, "CC0-1.0");
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[application]\nlog_level = \"loud\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_sample_config_parses_and_validates() {
        let config: ArgusConfig = toml::from_str(&sample_config()).unwrap();
        assert!(config.validate().is_ok());
    }
}
