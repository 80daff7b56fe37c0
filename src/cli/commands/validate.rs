//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Argus configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Application: {}", config.application.name);
                println!("  Log Level: {}", config.application.log_level);
                println!("  Redact Secrets: {}", config.redaction.redact_secrets);
                println!("  Redact PII: {}", config.redaction.redact_pii);
                println!("  Redact Paths: {}", config.redaction.redact_paths);
                println!("  Mask Code Blocks: {}", config.redaction.mask_code_blocks);
                println!(
                    "  High-Entropy Detection: {} (min {}, threshold {})",
                    config.redaction.enable_high_entropy,
                    config.redaction.entropy_min_length,
                    config.redaction.entropy_threshold
                );
                println!(
                    "  Custom Patterns: {}",
                    config.redaction.custom_regex.len()
                );
                match &config.fields.selected {
                    Some(selected) => println!("  Selected Fields: {}", selected.len()),
                    None => println!("  Selected Fields: default (essential + recommended)"),
                }
                println!("  License: {}", config.contributor.license);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }

    #[test]
    fn test_validate_missing_config_is_exit_code_2() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-not-a-file.toml").unwrap();
        assert_eq!(code, 2);
    }
}
