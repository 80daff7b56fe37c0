//! Patterns command implementation
//!
//! Lists the redaction pattern catalogue, or lints it with the
//! authoring-time validator. Linting is where overbreadth and backtracking
//! findings surface; the sanitization hot path never pays for them.

use crate::sanitize::{validate_definition, PatternRegistry, ValidationIssue};
use clap::Args;

/// Arguments for the patterns command
#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Lint the catalogue instead of listing it
    #[arg(long)]
    pub lint: bool,

    /// Use an alternate catalogue file instead of the built-in one
    #[arg(short, long)]
    pub file: Option<String>,
}

impl PatternsArgs {
    /// Execute the patterns command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let registry = match &self.file {
            Some(path) => PatternRegistry::from_file(path)?,
            None => PatternRegistry::builtin()?,
        };

        println!("📋 Pattern catalogue version {}", registry.version());
        println!();

        if self.lint {
            self.lint_catalogue(&registry)
        } else {
            self.list_catalogue(&registry)
        }
    }

    fn list_catalogue(&self, registry: &PatternRegistry) -> anyhow::Result<i32> {
        for (name, def) in registry.definitions() {
            let status = if def.enabled { "enabled" } else { "disabled" };
            println!(
                "  {:<26} {:<12} <{}_n>  [{}]",
                name,
                def.category.label(),
                def.placeholder,
                status
            );
            println!("      {}", def.description);
        }
        println!();
        println!("{} pattern(s)", registry.definitions().len());
        Ok(0)
    }

    fn lint_catalogue(&self, registry: &PatternRegistry) -> anyhow::Result<i32> {
        let mut error_count = 0;
        let mut advisory_count = 0;

        for (name, def) in registry.definitions() {
            for issue in validate_definition(name, def) {
                match issue {
                    ValidationIssue::Error(msg) => {
                        println!("❌ {msg}");
                        error_count += 1;
                    }
                    ValidationIssue::Advisory(msg) => {
                        println!("⚠️  {msg}");
                        advisory_count += 1;
                    }
                }
            }
        }

        println!();
        if error_count > 0 {
            println!("❌ Lint failed: {error_count} error(s), {advisory_count} advisory finding(s)");
            Ok(2)
        } else {
            println!("✅ Lint passed: 0 errors, {advisory_count} advisory finding(s)");
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_builtin_catalogue_passes() {
        let args = PatternsArgs {
            lint: true,
            file: None,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }

    #[test]
    fn test_list_builtin_catalogue() {
        let args = PatternsArgs {
            lint: false,
            file: None,
        };
        assert_eq!(args.execute().unwrap(), 0);
    }

    #[test]
    fn test_missing_catalogue_file_errors() {
        let args = PatternsArgs {
            lint: false,
            file: Some("no-such-catalogue.toml".to_string()),
        };
        assert!(args.execute().is_err());
    }
}
