//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::sample_config;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "argus.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Argus configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your redaction preferences", self.output);
                println!("  2. Validate configuration: argus validate-config");
                println!("  3. Prepare sessions: argus prepare <session.json>...");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("argus.toml");
        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().unwrap(), 0);
        let config = crate::config::load_config(&path).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("argus.toml");
        std::fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);

        let forced = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(forced.execute().unwrap(), 0);
    }
}
