//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Argus using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Argus - session transcript preparation tool
#[derive(Parser, Debug)]
#[command(name = "argus")]
#[command(version, about, long_about = None)]
#[command(author = "Argus Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "argus.toml", env = "ARGUS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ARGUS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare raw session transcripts for donation
    Prepare(commands::prepare::PrepareArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// List or lint the redaction pattern catalogue
    Patterns(commands::patterns::PatternsArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_prepare() {
        let cli = Cli::parse_from(["argus", "prepare", "session.json"]);
        assert_eq!(cli.config, "argus.toml");
        assert!(matches!(cli.command, Commands::Prepare(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["argus", "--config", "custom.toml", "prepare", "s.json"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["argus", "--log-level", "debug", "prepare", "s.json"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["argus", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_patterns_lint() {
        let cli = Cli::parse_from(["argus", "patterns", "--lint"]);
        match cli.command {
            Commands::Patterns(args) => assert!(args.lint),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["argus", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
