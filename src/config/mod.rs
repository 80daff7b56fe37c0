//! Configuration management for Argus.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Argus uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting (an empty file is a valid config)
//! - Environment variable overrides (`ARGUS_<SECTION>_<KEY>`)
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use argus::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("argus.toml")?;
//!
//! if config.redaction.mask_code_blocks {
//!     println!("code blocks will be masked");
//! }
//! println!("license: {}", config.contributor.license);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [redaction]
//! redact_secrets = true
//! custom_regex = ["internal-ticket-\\d+"]
//!
//! [contributor]
//! contributor_id = "${ARGUS_CONTRIBUTOR_ID}"
//! license = "CC-BY-4.0"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, sample_config};
pub use schema::{
    ApplicationConfig, ArgusConfig, ContributorConfig, FieldsConfig, LoggingConfig,
    RedactionConfig,
};
