//! Domain error types
//!
//! This module defines the error hierarchy for Argus. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Argus error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ArgusError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern catalogue errors (bad definitions, uncompilable regex)
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Preparation pipeline errors
    #[error("Preparation error: {0}")]
    Preparation(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Pattern-catalogue-specific errors
///
/// Structural problems in a pattern definition surface here from the
/// authoring-time validator. They are never raised from the sanitization
/// hot path, where a bad custom regex degrades to a recorded warning.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Catalogue file could not be read
    #[error("Failed to read pattern catalogue: {0}")]
    ReadFailed(String),

    /// Catalogue TOML could not be parsed
    #[error("Failed to parse pattern catalogue: {0}")]
    ParseFailed(String),

    /// A definition is missing a required field
    #[error("Pattern '{name}' is missing required field: {field}")]
    MissingField { name: String, field: String },

    /// A regex source in a definition does not compile
    #[error("Pattern '{name}' has invalid regex: {source_str}")]
    InvalidRegex { name: String, source_str: String },

    /// A definition names an unknown category
    #[error("Pattern '{name}' has unknown category: {category}")]
    UnknownCategory { name: String, category: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for ArgusError {
    fn from(err: std::io::Error) -> Self {
        ArgusError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ArgusError {
    fn from(err: serde_json::Error) -> Self {
        ArgusError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ArgusError {
    fn from(err: toml::de::Error) -> Self {
        ArgusError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Regex compilation failures outside the pattern catalogue (residue rules)
impl From<regex::Error> for ArgusError {
    fn from(err: regex::Error) -> Self {
        ArgusError::Other(format!("Regex error: {err}"))
    }
}

impl From<fancy_regex::Error> for ArgusError {
    fn from(err: fancy_regex::Error) -> Self {
        ArgusError::Other(format!("Regex error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argus_error_display() {
        let err = ArgusError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_pattern_error_conversion() {
        let pattern_err = PatternError::InvalidRegex {
            name: "aws_key".to_string(),
            source_str: "([unclosed".to_string(),
        };
        let argus_err: ArgusError = pattern_err.into();
        assert!(matches!(argus_err, ArgusError::Pattern(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let argus_err: ArgusError = io_err.into();
        assert!(matches!(argus_err, ArgusError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let argus_err: ArgusError = json_err.into();
        assert!(matches!(argus_err, ArgusError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let argus_err: ArgusError = toml_err.into();
        assert!(matches!(argus_err, ArgusError::Configuration(_)));
        assert!(argus_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_argus_error_implements_std_error() {
        let err = ArgusError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
