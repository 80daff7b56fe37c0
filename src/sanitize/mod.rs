//! Content sanitization
//!
//! Pattern-driven redaction with stable placeholders, entropy-based
//! detection of unknown secrets, and a final residue audit over sanitized
//! output.

pub mod entropy;
pub mod patterns;
pub mod report;
pub mod residue;
pub mod sanitizer;

pub use entropy::{shannon_entropy, EntropyDetector};
pub use patterns::{
    validate_definition, CompiledPattern, PatternCategory, PatternDefinition, PatternRegistry,
    PatternSet, ValidationIssue,
};
pub use report::{PlaceholderInfo, RedactionReport};
pub use residue::{collect_strings, ResidueCheckResult, ResidueChecker};
pub use sanitizer::Sanitizer;
