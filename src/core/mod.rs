//! Core preparation logic
//!
//! Content hashing and the session preparation pipeline.

pub mod hash;
pub mod prepare;

pub use hash::{calculate_checksum, calculate_checksum_bytes, manifest_hash};
pub use prepare::{build_prep_report, PreparationPipeline, PreparationResult, PrepReport};
