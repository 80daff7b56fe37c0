//! Session preparation
//!
//! The pipeline walks each session through field stripping, sanitization,
//! previewing, scoring and hashing, then a batch-level residue audit. The
//! [`report`] submodule builds the stable prep report persisted into
//! exported bundles.

pub mod pipeline;
pub mod preview;
pub mod report;
pub mod scoring;

pub use pipeline::{PreparationPipeline, PreparationResult, SessionPreviews, SummaryStats};
pub use preview::build_preview;
pub use report::{build_prep_report, PrepReport};
pub use scoring::{ScoringEngine, ScoringWeights};
