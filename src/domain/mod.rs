//! Domain models and types for Argus.
//!
//! This module contains the core domain models, types, and business rules
//! shared across the preparation pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Session models** ([`RawSession`], [`PreparedSession`])
//! - **Source classification** ([`SourceKind`], [`classify_source`])
//! - **Error types** ([`ArgusError`], [`PatternError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ArgusError>`]:
//!
//! ```rust
//! use argus::domain::{ArgusError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(ArgusError::Validation("Invalid input".to_string()))
//! }
//! ```

pub mod errors;
pub mod result;
pub mod session;

// Re-export commonly used types for convenience
pub use errors::{ArgusError, PatternError};
pub use result::Result;
pub use session::{
    classify_source, redact_username_in_path, PreparationState, PreparedSession, RawSession,
    SourceKind,
};
