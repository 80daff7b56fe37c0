// Argus - Session Transcript Preparation Tool
// Copyright (c) 2026 Argus Contributors
// Licensed under the MIT License

//! # Argus - Privacy-Preserving Session Preparation
//!
//! Argus prepares developer session transcripts for donation: it strips
//! non-selected fields, redacts secrets and personal information with
//! stable placeholders, scores the remaining content, and audits the
//! result for residue before anything can be exported.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Selecting** fields against a typed schema (whitelist with
//!   always-strip enforcement)
//! - **Sanitizing** content with a versioned pattern catalogue, custom
//!   patterns, and Shannon-entropy detection of unknown secrets
//! - **Auditing** sanitized output with an independent residue checker
//!   that can veto the whole batch
//! - **Reporting** every redaction decision in a stable prep report
//!
//! ## Architecture
//!
//! Argus follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Preparation pipeline, scoring, hashing, prep report
//! - [`fields`] - Field schema catalogue and selection
//! - [`sanitize`] - Pattern catalogue, sanitizer, entropy, residue audit
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use argus::config::ArgusConfig;
//! use argus::core::prepare::PreparationPipeline;
//! use argus::domain::RawSession;
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ArgusConfig::default();
//!     let pipeline = PreparationPipeline::new(config)?;
//!
//!     let session = RawSession::new(
//!         "session-1",
//!         "chat",
//!         json!({"messages": [{"role": "user", "content": "hello"}]}),
//!     );
//!     let result = pipeline.prepare_session(&session)?;
//!
//!     if result.blocked {
//!         eprintln!("residue check vetoed the export");
//!     } else {
//!         println!("score: {}", result.sessions[0].score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Placeholder Identity
//!
//! Within one sanitizer's lifetime, the same literal secret always maps to
//! the same `<PREFIX_n>` placeholder, so referential structure survives
//! redaction. Batch preparation shares one sanitizer across sessions;
//! single-session preparation scopes identity to that call.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod fields;
pub mod logging;
pub mod sanitize;
