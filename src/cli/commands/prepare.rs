//! Prepare command implementation
//!
//! Reads raw session files, runs the preparation pipeline, prints a
//! review summary, and optionally writes the sanitized sessions and the
//! prep report. A residue block refuses to write anything and exits with
//! code 3.

use crate::config::load_config;
use crate::core::prepare::{build_prep_report, PreparationPipeline};
use crate::domain::RawSession;
use chrono::{DateTime, Utc};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the prepare command
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Raw session JSON files to prepare
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Write the prep report JSON to this path
    #[arg(short, long)]
    pub report: Option<String>,

    /// Write sanitized sessions into this directory, one file per session
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

impl PrepareArgs {
    /// Execute the prepare command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, inputs = self.inputs.len(), "Preparing sessions");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let mut sessions = Vec::with_capacity(self.inputs.len());
        for input in &self.inputs {
            match load_session(input) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    println!("❌ Failed to read session file: {input}");
                    println!("   Error: {e}");
                    return Ok(2);
                }
            }
        }

        crate::log_prepare_start!(sessions.len());
        let pipeline = PreparationPipeline::new(config.clone())?;
        let result = pipeline.prepare_sessions(&sessions)?;

        println!("🔒 Prepared {} session(s)", result.summary.session_count);
        println!();
        for session in &result.sessions {
            println!(
                "  {} [{}] score {} ({} chars, sha256 {})",
                session.session_id,
                session.source,
                session.score,
                session.char_count,
                &session.raw_sha256[..12]
            );
        }
        println!();
        println!("Redaction Summary:");
        println!("  Total redactions: {}", result.redaction.total_redactions);
        for (category, count) in &result.redaction.counts_by_category {
            println!("  {category}: {count}");
        }
        println!("  Fields stripped: {}", result.summary.fields_stripped);

        for warning in &result.redaction.warnings {
            println!("⚠️  {warning}");
        }
        for warning in &result.residue.warnings {
            println!("⚠️  Residue: {warning}");
        }

        if result.blocked {
            println!();
            println!("❌ Residue check found blocking material (private key marker).");
            println!("   Nothing was written. Adjust redaction settings and re-run.");
            return Ok(3);
        }

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            for session in &result.sessions {
                let path = Path::new(dir).join(format!("{}.json", session.session_id));
                fs::write(&path, serde_json::to_string_pretty(&session.sanitized_data)?)?;
            }
            println!("✅ Sanitized sessions written to {dir}");
        }

        if let Some(report_path) = &self.report {
            let report = build_prep_report(&config, &result);
            fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
            println!("✅ Prep report written to {report_path}");
        }

        println!();
        println!("✅ Batch is ready for review");
        Ok(0)
    }
}

/// Load one raw session from a JSON file
///
/// Files either carry the full `RawSession` envelope or a bare data
/// payload; bare payloads get an envelope derived from the filename and
/// file metadata.
fn load_session(path: &str) -> anyhow::Result<RawSession> {
    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    let mut session = if value.get("session_id").is_some() && value.get("data").is_some() {
        serde_json::from_value(value)?
    } else {
        let stem = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("session")
            .to_string();
        RawSession::new(stem, "unknown", value)
    };

    if session.source_path_hint.is_none() {
        session.source_path_hint = Some(path.to_string());
    }
    if session.mtime_utc.is_none() {
        if let Ok(meta) = fs::metadata(path) {
            if let Ok(mtime) = meta.modified() {
                session.mtime_utc = Some(DateTime::<Utc>::from(mtime));
            }
        }
    }

    Ok(session)
}
