//! Field schema catalogue
//!
//! This module defines the static catalogue of known session field paths.
//! Each entry carries a selection category and an applicability scope, and
//! drives both the default selection offered to contributors and the strip
//! sets enforced by the selector.
//!
//! Paths use dot-separated segments with `[]` marking array traversal
//! (`messages[].role`) and `*` matching exactly one segment.

use crate::domain::SourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selection category for a known field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Selected by default; removing it makes the session near-useless
    Essential,
    /// Selected by default; useful context
    Recommended,
    /// Not selected by default; contributor opt-in
    Optional,
    /// Not selected by default; known to carry private detail
    Strip,
    /// Unconditionally removed regardless of selection
    AlwaysStrip,
}

/// Applicability scope of a schema entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// Applies to every source kind
    All,
    /// Applies to one source kind only
    Source(SourceKind),
}

impl FieldScope {
    fn applies_to(&self, source: SourceKind) -> bool {
        match self {
            FieldScope::All => true,
            FieldScope::Source(kind) => *kind == source,
        }
    }
}

/// A known field path with its selection metadata
#[derive(Debug, Clone)]
pub struct FieldSchema {
    /// Dot/bracket path pattern (`*` wildcard per segment)
    pub path: &'static str,
    /// Selection category
    pub category: FieldCategory,
    /// Which source kinds the entry applies to
    pub scope: FieldScope,
    /// Known to carry large or sensitive payloads; biases UI defaults only
    pub content_heavy: bool,
    /// Short human description shown in the selection UI
    pub description: &'static str,
}

const fn field(
    path: &'static str,
    category: FieldCategory,
    scope: FieldScope,
    content_heavy: bool,
    description: &'static str,
) -> FieldSchema {
    FieldSchema {
        path,
        category,
        scope,
        content_heavy,
        description,
    }
}

/// Static catalogue of known field paths
///
/// New collector fields must be added here before they can be offered for
/// selection; unknown fields are stripped by whitelist mode by default.
pub static FIELD_SCHEMAS: &[FieldSchema] = &[
    // Applies to every source kind
    field(
        "schema_version",
        FieldCategory::Optional,
        FieldScope::All,
        false,
        "Collector schema version",
    ),
    field(
        "signature",
        FieldCategory::AlwaysStrip,
        FieldScope::All,
        false,
        "Cryptographic signature over the raw export",
    ),
    field(
        "attachments[].data",
        FieldCategory::AlwaysStrip,
        FieldScope::All,
        true,
        "Embedded binary attachment payload",
    ),
    field(
        "environment",
        FieldCategory::AlwaysStrip,
        FieldScope::All,
        true,
        "Captured process environment (may contain credentials)",
    ),
    // Hook sessions
    field(
        "session.id",
        FieldCategory::Essential,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Session identifier",
    ),
    field(
        "session.started_at",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Session start timestamp",
    ),
    field(
        "session.ended_at",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Session end timestamp",
    ),
    field(
        "session.model",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Model identifier used for the session",
    ),
    field(
        "session.cwd",
        FieldCategory::Strip,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Working directory (private filesystem path)",
    ),
    field(
        "session.git_branch",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Git branch name at session start",
    ),
    field(
        "session.auth_token",
        FieldCategory::AlwaysStrip,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Daemon auth token",
    ),
    field(
        "tool_usages[].tool_name",
        FieldCategory::Essential,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Name of the invoked tool",
    ),
    field(
        "tool_usages[].timestamp",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Tool invocation timestamp",
    ),
    field(
        "tool_usages[].duration_ms",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::HookSession),
        false,
        "Tool runtime in milliseconds",
    ),
    field(
        "tool_usages[].parameters",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::HookSession),
        true,
        "Tool input parameters",
    ),
    field(
        "tool_usages[].result",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::HookSession),
        true,
        "Tool output",
    ),
    // Chat transcripts
    field(
        "messages[].role",
        FieldCategory::Essential,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Speaker role (user/assistant/system)",
    ),
    field(
        "messages[].content",
        FieldCategory::Essential,
        FieldScope::Source(SourceKind::ChatTranscript),
        true,
        "Message text",
    ),
    field(
        "messages[].timestamp",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Message timestamp",
    ),
    field(
        "messages[].model",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Model that produced the message",
    ),
    field(
        "messages[].usage",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Token usage accounting",
    ),
    field(
        "messages[].attachments",
        FieldCategory::Strip,
        FieldScope::Source(SourceKind::ChatTranscript),
        true,
        "Per-message attachments",
    ),
    field(
        "summary",
        FieldCategory::Recommended,
        FieldScope::Source(SourceKind::ChatTranscript),
        true,
        "Conversation summary",
    ),
    field(
        "metadata.client_version",
        FieldCategory::Optional,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Client application version",
    ),
    field(
        "metadata.os",
        FieldCategory::Strip,
        FieldScope::Source(SourceKind::ChatTranscript),
        false,
        "Operating system fingerprint",
    ),
];

/// Schema entries applicable to `source` (scoped to it or to all sources)
pub fn fields_for_source(source: SourceKind) -> Vec<&'static FieldSchema> {
    FIELD_SCHEMAS
        .iter()
        .filter(|f| f.scope.applies_to(source))
        .collect()
}

/// Default selection for `source`: essential and recommended paths
pub fn default_selected_fields(source: SourceKind) -> Vec<String> {
    fields_for_source(source)
        .into_iter()
        .filter(|f| {
            matches!(
                f.category,
                FieldCategory::Essential | FieldCategory::Recommended
            )
        })
        .map(|f| f.path.to_string())
        .collect()
}

/// All always-strip paths, across every scope
///
/// Always-strip is enforced for every source kind: a path tagged for one
/// kind is still unconditionally removed when it shows up elsewhere.
pub fn always_strip_paths() -> BTreeSet<String> {
    FIELD_SCHEMAS
        .iter()
        .filter(|f| f.category == FieldCategory::AlwaysStrip)
        .map(|f| f.path.to_string())
        .collect()
}

/// Build the blacklist strip set for a selection
///
/// The result contains every always-strip path plus every schema path for
/// `source` that the caller did not select.
pub fn build_strip_set(selected: &BTreeSet<String>, source: SourceKind) -> BTreeSet<String> {
    let mut strip = always_strip_paths();
    for schema in fields_for_source(source) {
        if schema.category == FieldCategory::AlwaysStrip {
            continue;
        }
        if !selected.contains(schema.path) {
            strip.insert(schema.path.to_string());
        }
    }
    strip
}
