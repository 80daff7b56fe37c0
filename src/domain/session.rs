//! Session domain model
//!
//! This module defines the raw and prepared session types flowing through the
//! preparation pipeline, plus the source classification decided once at
//! ingestion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of session source, decided once at ingestion
///
/// Classification is structural: the shape of the raw data determines the
/// kind, with the session's own label as a fallback. Every downstream
/// consumer (field schema lookup, batch grouping) works from this value
/// instead of re-probing the JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Daemon hook session: top-level `session` object plus `tool_usages`
    HookSession,
    /// Chat transcript: top-level `messages` array
    ChatTranscript,
    /// Shape not recognized and label did not resolve
    Unknown,
}

impl SourceKind {
    /// Stable string label used in reports and schema scoping
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::HookSession => "hook_session",
            SourceKind::ChatTranscript => "chat_transcript",
            SourceKind::Unknown => "unknown",
        }
    }

    /// Parse a source label, falling back to `Unknown`
    pub fn from_label(label: &str) -> Self {
        match label {
            "hook_session" | "hooks" | "daemon" => SourceKind::HookSession,
            "chat_transcript" | "transcript" | "chat" => SourceKind::ChatTranscript,
            _ => SourceKind::Unknown,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a raw session's data by structural probe
///
/// `session` + `tool_usages` keys mark a hook session; a `messages` array
/// marks a chat transcript; otherwise the declared label decides.
pub fn classify_source(data: &serde_json::Value, declared: &str) -> SourceKind {
    if let Some(obj) = data.as_object() {
        if obj.contains_key("session") && obj.contains_key("tool_usages") {
            return SourceKind::HookSession;
        }
        if obj.get("messages").map(|m| m.is_array()).unwrap_or(false) {
            return SourceKind::ChatTranscript;
        }
    }
    SourceKind::from_label(declared)
}

/// A raw session transcript as exported by the collector
///
/// `data` is arbitrary nested JSON; nothing about its shape is trusted
/// until classification and field stripping have run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSession {
    /// Collector-assigned session identifier
    pub session_id: String,

    /// Declared source label (used as a classification fallback)
    pub source: String,

    /// Arbitrary nested session payload
    pub data: serde_json::Value,

    /// Last modification time of the source file, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime_utc: Option<DateTime<Utc>>,

    /// Filesystem path the session was read from, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path_hint: Option<String>,
}

impl RawSession {
    /// Creates a new raw session with just an id, source label and data
    pub fn new(
        session_id: impl Into<String>,
        source: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            source: source.into(),
            data,
            mtime_utc: None,
            source_path_hint: None,
        }
    }

    /// Sets the source path hint
    pub fn with_source_path_hint(mut self, hint: impl Into<String>) -> Self {
        self.source_path_hint = Some(hint.into());
        self
    }

    /// Sets the source file mtime
    pub fn with_mtime(mut self, mtime: DateTime<Utc>) -> Self {
        self.mtime_utc = Some(mtime);
        self
    }
}

/// Per-session preparation state
///
/// The pipeline walks each session through these states in order. `Blocked`
/// is terminal for the batch: export must not proceed until redaction
/// settings change and the batch is reprocessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationState {
    Raw,
    FieldStripped,
    Sanitized,
    Scored,
    Ready,
    Blocked,
}

/// A session after field stripping, sanitization and scoring
///
/// The raw data is retained for diffing in review UIs; the sanitized data is
/// derived and never mutated afterwards. The content hash fingerprints the
/// ORIGINAL raw data, so it identifies the literal source regardless of
/// later redaction-config changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedSession {
    /// Collector-assigned session identifier
    pub session_id: String,

    /// Classified source kind
    pub source: SourceKind,

    /// Original raw payload (kept for before/after diffing)
    pub raw_data: serde_json::Value,

    /// Field-stripped, sanitized payload
    pub sanitized_data: serde_json::Value,

    /// Heuristic content-quality score (0-100)
    pub score: u32,

    /// Character count of the sanitized payload
    pub char_count: usize,

    /// SHA-256 of the original raw data, hex-encoded
    pub raw_sha256: String,

    /// Username-redacted source path hint, if one was provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path_hint: Option<String>,

    /// Final state after the pipeline ran
    pub state: PreparationState,
}

/// Redact the username component of a filesystem path hint
///
/// `/Users/alice/project/log.jsonl` and `/home/alice/...` become
/// `/Users/<USER>/...`; Windows `C:\Users\alice\...` is handled too.
/// Paths without a recognizable home prefix pass through unchanged.
pub fn redact_username_in_path(path: &str) -> String {
    let unix_prefixes = ["/Users/", "/home/"];
    for prefix in unix_prefixes {
        if let Some(rest) = path.strip_prefix(prefix) {
            let tail = match rest.find('/') {
                Some(idx) => &rest[idx..],
                None => "",
            };
            return format!("{prefix}<USER>{tail}");
        }
    }

    // Windows variant, either slash direction after the drive letter
    let lower = path.to_lowercase();
    if let Some(pos) = lower.find(":\\users\\").or_else(|| lower.find(":/users/")) {
        let sep = path.as_bytes()[pos + 1] as char;
        let user_start = pos + ":\\users\\".len();
        let rest = &path[user_start..];
        let tail = match rest.find(['\\', '/']) {
            Some(idx) => &rest[idx..],
            None => "",
        };
        let drive = &path[..pos + 1];
        return format!("{drive}{sep}Users{sep}<USER>{tail}");
    }

    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_hook_session() {
        let data = json!({
            "session": {"id": "abc"},
            "tool_usages": []
        });
        assert_eq!(classify_source(&data, "whatever"), SourceKind::HookSession);
    }

    #[test]
    fn test_classify_chat_transcript() {
        let data = json!({
            "messages": [{"role": "user", "content": "hi"}]
        });
        assert_eq!(classify_source(&data, ""), SourceKind::ChatTranscript);
    }

    #[test]
    fn test_classify_falls_back_to_label() {
        let data = json!({"other": true});
        assert_eq!(classify_source(&data, "transcript"), SourceKind::ChatTranscript);
        assert_eq!(classify_source(&data, "hooks"), SourceKind::HookSession);
        assert_eq!(classify_source(&data, "mystery"), SourceKind::Unknown);
    }

    #[test]
    fn test_messages_must_be_array() {
        // A "messages" key holding a non-array does not make a transcript
        let data = json!({"messages": "none"});
        assert_eq!(classify_source(&data, ""), SourceKind::Unknown);
    }

    #[test]
    fn test_source_kind_labels_round_trip() {
        for kind in [
            SourceKind::HookSession,
            SourceKind::ChatTranscript,
            SourceKind::Unknown,
        ] {
            assert_eq!(SourceKind::from_label(kind.label()), kind);
        }
    }

    #[test]
    fn test_redact_username_unix() {
        assert_eq!(
            redact_username_in_path("/Users/alice/dev/session.jsonl"),
            "/Users/<USER>/dev/session.jsonl"
        );
        assert_eq!(
            redact_username_in_path("/home/bob/.local/share/log"),
            "/home/<USER>/.local/share/log"
        );
    }

    #[test]
    fn test_redact_username_windows() {
        assert_eq!(
            redact_username_in_path("C:\\Users\\carol\\AppData\\log.jsonl"),
            "C:\\Users\\<USER>\\AppData\\log.jsonl"
        );
    }

    #[test]
    fn test_redact_username_no_home_prefix() {
        assert_eq!(redact_username_in_path("/var/log/app.log"), "/var/log/app.log");
    }

    #[test]
    fn test_raw_session_builder_helpers() {
        let session = RawSession::new("s-1", "chat", json!({"messages": []}))
            .with_source_path_hint("/Users/alice/s.jsonl");
        assert_eq!(session.session_id, "s-1");
        assert_eq!(
            session.source_path_hint.as_deref(),
            Some("/Users/alice/s.jsonl")
        );
    }
}
