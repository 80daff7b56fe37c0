//! Human-readable session previews
//!
//! The review UI shows a contributor what a session looks like before and
//! after sanitization. Previews are the concatenated string leaves of the
//! tree, truncated to a bounded length.

use crate::sanitize::collect_strings;
use serde_json::Value;

/// Default preview length in characters
pub const DEFAULT_PREVIEW_CHARS: usize = 2_000;

/// Build a truncated preview from the string leaves of a JSON tree
///
/// Leaves are joined in document order with newlines. Truncation is by
/// character, never mid-codepoint, with a trailing ellipsis marker.
pub fn build_preview(value: &Value, max_chars: usize) -> String {
    let mut strings = Vec::new();
    collect_strings(value, &mut strings);
    let joined = strings.join("\n");

    if joined.chars().count() <= max_chars {
        return joined;
    }

    let truncated: String = joined.chars().take(max_chars).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preview_joins_leaves_in_order() {
        let value = json!({"a": "first", "b": {"c": "second"}});
        assert_eq!(build_preview(&value, 100), "first\nsecond");
    }

    #[test]
    fn test_preview_skips_non_strings() {
        let value = json!({"n": 42, "s": "text", "b": true});
        assert_eq!(build_preview(&value, 100), "text");
    }

    #[test]
    fn test_preview_truncates_with_marker() {
        let value = json!({"s": "abcdefghij"});
        let preview = build_preview(&value, 4);
        assert_eq!(preview, "abcd...");
    }

    #[test]
    fn test_preview_truncation_respects_char_boundaries() {
        let value = json!({"s": "日本語のテキスト"});
        let preview = build_preview(&value, 3);
        assert_eq!(preview, "日本語...");
    }

    #[test]
    fn test_empty_tree_gives_empty_preview() {
        assert_eq!(build_preview(&json!({}), 100), "");
    }
}
