//! Field selection and stripping
//!
//! This module applies strip sets (blacklist) or keep sets (whitelist)
//! against nested JSON. Both modes share one normalized path representation:
//! dot-separated segments, `[]` as the array-traversal marker, `*` matching
//! exactly one segment. Trees are rebuilt immutably; input is never mutated.
//!
//! Whitelist mode is the primary mode used by the preparation pipeline.
//! Its keep logic preserves the containers needed to reach a deep selection
//! and pulls whole subtrees under selected *leaf* paths, while a selection
//! with a more specific sibling stays narrow.
//!
//! Failure semantics are fail-open toward stripping: a selected path that
//! matches nothing in the data is inert.

use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Normalize a field path for comparison
///
/// Removes `[]` array markers and stray dots: `messages[].role` becomes
/// `messages.role`, `a..b` becomes `a.b`.
pub fn normalize_path(path: &str) -> String {
    path.replace("[]", "")
        .split('.')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Segment-wise path match
///
/// `*` in the pattern matches exactly one actual segment; segment counts
/// must match exactly. Both sides are normalized first, so `[]` markers on
/// either side are transparent.
pub fn path_matches(actual: &str, pattern: &str) -> bool {
    let actual = normalize_path(actual);
    let pattern = normalize_path(pattern);

    let actual_segs: Vec<&str> = actual.split('.').collect();
    let pattern_segs: Vec<&str> = pattern.split('.').collect();

    if actual_segs.len() != pattern_segs.len() {
        return false;
    }

    actual_segs
        .iter()
        .zip(pattern_segs.iter())
        .all(|(a, p)| *p == "*" || a == p)
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn matches_any(path: &str, patterns: &BTreeSet<String>) -> bool {
    patterns.iter().any(|p| path_matches(path, p))
}

/// Blacklist stripping: drop every field whose path matches the strip set
///
/// Arrays recurse with the `[]` suffix on the parent path; fields that do
/// not match are recursed into, so a strip pattern can target any depth.
pub fn strip_fields(value: &Value, strip_set: &BTreeSet<String>) -> Value {
    strip_fields_at(value, "", strip_set)
}

fn strip_fields_at(value: &Value, path: &str, strip_set: &BTreeSet<String>) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, child) in map {
                let child_path = join_path(path, key);
                if matches_any(&child_path, strip_set) {
                    continue;
                }
                out.insert(key.clone(), strip_fields_at(child, &child_path, strip_set));
            }
            Value::Object(out)
        }
        Value::Array(arr) => {
            let elem_path = format!("{path}[]");
            Value::Array(
                arr.iter()
                    .map(|v| strip_fields_at(v, &elem_path, strip_set))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}

/// True iff no other keep entry refines `path` further
///
/// A leaf selection pulls its whole subtree; a selection with a more
/// specific entry beneath it does not.
pub fn is_leaf_path(path: &str, keep_set: &BTreeSet<String>) -> bool {
    let prefix = format!("{}.", normalize_path(path));
    !keep_set
        .iter()
        .any(|k| normalize_path(k).starts_with(&prefix))
}

/// Whitelist keep decision for one field path
///
/// Keep if the path is (a) an exact match for a keep entry, (b) a strict
/// ancestor of some keep entry (the container is needed to reach the
/// selection), or (c) a strict descendant of a keep entry that is a leaf.
pub fn should_keep_path(field_path: &str, keep_set: &BTreeSet<String>) -> bool {
    let normalized = normalize_path(field_path);

    for keep in keep_set {
        let keep_norm = normalize_path(keep);
        if normalized == keep_norm {
            return true;
        }
        if keep_norm.starts_with(&format!("{normalized}.")) {
            return true;
        }
        if normalized.starts_with(&format!("{keep_norm}.")) && is_leaf_path(keep, keep_set) {
            return true;
        }
    }

    false
}

/// Whitelist stripping: retain only selected paths and their structure
///
/// Always-strip patterns are evaluated first and drop the field
/// unconditionally, even when the keep set names it explicitly.
pub fn strip_fields_whitelist(
    value: &Value,
    keep_set: &BTreeSet<String>,
    always_strip: &BTreeSet<String>,
) -> Value {
    whitelist_at(value, "", keep_set, always_strip)
}

fn whitelist_at(
    value: &Value,
    path: &str,
    keep_set: &BTreeSet<String>,
    always_strip: &BTreeSet<String>,
) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, child) in map {
                let child_path = join_path(path, key);
                if matches_any(&child_path, always_strip) {
                    continue;
                }
                if !should_keep_path(&child_path, keep_set) {
                    continue;
                }
                out.insert(
                    key.clone(),
                    whitelist_at(child, &child_path, keep_set, always_strip),
                );
            }
            Value::Object(out)
        }
        Value::Array(arr) => {
            let elem_path = format!("{path}[]");
            Value::Array(
                arr.iter()
                    .map(|v| whitelist_at(v, &elem_path, keep_set, always_strip))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}
