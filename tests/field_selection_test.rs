//! Integration tests for schema-driven field selection

use argus::domain::SourceKind;
use argus::fields::{
    always_strip_paths, build_strip_set, default_selected_fields, fields_for_source, strip_fields,
    strip_fields_whitelist,
};
use serde_json::json;
use std::collections::BTreeSet;

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_whitelist_keeps_only_leaf_selection() {
    // Selection containing only leaf paths retains exactly those leaves
    // plus the containers needed to reach them
    let data = json!({
        "messages": [
            {"role": "user", "content": "hi", "usage": {"input": 10}},
            {"role": "assistant", "content": "yo", "usage": {"input": 20}}
        ],
        "metadata": {"os": "linux"}
    });
    let keep = set(&["messages[].role", "messages[].content"]);

    let out = strip_fields_whitelist(&data, &keep, &BTreeSet::new());

    assert_eq!(
        out,
        json!({
            "messages": [
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "yo"}
            ]
        })
    );
}

#[test]
fn test_always_strip_wins_over_explicit_keep() {
    let data = json!({
        "environment": {"AWS_SECRET_ACCESS_KEY": "shhh"},
        "summary": "a session"
    });
    let keep = set(&["environment", "summary"]);

    let out = strip_fields_whitelist(&data, &keep, &always_strip_paths());

    assert!(out.get("environment").is_none());
    assert_eq!(out["summary"], "a session");
}

#[test]
fn test_default_selection_differs_by_source() {
    let chat = default_selected_fields(SourceKind::ChatTranscript);
    let hook = default_selected_fields(SourceKind::HookSession);

    assert!(chat.contains(&"messages[].content".to_string()));
    assert!(!chat.contains(&"tool_usages[].tool_name".to_string()));
    assert!(hook.contains(&"tool_usages[].tool_name".to_string()));
    assert!(!hook.contains(&"messages[].content".to_string()));
}

#[test]
fn test_default_selection_never_contains_strip_categories() {
    for source in [
        SourceKind::HookSession,
        SourceKind::ChatTranscript,
        SourceKind::Unknown,
    ] {
        let selected = default_selected_fields(source);
        assert!(!selected.contains(&"session.cwd".to_string()));
        assert!(!selected.contains(&"environment".to_string()));
        assert!(!selected.contains(&"session.auth_token".to_string()));
    }
}

#[test]
fn test_blacklist_strip_set_covers_unselected_schema_paths() {
    let selected = set(&["session.id"]);
    let strip = build_strip_set(&selected, SourceKind::HookSession);

    assert!(!strip.contains("session.id"));
    assert!(strip.contains("session.cwd"));
    assert!(strip.contains("tool_usages[].result"));
    // always-strip is present regardless of selection
    assert!(strip.contains("environment"));
}

#[test]
fn test_blacklist_and_whitelist_agree_on_hook_session() {
    let data = json!({
        "session": {"id": "s1", "cwd": "/home/u/p", "model": "m-1"},
        "tool_usages": [{"tool_name": "bash", "result": "output"}],
        "environment": {"HOME": "/home/u"}
    });
    let selected = set(&["session.id", "session.model", "tool_usages[].tool_name"]);

    let black = strip_fields(&data, &build_strip_set(&selected, SourceKind::HookSession));
    let white = strip_fields_whitelist(&data, &selected, &always_strip_paths());

    assert_eq!(black, white);
    assert_eq!(
        white,
        json!({
            "session": {"id": "s1", "model": "m-1"},
            "tool_usages": [{"tool_name": "bash"}]
        })
    );
}

#[test]
fn test_unknown_source_sees_only_all_scope_fields() {
    let fields = fields_for_source(SourceKind::Unknown);
    assert!(fields.iter().all(|f| {
        matches!(f.scope, argus::fields::FieldScope::All)
    }));
}

#[test]
fn test_unknown_selected_paths_are_inert() {
    let data = json!({"summary": "keep me"});
    let keep = set(&["summary", "no.such.path", "another[].ghost"]);

    let out = strip_fields_whitelist(&data, &keep, &BTreeSet::new());
    assert_eq!(out, json!({"summary": "keep me"}));
}
