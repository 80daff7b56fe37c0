//! Field schema catalogue and selection
//!
//! This module decides which parts of a raw session survive into the
//! prepared output. The [`schema`] submodule holds the static catalogue of
//! known field paths; the [`selector`] submodule applies strip sets
//! (blacklist) or keep sets (whitelist) over nested JSON with one shared
//! path matcher.

pub mod schema;
pub mod selector;

pub use schema::{
    always_strip_paths, build_strip_set, default_selected_fields, fields_for_source,
    FieldCategory, FieldSchema, FieldScope, FIELD_SCHEMAS,
};
pub use selector::{
    is_leaf_path, normalize_path, path_matches, should_keep_path, strip_fields,
    strip_fields_whitelist,
};
