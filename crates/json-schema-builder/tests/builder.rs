//! Builder-surface tests: immutability, metadata validation, append and
//! replacement cardinality.

use json_schema_builder::{
    any_schema, string_schema, SchemaError, ToJsonOptions,
};
use serde_json::json;

fn opts() -> ToJsonOptions {
    ToJsonOptions::new()
}

// ── Immutability ──────────────────────────────────────────────────────────────

#[test]
fn building_on_a_clone_leaves_the_original_untouched() {
    let base = string_schema().title("base");
    let before = base.to_json(&opts());

    let _extended = base.clone().pattern("^x").nullable().deprecated();

    assert_eq!(base.to_json(&opts()), before);
}

#[test]
fn intermediate_states_can_fork() {
    let common = string_schema().min_length(1.0);
    let a = common.clone().pattern("^a");
    let b = common.clone().pattern("^b");

    assert_eq!(a.to_json(&opts())["pattern"], json!("^a"));
    assert_eq!(b.to_json(&opts())["pattern"], json!("^b"));
    assert!(common.to_json(&opts()).get("pattern").is_none());
}

// ── Metadata ──────────────────────────────────────────────────────────────────

#[test]
fn metadata_is_emitted_verbatim_and_first() {
    let doc = string_schema()
        .metadata("x-origin", json!("billing"))
        .unwrap()
        .title("id")
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({"x-origin": "billing", "type": "string", "title": "id"})
    );
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys[0], "x-origin");
}

#[test]
fn metadata_merges_new_keys_over_old() {
    let doc = any_schema()
        .metadata("x-rev", json!(1))
        .unwrap()
        .metadata("x-rev", json!(2))
        .unwrap()
        .to_json(&opts());

    assert_eq!(doc, json!({"x-rev": 2}));
}

#[test]
fn metadata_rejects_reserved_keywords() {
    let err = string_schema().metadata("type", json!("object")).unwrap_err();
    assert_eq!(err, SchemaError::ReservedKeyword("type".to_string()));

    let err = any_schema().metadata("$ref", json!("/x")).unwrap_err();
    assert_eq!(err, SchemaError::ReservedKeyword("$ref".to_string()));
}

// ── Examples ──────────────────────────────────────────────────────────────────

#[test]
fn examples_append_in_call_order() {
    let doc = string_schema()
        .example(json!("a"))
        .examples([json!("b"), json!("c")])
        .to_json(&opts());

    assert_eq!(doc["examples"], json!(["a", "b", "c"]));
}

// ── Defaults ──────────────────────────────────────────────────────────────────

#[test]
fn explicit_null_default_differs_from_no_default() {
    let with_null = string_schema().default_value(json!(null)).to_json(&opts());
    assert_eq!(with_null, json!({"type": "string", "default": null}));

    let without = string_schema().to_json(&opts());
    assert!(without.as_object().unwrap().get("default").is_none());
}

// ── Ref replacement ───────────────────────────────────────────────────────────

#[test]
fn a_later_reference_replaces_the_prior_one() {
    let doc = string_schema()
        .min_length(2.0)
        .reference("/defs/first")
        .reference("/defs/second")
        .to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/defs/second"}));
}
