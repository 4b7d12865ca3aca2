//! `$ref` sibling-keyword pruning against the captured target.

use json_schema_builder::{array_schema, string_schema, ToJsonOptions};
use serde_json::json;

fn opts() -> ToJsonOptions {
    ToJsonOptions::new()
}

#[test]
fn implicit_defaults_collapse_to_a_bare_ref() {
    let doc = array_schema()
        .max_items(10.0)
        .min_items(5.0)
        .reference("/x")
        .max_items(f64::INFINITY)
        .min_items(0.0)
        .to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/x"}));
}

#[test]
fn a_sibling_differing_from_the_target_survives() {
    let doc = array_schema()
        .min_items(5.0)
        .reference("/x")
        .min_items(3.0)
        .to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/x", "minItems": 3}));
}

#[test]
fn siblings_the_target_already_implies_are_dropped() {
    let doc = string_schema()
        .pattern("^a")
        .reference("/defs/prefixed")
        .to_json(&opts());

    // Both the type and the pattern match the captured target exactly.
    assert_eq!(doc, json!({"$ref": "/defs/prefixed"}));
}

#[test]
fn annotations_added_after_the_capture_survive() {
    let doc = string_schema()
        .reference("/defs/token")
        .title("primary token")
        .to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/defs/token", "title": "primary token"}));
}

#[test]
fn metadata_matching_the_target_is_pruned() {
    let doc = string_schema()
        .metadata("x-team", json!("auth"))
        .unwrap()
        .reference("/defs/token")
        .to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/defs/token"}));
}

#[test]
fn a_nullable_node_matches_its_nullable_capture() {
    let doc = string_schema().nullable().reference("/defs/s").to_json(&opts());

    assert_eq!(doc, json!({"$ref": "/defs/s"}));
}

#[test]
fn ref_is_the_first_key_of_the_merged_document() {
    let doc = string_schema()
        .reference("/defs/token")
        .title("kept")
        .to_json(&opts());

    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys[0], "$ref");
}
