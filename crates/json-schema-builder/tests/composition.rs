//! Combinator composition for draft 2020-12 output: ordering, slot
//! overflow, contextual nullability, and numeric narrowing.

use json_schema_builder::{
    any_schema, integer_schema, number_schema, object_schema, string_schema, SchemaNode,
    ToJsonOptions,
};
use serde_json::json;

fn opts() -> ToJsonOptions {
    ToJsonOptions::new()
}

// ── allOf ─────────────────────────────────────────────────────────────────────

#[test]
fn all_of_preserves_application_order() {
    let doc = any_schema()
        .all_of(string_schema().min_length(1.0))
        .all_of(string_schema().min_length(2.0))
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "allOf": [
                {"type": "string", "minLength": 1},
                {"type": "string", "minLength": 2},
            ]
        })
    );
}

#[test]
fn all_of_members_omit_an_established_type() {
    let doc = string_schema()
        .all_of(string_schema().min_length(1.0))
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({"type": "string", "allOf": [{"minLength": 1}]})
    );
}

// ── anyOf / oneOf groups ──────────────────────────────────────────────────────

#[test]
fn each_any_of_call_appends_one_group() {
    let first: Vec<SchemaNode> = vec![string_schema().into(), number_schema().into()];
    let doc = any_schema()
        .any_of(first)
        .any_of([string_schema().min_length(3.0)])
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "anyOf": [{"type": "string"}, {"type": "number"}],
            "allOf": [
                {"anyOf": [{"type": "string", "minLength": 3}]},
            ]
        })
    );
}

#[test]
fn each_one_of_call_appends_one_group() {
    let doc = any_schema()
        .one_of([string_schema(), string_schema().min_length(1.0)])
        .one_of([string_schema().max_length(4.0)])
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "oneOf": [{"type": "string"}, {"type": "string", "minLength": 1}],
            "allOf": [
                {"oneOf": [{"type": "string", "maxLength": 4}]},
            ]
        })
    );
}

#[test]
fn one_of_does_not_merge_into_any_of() {
    let doc = any_schema()
        .any_of([string_schema()])
        .one_of([number_schema()])
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "anyOf": [{"type": "string"}],
            "oneOf": [{"type": "number"}],
        })
    );
}

// ── not ───────────────────────────────────────────────────────────────────────

#[test]
fn further_not_members_overflow_into_all_of() {
    let doc = string_schema()
        .not(string_schema().pattern("a"))
        .not(string_schema().pattern("b"))
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "type": "string",
            "not": {"pattern": "a"},
            "allOf": [{"not": {"pattern": "b"}}],
        })
    );
}

// ── Conditionals ──────────────────────────────────────────────────────────────

#[test]
fn conditionals_render_natively_in_2020_12() {
    let doc = string_schema()
        .if_then_else(
            string_schema().starts_with("a"),
            string_schema().ends_with("c"),
            string_schema().ends_with("d"),
        )
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "type": "string",
            "if": {"pattern": "^a"},
            "then": {"pattern": "c$"},
            "else": {"pattern": "d$"},
        })
    );
}

#[test]
fn further_conditionals_overflow_into_all_of() {
    let doc = string_schema()
        .if_then(string_schema().starts_with("a"), string_schema().ends_with("c"))
        .if_else(string_schema().starts_with("d"), string_schema().ends_with("e"))
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "type": "string",
            "if": {"pattern": "^a"},
            "then": {"pattern": "c$"},
            "allOf": [
                {"if": {"pattern": "^d"}, "else": {"pattern": "e$"}},
            ]
        })
    );
}

// ── Keyword-slot overflow ─────────────────────────────────────────────────────

#[test]
fn repeated_pattern_applications_overflow_into_all_of() {
    let doc = string_schema().pattern("a").pattern("b").to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "type": "string",
            "pattern": "a",
            "allOf": [{"pattern": "b"}],
        })
    );
}

#[test]
fn pattern_overflow_queues_behind_combinator_overflow() {
    let doc = string_schema()
        .pattern("a")
        .pattern("b")
        .not(string_schema().pattern("x"))
        .not(string_schema().pattern("y"))
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({
            "type": "string",
            "not": {"pattern": "x"},
            "allOf": [
                {"not": {"pattern": "y"}},
                {"pattern": "b"},
            ],
            "pattern": "a",
        })
    );
}

// ── Nullability ───────────────────────────────────────────────────────────────

#[test]
fn non_nullable_all_of_member_suppresses_nullability() {
    let doc = object_schema()
        .nullable()
        .all_of(object_schema())
        .to_json(&opts());

    assert_eq!(doc, json!({"type": "object", "allOf": [{}]}));
}

#[test]
fn nullable_all_of_member_keeps_nullability() {
    let doc = object_schema()
        .nullable()
        .all_of(object_schema().nullable())
        .to_json(&opts());

    assert_eq!(doc, json!({"type": ["object", "null"], "allOf": [{}]}));
}

#[test]
fn any_of_group_with_a_nullable_member_keeps_nullability() {
    let group: Vec<SchemaNode> = vec![
        string_schema().into(),
        string_schema().nullable().into(),
    ];
    let doc = string_schema().nullable().any_of(group).to_json(&opts());

    // Both members sit under a context that already asserts the nullable
    // string type, so neither re-emits it.
    assert_eq!(
        doc,
        json!({
            "type": ["string", "null"],
            "anyOf": [{}, {}],
        })
    );
}

// ── Numeric narrowing ─────────────────────────────────────────────────────────

#[test]
fn all_of_integer_members_narrow_the_top_level_type() {
    let doc = number_schema().all_of(integer_schema()).to_json(&opts());

    assert_eq!(doc, json!({"type": "integer", "allOf": [{}]}));
}

#[test]
fn a_number_typed_ref_target_suppresses_narrowing() {
    let doc = number_schema()
        .reference("/defs/n")
        .all_of(integer_schema())
        .to_json(&opts());

    assert_eq!(
        doc,
        json!({"$ref": "/defs/n", "allOf": [{"type": "integer"}]})
    );
}
