//! Document rendering.
//!
//! The recursive walk lives here: the shared attribute/combinator steps,
//! the contextual resolvers, and the two merge utilities. Rendering is a
//! pure read over the node tree and never fails.

pub(crate) mod all_of;
mod narrow;
mod nullability;
mod ref_merge;

use serde_json::{json, Map, Value};

use crate::constants::DRAFT_2020_12;
use crate::schema::SchemaNode;

/// Options for rendering a root document.
#[derive(Debug, Clone, Default)]
pub struct ToJsonOptions {
    /// `$id` of the root document. Draft 2020-12 only; ignored under
    /// OpenAPI 3.0.
    pub id: Option<String>,
    /// Emit the draft 2020-12 `$schema` URI. Ignored under OpenAPI 3.0.
    pub schema: bool,
    /// Target the OpenAPI 3.0 dialect instead of draft 2020-12.
    pub open_api30: bool,
}

impl ToJsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn openapi30() -> Self {
        Self {
            open_api30: true,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn schema(mut self) -> Self {
        self.schema = true;
        self
    }
}

/// Type/nullability already established by an enclosing combinator.
#[derive(Debug, Clone)]
pub(crate) struct Composition {
    pub type_: Option<String>,
    pub nullable: bool,
}

/// Ephemeral per-call render state. Never stored on nodes.
#[derive(Debug, Clone)]
pub(crate) struct SerializeParams {
    pub open_api30: bool,
    pub composition: Option<Composition>,
}

/// Params for child positions that do not inherit a composition context
/// (object properties, array items, ref targets of such positions).
pub(crate) fn fresh_params(params: &SerializeParams) -> SerializeParams {
    SerializeParams {
        open_api30: params.open_api30,
        composition: None,
    }
}

/// JSON number for a finite float. Integer-valued floats become JSON
/// integers so equal constraints compare equal regardless of how the
/// caller spelled them; non-finite values have no JSON form.
pub(crate) fn finite_number(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        return Some(Value::from(value as i64));
    }
    serde_json::Number::from_f64(value).map(Value::Number)
}

/// Renders `node` as a root document.
pub(crate) fn to_json(node: &SchemaNode, opts: &ToJsonOptions) -> Value {
    let mut doc = Map::new();
    if !opts.open_api30 {
        if let Some(id) = &opts.id {
            doc.insert("$id".to_string(), Value::String(id.clone()));
        }
        if opts.schema {
            doc.insert("$schema".to_string(), Value::String(DRAFT_2020_12.to_string()));
        }
    }
    let params = SerializeParams {
        open_api30: opts.open_api30,
        composition: None,
    };
    for (key, value) in to_schema(node, &params) {
        doc.insert(key, value);
    }
    Value::Object(doc)
}

/// The recursive serialization step.
///
/// Assembles the document in emission order: metadata, resolved type,
/// shared scalar keywords, combinators (with overflow spilling into
/// `allOf`), kind-specific keywords, and finally ref merging. Insertion
/// order within each combinator kind is preserved verbatim.
pub(crate) fn to_schema(node: &SchemaNode, params: &SerializeParams) -> Map<String, Value> {
    let base = node.base();
    let ctx = params.composition.as_ref();

    // Metadata passes through verbatim, dialect-independent.
    let mut out = base.metadata.clone();

    let nullable = nullability::resolve(node, ctx);
    let resolved = narrow::resolve(node, ctx);

    if let Some(type_) = resolved {
        let ctx_established = ctx.is_some_and(|c| c.type_.as_deref() == Some(type_));
        if ctx_established && base.ref_.is_none() {
            // The context already asserts this type; re-emit the bare type
            // only to claim nullability the context does not grant.
            let ctx_nullable = ctx.is_some_and(|c| c.nullable);
            if nullable && !ctx_nullable {
                out.insert("type".to_string(), Value::String(type_.to_string()));
            }
        } else if nullable && params.open_api30 {
            out.insert("type".to_string(), Value::String(type_.to_string()));
            out.insert("nullable".to_string(), Value::Bool(true));
        } else if nullable {
            out.insert("type".to_string(), json!([type_, "null"]));
        } else {
            out.insert("type".to_string(), Value::String(type_.to_string()));
        }
    }

    if let Some(title) = &base.title {
        out.insert("title".to_string(), Value::String(title.clone()));
    }
    if let Some(default) = &base.default {
        out.insert("default".to_string(), default.clone());
    }
    if let Some(description) = &base.description {
        out.insert("description".to_string(), Value::String(description.clone()));
    }
    if !base.examples.is_empty() {
        if params.open_api30 {
            // OpenAPI 3.0 has no `examples` array; keep the first entry.
            out.insert("example".to_string(), base.examples[0].clone());
        } else {
            out.insert("examples".to_string(), Value::Array(base.examples.clone()));
        }
    }
    if base.deprecated {
        out.insert("deprecated".to_string(), Value::Bool(true));
    }
    if base.read_only {
        out.insert("readOnly".to_string(), Value::Bool(true));
    }
    if base.write_only {
        out.insert("writeOnly".to_string(), Value::Bool(true));
    }

    // Combinator members inherit what this node has established.
    let child = SerializeParams {
        open_api30: params.open_api30,
        composition: Some(Composition {
            type_: resolved.map(str::to_string),
            nullable,
        }),
    };

    if !base.all_of.is_empty() {
        let members: Vec<Value> = base
            .all_of
            .iter()
            .map(|m| Value::Object(to_schema(m, &child)))
            .collect();
        out.insert("allOf".to_string(), Value::Array(members));
    }

    let mut overflow: Vec<Value> = Vec::new();

    // Conditionals. OpenAPI 3.0 has no `if`/`then`/`else`; each branch is
    // encoded as the equivalent implication: then => anyOf[not(if), then],
    // else => anyOf[if, else].
    let mut fragments: Vec<Map<String, Value>> = Vec::new();
    for conditional in &base.conditionals {
        let if_doc = Value::Object(to_schema(&conditional.if_, &child));
        if params.open_api30 {
            if let Some(then) = conditional.branches.then_branch() {
                let then_doc = Value::Object(to_schema(then, &child));
                let mut frag = Map::new();
                frag.insert(
                    "anyOf".to_string(),
                    json!([{ "not": if_doc.clone() }, then_doc]),
                );
                fragments.push(frag);
            }
            if let Some(else_) = conditional.branches.else_branch() {
                let else_doc = Value::Object(to_schema(else_, &child));
                let mut frag = Map::new();
                frag.insert("anyOf".to_string(), json!([if_doc.clone(), else_doc]));
                fragments.push(frag);
            }
        } else {
            let mut frag = Map::new();
            frag.insert("if".to_string(), if_doc);
            if let Some(then) = conditional.branches.then_branch() {
                frag.insert("then".to_string(), Value::Object(to_schema(then, &child)));
            }
            if let Some(else_) = conditional.branches.else_branch() {
                frag.insert("else".to_string(), Value::Object(to_schema(else_, &child)));
            }
            fragments.push(frag);
        }
    }
    // The first fragment owns the top-level slot; the rest overflow.
    let mut fragments = fragments.into_iter();
    if let Some(first) = fragments.next() {
        for (key, value) in first {
            out.insert(key, value);
        }
    }
    overflow.extend(fragments.map(Value::Object));

    let mut nots = base.not.iter().map(|m| Value::Object(to_schema(m, &child)));
    if let Some(first) = nots.next() {
        out.insert("not".to_string(), first);
    }
    overflow.extend(nots.map(|doc| json!({ "not": doc })));

    // The first anyOf group joins an anyOf the conditionals may already
    // have claimed, rather than overwriting it.
    let mut any_groups = base.any_of.iter().map(|group| {
        group
            .iter()
            .map(|m| Value::Object(to_schema(m, &child)))
            .collect::<Vec<Value>>()
    });
    if let Some(first) = any_groups.next() {
        match out.get_mut("anyOf") {
            Some(Value::Array(existing)) => existing.extend(first),
            _ => {
                out.insert("anyOf".to_string(), Value::Array(first));
            }
        }
    }
    overflow.extend(any_groups.map(|group| json!({ "anyOf": group })));

    let mut one_groups = base.one_of.iter().map(|group| {
        group
            .iter()
            .map(|m| Value::Object(to_schema(m, &child)))
            .collect::<Vec<Value>>()
    });
    if let Some(first) = one_groups.next() {
        out.insert("oneOf".to_string(), Value::Array(first));
    }
    overflow.extend(one_groups.map(|group| json!({ "oneOf": group })));

    all_of::merge_into(&mut out, overflow);

    node.extra_keywords(&mut out, params);

    if let Some(r) = &base.ref_ {
        let target = to_schema(&r.target, params);
        return ref_merge::merge(out, target, &r.path, &node.default_values());
    }

    out
}
