//! Numeric type narrowing.

use super::Composition;
use crate::schema::{BaseAttrs, SchemaNode};

/// Resolves the `type` a node serializes with.
///
/// A `"number"` narrows to `"integer"` when the enclosing context already
/// fixed `"integer"`, or when every branch of at least one attached
/// combinator structurally forces integer — unless a ref is attached whose
/// target resolves to `"number"`, which pins the wider type. Everything
/// that is not numeric passes through unchanged.
pub(crate) fn resolve(node: &SchemaNode, ctx: Option<&Composition>) -> Option<&'static str> {
    let tag = node.schema_type()?;
    if tag != "number" {
        return Some(tag);
    }
    if let Some(r) = &node.base().ref_ {
        if resolve(&r.target, None) == Some("number") {
            return Some("number");
        }
    }
    let ctx_integer = ctx.is_some_and(|c| c.type_.as_deref() == Some("integer"));
    if ctx_integer || forced_integer(node.base()) {
        return Some("integer");
    }
    Some("number")
}

fn is_integer(node: &SchemaNode) -> bool {
    resolve(node, None) == Some("integer")
}

/// True when some combinator admits only integer values on every branch:
/// both branches of a conditional, every `allOf` member, or every member of
/// some non-empty `anyOf`/`oneOf` group.
fn forced_integer(base: &BaseAttrs) -> bool {
    for c in &base.conditionals {
        if let (Some(then), Some(else_)) = (c.branches.then_branch(), c.branches.else_branch()) {
            if is_integer(then) && is_integer(else_) {
                return true;
            }
        }
    }
    if !base.all_of.is_empty() && base.all_of.iter().all(is_integer) {
        return true;
    }
    if base
        .any_of
        .iter()
        .chain(base.one_of.iter())
        .any(|group| !group.is_empty() && group.iter().all(is_integer))
    {
        return true;
    }
    false
}
