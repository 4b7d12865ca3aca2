//! Contextual nullability resolution.

use super::Composition;
use crate::schema::{BaseAttrs, SchemaNode};

/// Resolves whether a node serializes as nullable.
///
/// When the enclosing composition fixed a concrete type and is itself not
/// nullable, the node's own flag is suppressed and the result falls back to
/// the ref target's resolved nullability (or `false`). Otherwise the node is
/// nullable iff its own flag is set and every attached constraint is
/// structurally consistent with a null value. The check is conservative: a
/// false negative only over-emits `"null"` in the type union, never
/// unsafely omits it.
pub(crate) fn resolve(node: &SchemaNode, ctx: Option<&Composition>) -> bool {
    if let Some(ctx) = ctx {
        if ctx.type_.is_some() && !ctx.nullable {
            return match &node.base().ref_ {
                Some(r) => resolve(&r.target, None),
                None => false,
            };
        }
    }
    let base = node.base();
    base.nullable && consistent(base)
}

/// Every combinator list must admit null for the node's own flag to hold:
/// a conditional's taken branch must be nullable, `not` members must not
/// be, `allOf` members all must be, each `anyOf` group needs at least one
/// nullable member and each `oneOf` group exactly one.
fn consistent(base: &BaseAttrs) -> bool {
    for c in &base.conditionals {
        let cond_nullable = resolve(&c.if_, None);
        if let Some(then) = c.branches.then_branch() {
            if cond_nullable && !resolve(then, None) {
                return false;
            }
        }
        if let Some(else_) = c.branches.else_branch() {
            if !cond_nullable && !resolve(else_, None) {
                return false;
            }
        }
    }
    if base.not.iter().any(|m| resolve(m, None)) {
        return false;
    }
    if base.all_of.iter().any(|m| !resolve(m, None)) {
        return false;
    }
    for group in &base.any_of {
        if !group.iter().any(|m| resolve(m, None)) {
            return false;
        }
    }
    for group in &base.one_of {
        if group.iter().filter(|m| resolve(m, None)).count() != 1 {
            return false;
        }
    }
    true
}
