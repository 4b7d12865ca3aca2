//! `$ref` sibling merging.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Merges a node's own rendered keywords with its reference target.
///
/// A sibling keyword survives only if it differs both from the value the
/// target's rendered document implies and from the kind's documented no-op
/// default; everything else is dropped, so spelling out an implicit default
/// never overrides what the reference already means. `$ref` comes first,
/// survivors keep their original order.
pub(crate) fn merge(
    base: Map<String, Value>,
    target: Map<String, Value>,
    path: &str,
    defaults: &IndexMap<&'static str, Value>,
) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("$ref".to_string(), Value::String(path.to_string()));
    for (key, value) in base {
        if target.get(&key) == Some(&value) {
            continue;
        }
        if defaults.get(key.as_str()) == Some(&value) {
            continue;
        }
        out.insert(key, value);
    }
    out
}
