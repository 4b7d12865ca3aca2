//! Overflow accumulation into `allOf`.
//!
//! A document may carry only one top-level occurrence of each combinator
//! keyword; once a slot is taken, further fragments are pushed here.

use serde_json::{Map, Value};

/// Appends `fragments` to `target`'s `allOf` array, creating it lazily.
/// No-op when `fragments` is empty.
pub(crate) fn merge_into(target: &mut Map<String, Value>, fragments: Vec<Value>) {
    if fragments.is_empty() {
        return;
    }
    let all_of = target
        .entry("allOf".to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(items) = all_of {
        items.extend(fragments);
    }
}
