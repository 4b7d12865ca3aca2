//! Shared node attributes and the builder plumbing common to every kind.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::SchemaNode;

/// A `$ref` attached to a node.
///
/// The target is the node's own state captured at the moment of the
/// `reference` call; it is rendered at serialization time so sibling
/// keywords can be pruned against what the reference already implies.
#[derive(Debug, Clone)]
pub struct RefTarget {
    pub path: String,
    pub target: Box<SchemaNode>,
}

/// Branches of a conditional. At least one of then/else is always present.
#[derive(Debug, Clone)]
pub enum Branches {
    Then(SchemaNode),
    Else(SchemaNode),
    ThenElse(SchemaNode, SchemaNode),
}

impl Branches {
    pub fn then_branch(&self) -> Option<&SchemaNode> {
        match self {
            Self::Then(t) | Self::ThenElse(t, _) => Some(t),
            Self::Else(_) => None,
        }
    }

    pub fn else_branch(&self) -> Option<&SchemaNode> {
        match self {
            Self::Else(e) | Self::ThenElse(_, e) => Some(e),
            Self::Then(_) => None,
        }
    }
}

/// One `if`/`then`/`else` application.
#[derive(Debug, Clone)]
pub struct Conditional {
    pub if_: SchemaNode,
    pub branches: Branches,
}

/// Attributes shared by every schema kind.
///
/// Nodes are immutable: builder calls consume the node and return a new one,
/// so children can be shared structurally across clones without aliasing.
#[derive(Debug, Clone, Default)]
pub struct BaseAttrs {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Present-with-null is distinct from absent.
    pub default: Option<Value>,
    pub deprecated: bool,
    pub read_only: bool,
    pub write_only: bool,
    pub examples: Vec<Value>,
    /// Open keyword map, disjoint from [`crate::constants::RESERVED_KEYWORDS`].
    pub metadata: Map<String, Value>,
    /// Set only by an explicit `nullable()` call; never retracted. Its
    /// serialized effect may still be suppressed by the enclosing context.
    pub nullable: bool,
    pub ref_: Option<RefTarget>,
    pub all_of: Vec<SchemaNode>,
    /// One inner list per `any_of` call.
    pub any_of: Vec<Vec<SchemaNode>>,
    /// One inner list per `one_of` call.
    pub one_of: Vec<Vec<SchemaNode>>,
    pub not: Vec<SchemaNode>,
    pub conditionals: Vec<Conditional>,
}

/// No-op values for the shared keywords, consumed only by ref merging.
pub(crate) fn base_default_values() -> IndexMap<&'static str, Value> {
    let mut defaults = IndexMap::new();
    defaults.insert("deprecated", Value::Bool(false));
    defaults.insert("readOnly", Value::Bool(false));
    defaults.insert("writeOnly", Value::Bool(false));
    defaults.insert("examples", Value::Array(Vec::new()));
    defaults
}

/// Mutators every schema kind exposes. Each clones-with-override by
/// consuming `self`; `metadata` is the single fallible call and validates
/// before the new node exists.
macro_rules! impl_shared_mutators {
    ($ty:ident, $variant:ident) => {
        impl $ty {
            pub fn title(mut self, title: impl Into<String>) -> Self {
                self.base.title = Some(title.into());
                self
            }

            pub fn description(mut self, description: impl Into<String>) -> Self {
                self.base.description = Some(description.into());
                self
            }

            /// Sets the `default` keyword. An explicit JSON `null` is kept
            /// distinct from no default at all.
            pub fn default_value(mut self, value: serde_json::Value) -> Self {
                self.base.default = Some(value);
                self
            }

            pub fn deprecated(mut self) -> Self {
                self.base.deprecated = true;
                self
            }

            pub fn read_only(mut self) -> Self {
                self.base.read_only = true;
                self
            }

            pub fn write_only(mut self) -> Self {
                self.base.write_only = true;
                self
            }

            /// Appends one example. Examples accumulate in call order.
            pub fn example(mut self, value: serde_json::Value) -> Self {
                self.base.examples.push(value);
                self
            }

            /// Appends several examples at once.
            pub fn examples<I>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = serde_json::Value>,
            {
                self.base.examples.extend(values);
                self
            }

            /// Merges one metadata entry over any previous one under the
            /// same key. Rejects keys the serializer owns.
            pub fn metadata(
                mut self,
                key: impl Into<String>,
                value: serde_json::Value,
            ) -> Result<Self, $crate::error::SchemaError> {
                let key = key.into();
                if $crate::constants::is_reserved_keyword(&key) {
                    return Err($crate::error::SchemaError::ReservedKeyword(key));
                }
                self.base.metadata.insert(key, value);
                Ok(self)
            }

            pub fn nullable(mut self) -> Self {
                self.base.nullable = true;
                self
            }

            /// Attaches a `$ref`, capturing the node's current state as the
            /// owned target. A later call replaces both path and target.
            pub fn reference(mut self, path: impl Into<String>) -> Self {
                let mut target = self.clone();
                target.base.ref_ = None;
                self.base.ref_ = Some($crate::schema::base::RefTarget {
                    path: path.into(),
                    target: Box::new($crate::schema::SchemaNode::$variant(target)),
                });
                self
            }

            /// Renders this node as the root of a document.
            pub fn to_json(&self, opts: &$crate::render::ToJsonOptions) -> serde_json::Value {
                $crate::schema::SchemaNode::from(self.clone()).to_json(opts)
            }
        }

        impl From<$ty> for $crate::schema::SchemaNode {
            fn from(kind: $ty) -> Self {
                $crate::schema::SchemaNode::$variant(kind)
            }
        }
    };
}

/// Combinator mutators, implemented only for kinds whose result type can
/// usefully carry them. `all_of`/`not` append one node per call;
/// `any_of`/`one_of` append one group per call.
macro_rules! impl_composition_mutators {
    ($ty:ident) => {
        impl $ty {
            pub fn all_of(mut self, node: impl Into<$crate::schema::SchemaNode>) -> Self {
                self.base.all_of.push(node.into());
                self
            }

            pub fn any_of<I>(mut self, group: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$crate::schema::SchemaNode>,
            {
                self.base
                    .any_of
                    .push(group.into_iter().map(Into::into).collect());
                self
            }

            pub fn one_of<I>(mut self, group: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$crate::schema::SchemaNode>,
            {
                self.base
                    .one_of
                    .push(group.into_iter().map(Into::into).collect());
                self
            }

            pub fn not(mut self, node: impl Into<$crate::schema::SchemaNode>) -> Self {
                self.base.not.push(node.into());
                self
            }

            pub fn if_then(
                mut self,
                cond: impl Into<$crate::schema::SchemaNode>,
                then: impl Into<$crate::schema::SchemaNode>,
            ) -> Self {
                self.base.conditionals.push($crate::schema::base::Conditional {
                    if_: cond.into(),
                    branches: $crate::schema::base::Branches::Then(then.into()),
                });
                self
            }

            pub fn if_else(
                mut self,
                cond: impl Into<$crate::schema::SchemaNode>,
                else_: impl Into<$crate::schema::SchemaNode>,
            ) -> Self {
                self.base.conditionals.push($crate::schema::base::Conditional {
                    if_: cond.into(),
                    branches: $crate::schema::base::Branches::Else(else_.into()),
                });
                self
            }

            pub fn if_then_else(
                mut self,
                cond: impl Into<$crate::schema::SchemaNode>,
                then: impl Into<$crate::schema::SchemaNode>,
                else_: impl Into<$crate::schema::SchemaNode>,
            ) -> Self {
                self.base.conditionals.push($crate::schema::base::Conditional {
                    if_: cond.into(),
                    branches: $crate::schema::base::Branches::ThenElse(then.into(), else_.into()),
                });
                self
            }
        }
    };
}

pub(crate) use impl_composition_mutators;
pub(crate) use impl_shared_mutators;
