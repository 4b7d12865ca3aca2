//! Schema node hierarchy.
//!
//! One struct per concrete kind, each embedding the shared [`BaseAttrs`]
//! record, unified under the closed [`SchemaNode`] enum. The serializer
//! dispatches on the tag; combinator availability is a property of each
//! kind's inherent impl, not of the engine.

pub mod base;
pub mod kinds;

pub use base::{BaseAttrs, Branches, Conditional, RefTarget};
pub use kinds::{
    AdditionalProperties, AnySchema, ArrSchema, BoolSchema, NumKind, NumSchema, ObjSchema,
    StrSchema,
};

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::render::{self, SerializeParams, ToJsonOptions};

/// The unified sum of all schema kinds.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Any(AnySchema),
    Bool(BoolSchema),
    Str(StrSchema),
    Num(NumSchema),
    Obj(ObjSchema),
    Arr(ArrSchema),
}

impl SchemaNode {
    /// Kind discriminator string.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any(s) => s.kind(),
            Self::Bool(s) => s.kind(),
            Self::Str(s) => s.kind(),
            Self::Num(s) => s.kind(),
            Self::Obj(s) => s.kind(),
            Self::Arr(s) => s.kind(),
        }
    }

    /// The `type` tag this kind contributes, before contextual narrowing.
    /// `None` for the type-erased merge kind.
    pub fn schema_type(&self) -> Option<&'static str> {
        match self {
            Self::Any(s) => s.schema_type(),
            Self::Bool(s) => s.schema_type(),
            Self::Str(s) => s.schema_type(),
            Self::Num(s) => s.schema_type(),
            Self::Obj(s) => s.schema_type(),
            Self::Arr(s) => s.schema_type(),
        }
    }

    /// Shared attribute record.
    pub fn base(&self) -> &BaseAttrs {
        match self {
            Self::Any(s) => &s.base,
            Self::Bool(s) => &s.base,
            Self::Str(s) => &s.base,
            Self::Num(s) => &s.base,
            Self::Obj(s) => &s.base,
            Self::Arr(s) => &s.base,
        }
    }

    /// Keyword → no-op value map for ref merging.
    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        match self {
            Self::Any(s) => s.default_values(),
            Self::Bool(s) => s.default_values(),
            Self::Str(s) => s.default_values(),
            Self::Num(s) => s.default_values(),
            Self::Obj(s) => s.default_values(),
            Self::Arr(s) => s.default_values(),
        }
    }

    /// Kind extension point: appends kind-specific keywords after the
    /// shared serialization steps.
    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, params: &SerializeParams) {
        match self {
            Self::Any(s) => s.extra_keywords(out, params),
            Self::Bool(s) => s.extra_keywords(out, params),
            Self::Str(s) => s.extra_keywords(out, params),
            Self::Num(s) => s.extra_keywords(out, params),
            Self::Obj(s) => s.extra_keywords(out, params),
            Self::Arr(s) => s.extra_keywords(out, params),
        }
    }

    /// Renders this node as the root of a document.
    pub fn to_json(&self, opts: &ToJsonOptions) -> Value {
        render::to_json(self, opts)
    }
}

impl std::fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

// -------------------------------------------------------------------------
// Leaf factories

pub fn any_schema() -> AnySchema {
    AnySchema::new()
}

pub fn boolean_schema() -> BoolSchema {
    BoolSchema::new()
}

pub fn string_schema() -> StrSchema {
    StrSchema::new()
}

pub fn number_schema() -> NumSchema {
    NumSchema::new()
}

pub fn integer_schema() -> NumSchema {
    NumSchema::integer()
}

pub fn object_schema() -> ObjSchema {
    ObjSchema::new()
}

pub fn array_schema() -> ArrSchema {
    ArrSchema::new()
}
