//! Concrete schema kinds.
//!
//! Each struct embeds the shared [`BaseAttrs`] record plus its own keyword
//! slots, and implements the extension contract consumed by the serializer:
//! a type discriminator, a no-op default map, and a dialect-aware
//! extra-keyword pass appended after the shared algorithm.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use super::base::{
    base_default_values, impl_composition_mutators, impl_shared_mutators, BaseAttrs,
};
use super::SchemaNode;
use crate::render::{finite_number, fresh_params, to_schema, SerializeParams};

// -------------------------------------------------------------------------
// AnySchema

/// Type-erased merge kind. Emits no `type` of its own; exists to host pure
/// combinator compositions.
#[derive(Debug, Clone, Default)]
pub struct AnySchema {
    pub base: BaseAttrs,
}

impl AnySchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> &'static str {
        "any"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        None
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        base_default_values()
    }

    pub(crate) fn extra_keywords(&self, _out: &mut Map<String, Value>, _params: &SerializeParams) {}
}

impl_shared_mutators!(AnySchema, Any);
impl_composition_mutators!(AnySchema);

// -------------------------------------------------------------------------
// BoolSchema

/// Boolean kind. Two distinguishable states leave nothing for the
/// combinators to compose, so only the shared mutators are exposed.
#[derive(Debug, Clone, Default)]
pub struct BoolSchema {
    pub base: BaseAttrs,
    pub const_value: Option<bool>,
}

impl BoolSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn const_value(mut self, value: bool) -> Self {
        self.const_value = Some(value);
        self
    }

    pub fn kind(&self) -> &'static str {
        "boolean"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        Some("boolean")
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        base_default_values()
    }

    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, _params: &SerializeParams) {
        if let Some(value) = self.const_value {
            out.insert("const".to_string(), Value::Bool(value));
        }
    }
}

impl_shared_mutators!(BoolSchema, Bool);

// -------------------------------------------------------------------------
// StrSchema

/// String kind.
///
/// `pattern` is the overflow-capable slot: the first application owns the
/// keyword, every further application spills into `allOf` at serialization
/// time.
#[derive(Debug, Clone, Default)]
pub struct StrSchema {
    pub base: BaseAttrs,
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
    pub patterns: Vec<String>,
    pub format: Option<String>,
    pub const_value: Option<Value>,
    pub enum_values: Option<Vec<Value>>,
}

impl StrSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// No-op default 0.
    pub fn min_length(mut self, value: f64) -> Self {
        self.min_length = Some(value);
        self
    }

    /// No-op default unbounded (`f64::INFINITY`).
    pub fn max_length(mut self, value: f64) -> Self {
        self.max_length = Some(value);
        self
    }

    /// Appends a pattern constraint. The pattern string is carried opaque,
    /// never compiled or executed.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Anchored-prefix sugar over `pattern`. The prefix is inserted into the
    /// pattern verbatim; regex metacharacters are the caller's concern.
    pub fn starts_with(self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.pattern(format!("^{prefix}"))
    }

    /// Anchored-suffix sugar over `pattern`.
    pub fn ends_with(self, suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        self.pattern(format!("{suffix}$"))
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn const_value(mut self, value: Value) -> Self {
        self.const_value = Some(value);
        self
    }

    pub fn enum_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.enum_values = Some(values.into_iter().collect());
        self
    }

    pub fn kind(&self) -> &'static str {
        "string"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        Some("string")
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        let mut defaults = base_default_values();
        defaults.insert("minLength", json!(0));
        defaults
    }

    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, _params: &SerializeParams) {
        if let Some(value) = self.min_length.and_then(finite_number) {
            out.insert("minLength".to_string(), value);
        }
        if let Some(value) = self.max_length.and_then(finite_number) {
            out.insert("maxLength".to_string(), value);
        }
        let mut patterns = self.patterns.iter();
        if let Some(first) = patterns.next() {
            out.insert("pattern".to_string(), Value::String(first.clone()));
        }
        let overflow: Vec<Value> = patterns.map(|p| json!({ "pattern": p })).collect();
        crate::render::all_of::merge_into(out, overflow);
        if let Some(format) = &self.format {
            out.insert("format".to_string(), Value::String(format.clone()));
        }
        if let Some(value) = &self.const_value {
            out.insert("const".to_string(), value.clone());
        }
        if let Some(values) = &self.enum_values {
            out.insert("enum".to_string(), Value::Array(values.clone()));
        }
    }
}

impl_shared_mutators!(StrSchema, Str);
impl_composition_mutators!(StrSchema);

// -------------------------------------------------------------------------
// NumSchema

/// Numeric subtype, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumKind {
    #[default]
    Number,
    Integer,
}

impl NumKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
        }
    }
}

/// Number kind. Exclusive bounds render as bare numeric keywords in
/// 2020-12 and as `minimum`/`maximum` paired with a boolean
/// `exclusiveMinimum`/`exclusiveMaximum` under OpenAPI 3.0.
#[derive(Debug, Clone, Default)]
pub struct NumSchema {
    pub base: BaseAttrs,
    pub num_kind: NumKind,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
    pub const_value: Option<Value>,
    pub enum_values: Option<Vec<Value>>,
}

impl NumSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer() -> Self {
        Self {
            num_kind: NumKind::Integer,
            ..Self::default()
        }
    }

    pub fn minimum(mut self, value: f64) -> Self {
        self.minimum = Some(value);
        self
    }

    pub fn maximum(mut self, value: f64) -> Self {
        self.maximum = Some(value);
        self
    }

    pub fn exclusive_minimum(mut self, value: f64) -> Self {
        self.exclusive_minimum = Some(value);
        self
    }

    pub fn exclusive_maximum(mut self, value: f64) -> Self {
        self.exclusive_maximum = Some(value);
        self
    }

    /// No-op default 0 (no divisibility constraint).
    pub fn multiple_of(mut self, value: f64) -> Self {
        self.multiple_of = Some(value);
        self
    }

    pub fn const_value(mut self, value: Value) -> Self {
        self.const_value = Some(value);
        self
    }

    pub fn enum_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.enum_values = Some(values.into_iter().collect());
        self
    }

    pub fn kind(&self) -> &'static str {
        "number"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        Some(self.num_kind.as_str())
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        let mut defaults = base_default_values();
        defaults.insert("multipleOf", json!(0));
        defaults
    }

    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, params: &SerializeParams) {
        if let Some(value) = self.minimum.and_then(finite_number) {
            out.insert("minimum".to_string(), value);
        }
        if let Some(value) = self.maximum.and_then(finite_number) {
            out.insert("maximum".to_string(), value);
        }
        if let Some(bound) = self.exclusive_minimum {
            if let Some(value) = finite_number(bound) {
                if params.open_api30 {
                    out.insert("minimum".to_string(), value);
                    out.insert("exclusiveMinimum".to_string(), Value::Bool(true));
                } else {
                    out.insert("exclusiveMinimum".to_string(), value);
                }
            }
        }
        if let Some(bound) = self.exclusive_maximum {
            if let Some(value) = finite_number(bound) {
                if params.open_api30 {
                    out.insert("maximum".to_string(), value);
                    out.insert("exclusiveMaximum".to_string(), Value::Bool(true));
                } else {
                    out.insert("exclusiveMaximum".to_string(), value);
                }
            }
        }
        if let Some(value) = self.multiple_of.and_then(finite_number) {
            out.insert("multipleOf".to_string(), value);
        }
        if let Some(value) = &self.const_value {
            out.insert("const".to_string(), value.clone());
        }
        if let Some(values) = &self.enum_values {
            out.insert("enum".to_string(), Value::Array(values.clone()));
        }
    }
}

impl_shared_mutators!(NumSchema, Num);
impl_composition_mutators!(NumSchema);

// -------------------------------------------------------------------------
// ObjSchema

/// `additionalProperties` value: a blanket boolean or a full schema.
#[derive(Debug, Clone)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<SchemaNode>),
}

/// Object kind. Property insertion order is preserved in the output.
#[derive(Debug, Clone, Default)]
pub struct ObjSchema {
    pub base: BaseAttrs,
    pub properties: Vec<(String, SchemaNode)>,
    pub required: Vec<String>,
    pub additional: Option<AdditionalProperties>,
    pub min_properties: Option<f64>,
    pub max_properties: Option<f64>,
    pub property_names: Option<Box<SchemaNode>>,
}

impl ObjSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property. A repeated name yields a duplicate entry; the
    /// later one wins in the rendered map.
    pub fn property(mut self, name: impl Into<String>, node: impl Into<SchemaNode>) -> Self {
        self.properties.push((name.into(), node.into()));
        self
    }

    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// No-op default `true`.
    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional = Some(AdditionalProperties::Allowed(allowed));
        self
    }

    /// Constrains unknown properties by schema instead of a blanket flag.
    pub fn additional_properties_schema(mut self, node: impl Into<SchemaNode>) -> Self {
        self.additional = Some(AdditionalProperties::Schema(Box::new(node.into())));
        self
    }

    /// No-op default 0.
    pub fn min_properties(mut self, value: f64) -> Self {
        self.min_properties = Some(value);
        self
    }

    /// No-op default unbounded (`f64::INFINITY`).
    pub fn max_properties(mut self, value: f64) -> Self {
        self.max_properties = Some(value);
        self
    }

    pub fn property_names(mut self, node: impl Into<SchemaNode>) -> Self {
        self.property_names = Some(Box::new(node.into()));
        self
    }

    pub fn kind(&self) -> &'static str {
        "object"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        Some("object")
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        let mut defaults = base_default_values();
        defaults.insert("minProperties", json!(0));
        defaults.insert("additionalProperties", Value::Bool(true));
        defaults
    }

    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, params: &SerializeParams) {
        let child = fresh_params(params);
        if !self.properties.is_empty() {
            let mut props = Map::new();
            for (name, node) in &self.properties {
                props.insert(name.clone(), Value::Object(to_schema(node, &child)));
            }
            out.insert("properties".to_string(), Value::Object(props));
        }
        if !self.required.is_empty() {
            out.insert("required".to_string(), json!(self.required));
        }
        match &self.additional {
            Some(AdditionalProperties::Allowed(allowed)) => {
                out.insert("additionalProperties".to_string(), Value::Bool(*allowed));
            }
            Some(AdditionalProperties::Schema(node)) => {
                out.insert(
                    "additionalProperties".to_string(),
                    Value::Object(to_schema(node, &child)),
                );
            }
            None => {}
        }
        if let Some(node) = &self.property_names {
            out.insert(
                "propertyNames".to_string(),
                Value::Object(to_schema(node, &child)),
            );
        }
        if let Some(value) = self.min_properties.and_then(finite_number) {
            out.insert("minProperties".to_string(), value);
        }
        if let Some(value) = self.max_properties.and_then(finite_number) {
            out.insert("maxProperties".to_string(), value);
        }
    }
}

impl_shared_mutators!(ObjSchema, Obj);
impl_composition_mutators!(ObjSchema);

// -------------------------------------------------------------------------
// ArrSchema

/// Array kind. `prefixItems` and `contains` have no OpenAPI 3.0 encoding
/// and are emitted only for 2020-12 output.
#[derive(Debug, Clone, Default)]
pub struct ArrSchema {
    pub base: BaseAttrs,
    pub items: Option<Box<SchemaNode>>,
    pub prefix_items: Vec<SchemaNode>,
    pub contains: Option<Box<SchemaNode>>,
    pub min_items: Option<f64>,
    pub max_items: Option<f64>,
    pub unique_items: Option<bool>,
}

impl ArrSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(mut self, node: impl Into<SchemaNode>) -> Self {
        self.items = Some(Box::new(node.into()));
        self
    }

    /// Appends tuple positions in call order. 2020-12 only.
    pub fn prefix_items<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SchemaNode>,
    {
        self.prefix_items.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// 2020-12 only.
    pub fn contains(mut self, node: impl Into<SchemaNode>) -> Self {
        self.contains = Some(Box::new(node.into()));
        self
    }

    /// No-op default 0.
    pub fn min_items(mut self, value: f64) -> Self {
        self.min_items = Some(value);
        self
    }

    /// No-op default unbounded (`f64::INFINITY`).
    pub fn max_items(mut self, value: f64) -> Self {
        self.max_items = Some(value);
        self
    }

    /// No-op default `false`.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    pub fn kind(&self) -> &'static str {
        "array"
    }

    pub fn schema_type(&self) -> Option<&'static str> {
        Some("array")
    }

    pub(crate) fn default_values(&self) -> IndexMap<&'static str, Value> {
        let mut defaults = base_default_values();
        defaults.insert("minItems", json!(0));
        defaults.insert("uniqueItems", Value::Bool(false));
        defaults
    }

    pub(crate) fn extra_keywords(&self, out: &mut Map<String, Value>, params: &SerializeParams) {
        let child = fresh_params(params);
        if let Some(node) = &self.items {
            out.insert("items".to_string(), Value::Object(to_schema(node, &child)));
        }
        if !params.open_api30 {
            if !self.prefix_items.is_empty() {
                let items: Vec<Value> = self
                    .prefix_items
                    .iter()
                    .map(|node| Value::Object(to_schema(node, &child)))
                    .collect();
                out.insert("prefixItems".to_string(), Value::Array(items));
            }
            if let Some(node) = &self.contains {
                out.insert("contains".to_string(), Value::Object(to_schema(node, &child)));
            }
        }
        if let Some(value) = self.min_items.and_then(finite_number) {
            out.insert("minItems".to_string(), value);
        }
        if let Some(value) = self.max_items.and_then(finite_number) {
            out.insert("maxItems".to_string(), value);
        }
        if let Some(unique) = self.unique_items {
            out.insert("uniqueItems".to_string(), Value::Bool(unique));
        }
    }
}

impl_shared_mutators!(ArrSchema, Arr);
impl_composition_mutators!(ArrSchema);
