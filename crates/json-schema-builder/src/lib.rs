//! `json-schema-builder` — fluent, immutable builder for JSON Schema
//! draft 2020-12 and OpenAPI 3.0 documents.
//!
//! Leaf factories create nodes; every builder call consumes the node and
//! returns a new one, so intermediate states can be kept and reused freely.
//! A terminal [`to_json`](SchemaNode::to_json) renders the accumulated tree
//! into one of the two dialects, translating constructs the target dialect
//! cannot express natively (nullable type unions, `if`/`then`/`else`).
//!
//! ```
//! use json_schema_builder::{object_schema, string_schema, ToJsonOptions};
//! use serde_json::json;
//!
//! let user = object_schema()
//!     .title("User")
//!     .property("name", string_schema().min_length(1.0))
//!     .required("name");
//!
//! assert_eq!(
//!     user.to_json(&ToJsonOptions::new()),
//!     json!({
//!         "type": "object",
//!         "title": "User",
//!         "properties": { "name": { "type": "string", "minLength": 1 } },
//!         "required": ["name"],
//!     })
//! );
//! ```

pub mod constants;
pub mod error;
pub mod render;
pub mod schema;

pub use error::SchemaError;
pub use render::ToJsonOptions;
pub use schema::{
    any_schema, array_schema, boolean_schema, integer_schema, number_schema, object_schema,
    string_schema,
};
pub use schema::{
    AdditionalProperties, AnySchema, ArrSchema, BaseAttrs, BoolSchema, Branches, Conditional,
    NumKind, NumSchema, ObjSchema, RefTarget, SchemaNode, StrSchema,
};
