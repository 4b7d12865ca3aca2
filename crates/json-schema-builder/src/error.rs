use thiserror::Error;

/// Construction-time builder errors.
///
/// Serialization itself is total: every well-formed node tree renders to a
/// document. The only fallible operation is attaching metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("metadata key collides with reserved keyword: {0}")]
    ReservedKeyword(String),
}
