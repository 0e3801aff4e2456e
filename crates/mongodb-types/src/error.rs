//! Conversion errors.

use bson::spec::ElementType;
use thiserror::Error;

/// Errors raised while converting between records and BSON documents.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Record could not be serialized to BSON.
    #[error("BSON serialization error: {0}")]
    Serialize(#[from] bson::ser::Error),

    /// Document could not be deserialized into a record.
    #[error("BSON deserialization error: {0}")]
    Deserialize(#[from] bson::de::Error),

    /// A required field is absent from the document.
    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    /// A field holds a BSON type the conversion does not accept.
    #[error("Field '{field}' has unexpected BSON type {found:?}")]
    UnexpectedType {
        field: &'static str,
        found: ElementType,
    },
}
