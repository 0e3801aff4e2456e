//! MongoDB/BSON conversions for phone-core records.
//!
//! This crate provides bidirectional conversions between
//! [`phone_core::PhoneRecord`] and MongoDB's BSON `Document`.
//!
//! Most of the record maps through serde unchanged. The exception is
//! `releaseDate`, which is stored as a native BSON datetime rather than the
//! RFC 3339 string serde would produce, so range queries on it work.
//!
//! # Modules
//!
//! - [`forward`] - PhoneRecord → BSON Document conversion
//! - [`reverse`] - BSON Document → PhoneRecord conversion
//!
//! # Example
//!
//! ```ignore
//! use mongodb_types::PhoneDocument;
//!
//! let doc = PhoneDocument::try_from(&record)?.into_inner();
//! let back = mongodb_types::document_to_phone(&doc)?;
//! ```

pub mod error;
pub mod forward;
pub mod reverse;

#[cfg(test)]
mod testing;

pub use error::ConversionError;
pub use forward::{phone_to_document, PhoneDocument};
pub use reverse::document_to_phone;

/// Natural key field of a stored phone document.
pub const ID_FIELD: &str = "id";

/// Field stored as a BSON datetime.
pub const RELEASE_DATE_FIELD: &str = "releaseDate";
