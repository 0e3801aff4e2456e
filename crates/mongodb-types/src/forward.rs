//! Forward conversion: PhoneRecord → BSON Document.

use crate::{ConversionError, RELEASE_DATE_FIELD};
use bson::{Bson, DateTime as BsonDateTime, Document};
use phone_core::PhoneRecord;

/// Wrapper for a phone document that can be written to MongoDB.
#[derive(Debug, Clone)]
pub struct PhoneDocument(pub Document);

impl PhoneDocument {
    /// Get the inner BSON document.
    pub fn into_inner(self) -> Document {
        self.0
    }

    /// Get a reference to the inner BSON document.
    pub fn as_inner(&self) -> &Document {
        &self.0
    }
}

impl TryFrom<&PhoneRecord> for PhoneDocument {
    type Error = ConversionError;

    fn try_from(record: &PhoneRecord) -> Result<Self, Self::Error> {
        let mut doc = bson::to_document(record)?;

        // serde writes the timestamp as an RFC 3339 string; store a real datetime
        doc.insert(
            RELEASE_DATE_FIELD,
            Bson::DateTime(BsonDateTime::from_chrono(record.release_date)),
        );

        Ok(PhoneDocument(doc))
    }
}

/// Convert a record into the document stored for it.
pub fn phone_to_document(record: &PhoneRecord) -> Result<Document, ConversionError> {
    PhoneDocument::try_from(record).map(PhoneDocument::into_inner)
}
