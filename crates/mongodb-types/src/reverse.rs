//! Reverse conversion: BSON Document → PhoneRecord.

use crate::{ConversionError, RELEASE_DATE_FIELD};
use bson::{Bson, Document};
use phone_core::PhoneRecord;

/// Convert a stored document back into a record.
///
/// The server-assigned `_id` is ignored. `releaseDate` may be either a BSON
/// datetime (as written by this crate) or an RFC 3339 string.
pub fn document_to_phone(doc: &Document) -> Result<PhoneRecord, ConversionError> {
    let mut doc = doc.clone();
    doc.remove("_id");

    match doc.get(RELEASE_DATE_FIELD) {
        Some(Bson::DateTime(dt)) => {
            let rfc3339 = dt.to_chrono().to_rfc3339();
            doc.insert(RELEASE_DATE_FIELD, rfc3339);
        }
        Some(Bson::String(_)) => {}
        Some(other) => {
            return Err(ConversionError::UnexpectedType {
                field: RELEASE_DATE_FIELD,
                found: other.element_type(),
            })
        }
        None => return Err(ConversionError::MissingField(RELEASE_DATE_FIELD)),
    }

    Ok(bson::from_document(doc)?)
}
