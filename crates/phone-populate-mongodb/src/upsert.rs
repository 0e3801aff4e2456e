//! Per-record upsert logic for MongoDB population.

use crate::error::StoreError;
use crate::store::UpsertOutcome;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb_types::{document_to_phone, phone_to_document, ID_FIELD};
use phone_core::PhoneRecord;

/// Filter matching the stored document for a record id.
pub fn id_filter(id: &str) -> Document {
    doc! { ID_FIELD: id }
}

/// Update that overwrites every field of the record.
pub fn set_update(document: Document) -> Document {
    doc! { "$set": document }
}

/// Insert the record if no document has its id, otherwise overwrite it.
pub async fn upsert_record(
    collection: &Collection<Document>,
    record: &PhoneRecord,
) -> Result<UpsertOutcome, StoreError> {
    let document = phone_to_document(record)?;

    let result = collection
        .update_one(id_filter(&record.id), set_update(document))
        .upsert(true)
        .await?;

    Ok(if result.upserted_id.is_some() {
        UpsertOutcome::Inserted
    } else {
        UpsertOutcome::Updated
    })
}

/// Get the document count for a collection.
pub async fn count_documents(collection: &Collection<Document>) -> Result<u64, StoreError> {
    let count = collection.count_documents(doc! {}).await?;
    Ok(count)
}

/// Read every stored record, ordered by id.
pub async fn find_records(
    collection: &Collection<Document>,
) -> Result<Vec<PhoneRecord>, StoreError> {
    let documents: Vec<Document> = collection
        .find(doc! {})
        .sort(doc! { ID_FIELD: 1 })
        .await?
        .try_collect()
        .await?;

    documents
        .iter()
        .map(|doc| document_to_phone(doc).map_err(StoreError::from))
        .collect()
}
