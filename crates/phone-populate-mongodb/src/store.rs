//! Store abstraction the loader writes through.
//!
//! [`MongoStore`] is the production store. [`MemoryStore`] keeps records in
//! process; dry runs use it, and so do tests that need a store without a
//! server.

use crate::config::LoaderConfig;
use crate::error::{PopulatorError, StoreError};
use crate::upsert::{count_documents, find_records, upsert_record};
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use phone_core::PhoneRecord;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Whether an upsert created a record or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// A keyed record store supporting idempotent upserts.
#[async_trait]
pub trait PhoneStore: Send + Sync {
    /// Insert the record, or replace every field of the record with the same id.
    async fn upsert(&self, record: &PhoneRecord) -> Result<UpsertOutcome, StoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Every stored record, ordered by id.
    async fn find_all(&self) -> Result<Vec<PhoneRecord>, StoreError>;

    /// Release the connection. Later operations fail with [`StoreError::Closed`].
    async fn close(&mut self);

    /// Human-readable target, used in log lines.
    fn describe(&self) -> String;
}

/// MongoDB-backed store for one collection.
pub struct MongoStore {
    client: Option<Client>,
    collection: Collection<Document>,
    target: String,
}

impl MongoStore {
    /// Connect and confirm the server answers a `ping`.
    ///
    /// The driver connects lazily, so without the ping an unreachable
    /// server would only surface on the first upsert.
    pub async fn connect(config: &LoaderConfig) -> Result<Self, PopulatorError> {
        let connection_error = |source| PopulatorError::Connection {
            uri: config.masked_uri(),
            source,
        };

        let mut options = ClientOptions::parse(config.connection_uri.as_str())
            .await
            .map_err(connection_error)?;
        if let Some(timeout) = config.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        let client = Client::with_options(options).map_err(connection_error)?;
        let database = client.database(&config.database_name);

        debug!("Pinging MongoDB at {}", config.masked_uri());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;

        let collection = database.collection::<Document>(&config.collection_name);

        Ok(Self {
            client: Some(client),
            collection,
            target: format!("{}.{}", config.database_name, config.collection_name),
        })
    }

    /// Collection handle, for callers that need raw access.
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.client.is_some() {
            Ok(())
        } else {
            Err(StoreError::Closed)
        }
    }
}

#[async_trait]
impl PhoneStore for MongoStore {
    async fn upsert(&self, record: &PhoneRecord) -> Result<UpsertOutcome, StoreError> {
        self.ensure_open()?;
        upsert_record(&self.collection, record).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.ensure_open()?;
        count_documents(&self.collection).await
    }

    async fn find_all(&self) -> Result<Vec<PhoneRecord>, StoreError> {
        self.ensure_open()?;
        find_records(&self.collection).await
    }

    async fn close(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
        }
    }

    fn describe(&self) -> String {
        format!("MongoDB {}", self.target)
    }
}

/// In-process store keyed by record id.
///
/// Clones share the same records, the way two connections to one database
/// see the same data. Closing a handle only closes that handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<BTreeMap<String, PhoneRecord>>>,
    closed: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Stored record for an id, if any.
    pub async fn get(&self, id: &str) -> Option<PhoneRecord> {
        self.records.lock().await.get(id).cloned()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed {
            Err(StoreError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PhoneStore for MemoryStore {
    async fn upsert(&self, record: &PhoneRecord) -> Result<UpsertOutcome, StoreError> {
        self.ensure_open()?;
        let previous = self
            .records
            .lock()
            .await
            .insert(record.id.clone(), record.clone());

        Ok(match previous {
            Some(_) => UpsertOutcome::Updated,
            None => UpsertOutcome::Inserted,
        })
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.ensure_open()?;
        Ok(self.records.lock().await.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<PhoneRecord>, StoreError> {
        self.ensure_open()?;
        Ok(self.records.lock().await.values().cloned().collect())
    }

    async fn close(&mut self) {
        self.closed = true;
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}
