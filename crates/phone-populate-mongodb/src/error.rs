//! Error types for the MongoDB loader.

use crate::config::ConfigError;
use mongodb_types::ConversionError;
use thiserror::Error;

/// Errors raised by a [`crate::PhoneStore`] operation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// MongoDB query error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// Record could not be converted to or from BSON.
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// The store was used after it was closed.
    #[error("Store connection is closed")]
    Closed,
}

/// Errors that can occur while loading a batch.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// Configuration was rejected before any connection attempt.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The store could not be reached. No records were written.
    #[error("Failed to connect to MongoDB at {uri}: {source}")]
    Connection {
        /// Connection URI with the password masked.
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// An upsert failed. The rest of the batch was abandoned; records
    /// upserted before the failure remain in the store.
    #[error("Failed to upsert record '{id}' after {upserted_before} successful upserts: {source}")]
    Write {
        id: String,
        upserted_before: u64,
        #[source]
        source: StoreError,
    },

    /// A store operation outside the upsert loop failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The populator was used after its connection was released.
    #[error("Loader is disconnected")]
    Disconnected,
}

impl PopulatorError {
    /// Whether the failure happened before any record could be written.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Connection { .. })
    }
}
