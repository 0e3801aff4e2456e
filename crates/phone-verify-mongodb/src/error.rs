//! Error types for the verifier.

use phone_populate_mongodb::{PopulatorError, StoreError};
use thiserror::Error;

/// Errors that can occur during verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Could not connect to the store.
    #[error(transparent)]
    Connection(#[from] PopulatorError),

    /// Reading stored records failed.
    #[error("Failed to read stored records: {0}")]
    Store(#[from] StoreError),

    /// A record could not be turned into JSON for comparison.
    #[error("Failed to serialize record for comparison: {0}")]
    Serialize(#[from] serde_json::Error),
}
