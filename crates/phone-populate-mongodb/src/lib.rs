//! MongoDB loader for phone-seed.
//!
//! Upserts generated [`phone_core::PhoneRecord`]s into a MongoDB collection,
//! keyed on the record `id`, so loading the same batch twice leaves the
//! collection exactly as loading it once.
//!
//! # Lifecycle
//!
//! ```text
//! Disconnected → Connecting → Connected → (Upserting)* → Disconnected
//! ```
//!
//! A failed `ping` while connecting ends in `Disconnected` with nothing
//! written. A failed upsert ends the batch; [`run_batch`] and
//! [`load_batch`] close the connection either way.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod populator;
pub mod store;
pub mod upsert;

pub use args::{MongoDBConnectionArgs, MongoDBPopulateArgs};
pub use config::{parse_duration, ConfigError, LoaderConfig, DEFAULT_COLLECTION};
pub use error::{PopulatorError, StoreError};
pub use logging::mask_connection_password;
pub use populator::{load_batch, run_batch, LoaderState, PhonePopulator, PopulateMetrics};
pub use store::{MemoryStore, MongoStore, PhoneStore, UpsertOutcome};
