//! Core types for the phone-seed framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the MongoDB populator and the verifier:
//!
//! - [`PhoneRecord`] - The unit of persisted data, with its nested spec groups
//! - [`domain`] - The fixed value domains every generated field is drawn from
//!
//! # Architecture
//!
//! ```text
//! phone-core (this crate)
//!    │
//!    ├─── phone-generator         (produces PhoneRecords from a seeded RNG)
//!    │
//!    ├─── mongodb-types           (PhoneRecord <-> BSON Document)
//!    ├─── phone-populate-mongodb  (upserts PhoneRecords by id)
//!    └─── phone-verify-mongodb    (compares stored documents to a batch)
//! ```
//!
//! # Example
//!
//! ```rust
//! use phone_core::{domain, PhoneRecord};
//!
//! assert_eq!(domain::MANUFACTURERS.len(), 5);
//! assert_eq!(PhoneRecord::id_for("Google", 3), "google-x3-pro");
//! ```

pub mod domain;
pub mod record;

pub use record::{
    Battery, Benchmarks, Camera, CarrierCompatibility, Connectivity, Display, Images, Performance,
    PhoneRecord, Ram, Sensors, Specs,
};
