//! Mock phone record generator for phone-seed.
//!
//! This crate provides the `PhoneGenerator` which produces deterministic
//! phone records from a seeded RNG. The generator owns its RNG, so two
//! generators built from the same seed never interfere with each other.
//!
//! # Architecture
//!
//! ```text
//!   seed / caller-built Rng
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   PhoneGenerator     │
//! │                      │
//! │  - rng (StdRng)      │
//! │  - index (1-based)   │
//! │  - reference_time    │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    PhoneRecord { id, name, manufacturer, releaseDate, price, specs, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use phone_generator::PhoneGenerator;
//!
//! let mut generator = PhoneGenerator::new(8);
//! let batch = generator.generate(12);
//! assert_eq!(batch.len(), 12);
//! assert!(batch[0].id.ends_with("-x1-pro"));
//! ```
//!
//! # Determinism
//!
//! Every field is a pure function of the seed and the index, except
//! `releaseDate`, which is `reference_time - offset`. The offset is drawn
//! from the RNG; the reference time defaults to the construction instant
//! and can be pinned with [`PhoneGenerator::with_reference_time`].

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{PhoneGenerator, PhoneRecordIterator, DEFAULT_PHONE_COUNT, DEFAULT_SEED};
