//! Read-back verifier for phone-seed.
//!
//! Regenerates the batch a populate run wrote (same seed, same count) and
//! checks every record against what the store holds. `releaseDate` is left
//! out of the comparison because it moves with the clock.
//!
//! # Example
//!
//! ```ignore
//! use phone_generator::PhoneGenerator;
//! use phone_verify_mongodb::verify_batch;
//!
//! let expected = PhoneGenerator::new(8).generate(12);
//! let report = verify_batch(&store, &expected).await?;
//! assert!(report.is_success(), "{}", report.summary());
//! ```

pub mod args;
pub mod compare;
pub mod error;
pub mod report;
pub mod verifier;

pub use args::VerifyArgs;
pub use compare::{compare_records, IGNORED_FIELDS};
pub use error::VerifyError;
pub use report::{FieldMismatch, MismatchInfo, MissingInfo, VerificationReport};
pub use verifier::{verify_batch, verify_collection};
