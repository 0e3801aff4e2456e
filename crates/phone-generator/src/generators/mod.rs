//! Individual value generators.
//!
//! Each function draws exactly one value from the RNG (or none, for
//! patterns), so the order of calls in the record generator fixes which
//! batch a seed produces.

pub mod choice;
pub mod numeric;
pub mod pattern;
pub mod timestamp;

pub use choice::generate_one_of;
pub use numeric::{generate_int_range, generate_rounded_float_range};
pub use pattern::generate_pattern;
pub use timestamp::{generate_date_within, generate_offset_days};
