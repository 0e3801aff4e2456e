//! Timestamp value generators.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Draw a whole-day offset in `0..=max_days`.
///
/// This is the deterministic half of a release date.
pub fn generate_offset_days<R: Rng>(rng: &mut R, max_days: i64) -> i64 {
    rng.gen_range(0..=max_days.max(0))
}

/// Generate a timestamp at most `max_days` whole days before `reference`.
pub fn generate_date_within<R: Rng>(
    rng: &mut R,
    reference: DateTime<Utc>,
    max_days: i64,
) -> DateTime<Utc> {
    reference - Duration::days(generate_offset_days(rng, max_days))
}
