//! Numeric value generators.

use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    rng.gen_range(range)
}

/// Generate a random float in the given range (inclusive), rounded to
/// `decimals` places.
///
/// The rounded value is clamped back into the range so rounding can never
/// step outside it.
pub fn generate_rounded_float_range<R: Rng>(
    rng: &mut R,
    range: RangeInclusive<f64>,
    decimals: i32,
) -> f64 {
    let (min, max) = (*range.start(), *range.end());
    let factor = 10f64.powi(decimals);
    let value = rng.gen_range(range);
    ((value * factor).round() / factor).clamp(min, max)
}
