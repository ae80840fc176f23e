//! Numeric value generators.

use rand::Rng;

/// Generate a random float in the given range (inclusive), rounded to one
/// decimal place.
pub fn float_tenths<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    round_tenths(rng.gen_range(min..=max))
}

/// Round to one decimal place.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
