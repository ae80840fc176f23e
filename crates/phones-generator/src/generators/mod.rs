//! Sampling primitives shared by the record assembler.
//!
//! Every function takes the random source explicitly so callers control
//! seeding.

pub mod date;
pub mod numeric;
pub mod sample;

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one value uniformly from a pool.
///
/// Pools are validated non-empty before generation starts; an empty pool
/// yields the type's default rather than panicking.
pub fn pick<R: Rng, T: Clone + Default>(rng: &mut R, pool: &[T]) -> T {
    pool.choose(rng).cloned().unwrap_or_default()
}
