//! Calendar date generators.

use chrono::{Days, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a date a random number of days before `today`.
///
/// The offset is drawn uniformly from `days_ago` (inclusive).
pub fn days_before<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    days_ago: RangeInclusive<u64>,
) -> NaiveDate {
    let offset = rng.gen_range(days_ago);
    today.checked_sub_days(Days::new(offset)).unwrap_or(today)
}
