//! Phone generation integration tests.
//!
//! These tests drive the generate -> write -> parse workflow end to end:
//! 1. Build a generator from a catalog with a fixed seed and reference date
//! 2. Write the collection as a JSON document into a temp directory
//! 3. Parse the document back and check record-level invariants

mod document;
mod properties;

use chrono::NaiveDate;
use phones_core::Catalog;
use phones_generator::PhoneGenerator;

const SEED: u64 = 42;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn seeded_generator(catalog: Catalog) -> PhoneGenerator {
    PhoneGenerator::new(catalog, Some(SEED))
        .unwrap()
        .with_today(today())
}
