//! JSON document populator for phones-seed.
//!
//! This crate generates a collection of phone records and writes it as one
//! JSON array, preserving field order and non-ASCII text.
//!
//! # Example
//!
//! ```ignore
//! use phones_core::Catalog;
//! use phones_generator::PhoneGenerator;
//! use phones_populate_json::JsonPopulator;
//!
//! let generator = PhoneGenerator::new(Catalog::default(), Some(42))?;
//! let mut populator = JsonPopulator::new(generator);
//!
//! let metrics = populator.populate("phones.json", 7000)?;
//! println!("Wrote {} phones ({:.2} MB)", metrics.rows_written, metrics.file_size_mb());
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{CatalogArgs, GeneratePhonesArgs};
pub use error::PopulateError;
pub use populator::{write_document, DocumentFormat, JsonPopulator, PopulateMetrics};
