//! Record synthesizer for phones-seed.
//!
//! This crate provides the [`PhoneGenerator`] which samples phone records
//! from a [`Catalog`](phones_core::Catalog). The random source is owned by
//! the generator and can be seeded so that two generators with the same
//! seed, catalog and reference date produce identical records.
//!
//! # Architecture
//!
//! ```text
//! Catalog (pools)
//!        │
//!        ▼
//! ┌─────────────────┐
//! │ PhoneGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! │  - index        │
//! │  - today        │
//! └────────┬────────┘
//!          │  assemble_phone(rng, catalog, index, today)
//!          ▼
//!     PhoneRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use phones_core::Catalog;
//! use phones_generator::PhoneGenerator;
//!
//! let mut generator = PhoneGenerator::new(Catalog::default(), Some(42)).unwrap();
//! let phones = generator.generate(3);
//! assert_eq!(phones.len(), 3);
//! assert!(phones[0].id.ends_with("-00001"));
//! ```

pub mod assembler;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use assembler::assemble_phone;
pub use generator::{GeneratorError, PhoneGenerator, PhoneIterator, DEFAULT_PROGRESS_INTERVAL};
