//! Core types for the phones-seed data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the JSON populator:
//!
//! - [`PhoneRecord`] and its nested groups - the shape of one generated phone
//! - [`Category`] - price tier derived from the USD base price
//! - [`Prices`] and [`Marketplace`] - currency conversions and shop listings
//! - [`phone_id`] - identifier builder
//! - [`Catalog`] - the value pools records are sampled from
//!
//! # Architecture
//!
//! ```text
//! phones-core (this crate)
//!    │
//!    ├─── phones-generator      (samples records from a Catalog)
//!    │
//!    └─── phones-populate-json  (writes records as one JSON document)
//! ```

pub mod catalog;
pub mod category;
pub mod id;
pub mod pricing;
pub mod record;
pub mod urls;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError, SubsetRange};
pub use category::Category;
pub use id::phone_id;
pub use pricing::{Currency, Marketplace, Prices, MARKETPLACES};
pub use record::{
    Article, Battery, Camera, Dimensions, Display, FrontCamera, PhoneRecord, Processor, Ratings,
    RearCamera, Review, Shop, Specs,
};
pub use urls::{encode_query_value, placeholder_image};
