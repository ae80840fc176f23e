//! Error types for the JSON populator.

use phones_core::CatalogError;
use phones_generator::GeneratorError;
use thiserror::Error;

/// Errors that can occur while populating the JSON document.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Generator could not be created.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
