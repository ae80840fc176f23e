//! CLI argument definitions for the JSON populator.

use crate::error::PopulateError;
use crate::populator::{DocumentFormat, JsonPopulator};
use chrono::NaiveDate;
use clap::Args;
use phones_core::{Catalog, CatalogError};
use phones_generator::{PhoneGenerator, DEFAULT_PROGRESS_INTERVAL};
use std::path::PathBuf;

/// Arguments for generating the phones document.
#[derive(Args, Clone, Debug)]
pub struct GeneratePhonesArgs {
    /// Number of phone records to generate
    #[arg(long, short = 'n', default_value = "7000", env = "PHONES_COUNT")]
    pub count: u64,

    /// Path of the JSON document to write
    #[arg(long, short = 'o', default_value = "phones.json", env = "PHONES_OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible output (omit for fresh data every run)
    #[arg(long, env = "PHONES_SEED")]
    pub seed: Option<u64>,

    /// YAML file overriding the built-in value pools
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Reference date that generated dates count back from (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Log a progress line every N records
    #[arg(
        long,
        default_value_t = DEFAULT_PROGRESS_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub progress_interval: u64,

    /// Write the document without indentation
    #[arg(long)]
    pub compact: bool,
}

impl GeneratePhonesArgs {
    /// Load the catalog file if one was given, else the built-in pools.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Ok(Catalog::default()),
        }
    }

    /// Document layout selected by the flags.
    pub fn format(&self) -> DocumentFormat {
        if self.compact {
            DocumentFormat::Compact
        } else {
            DocumentFormat::Pretty
        }
    }

    /// Build a populator configured by these arguments.
    pub fn populator(&self) -> Result<JsonPopulator, PopulateError> {
        let mut generator = PhoneGenerator::new(self.load_catalog()?, self.seed)?
            .with_progress_interval(self.progress_interval);
        if let Some(today) = self.today {
            generator = generator.with_today(today);
        }
        Ok(JsonPopulator::new(generator).with_format(self.format()))
    }
}

/// Arguments for exporting the built-in catalog.
#[derive(Args, Clone, Debug)]
pub struct CatalogArgs {
    /// Write the YAML to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}
