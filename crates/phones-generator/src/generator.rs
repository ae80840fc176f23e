//! Collection generator producing phone records in index order.

use crate::assembler::assemble_phone;
use chrono::{NaiveDate, Utc};
use phones_core::{Catalog, CatalogError, PhoneRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Records between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 500;

/// Upper bound on records reserved up front by [`PhoneGenerator::generate`].
const MAX_PREALLOCATED: usize = 64 * 1024;

/// Capacity to reserve for `count` records; larger collections grow on push.
fn initial_capacity(count: u64) -> usize {
    usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(MAX_PREALLOCATED)
}

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Catalog failed validation
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Generator that produces phone records with 1-based sequential indices.
///
/// With a seed the output is reproducible for a fixed catalog and reference
/// date; without one the RNG is seeded from OS entropy.
pub struct PhoneGenerator {
    /// Pools records are sampled from
    catalog: Catalog,
    /// Random source shared by every record
    rng: StdRng,
    /// Index of the last generated record
    index: u64,
    /// Reference date that release, review and article dates count back from
    today: NaiveDate,
    /// Records between progress log lines
    progress_interval: u64,
}

impl PhoneGenerator {
    /// Create a generator over a catalog, validating the catalog first.
    pub fn new(catalog: Catalog, seed: Option<u64>) -> Result<Self, GeneratorError> {
        catalog.validate()?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            "Catalog: {} brands, {} processors, {} features",
            catalog.brands.len(),
            catalog.processors.len(),
            catalog.features.len()
        );

        Ok(Self {
            catalog,
            rng,
            index: 0,
            today: Utc::now().date_naive(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        })
    }

    /// Set the reference date that generated dates count back from.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Set how many records pass between progress log lines.
    ///
    /// An interval of zero is treated as one.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Reference date used for generated dates.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Get a reference to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the next record.
    pub fn next_phone(&mut self) -> PhoneRecord {
        self.index += 1;
        assemble_phone(&mut self.rng, &self.catalog, self.index, self.today)
    }

    /// Lazily generate `count` records.
    pub fn phones(&mut self, count: u64) -> PhoneIterator<'_> {
        PhoneIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate `count` records in index order, logging progress.
    pub fn generate(&mut self, count: u64) -> Vec<PhoneRecord> {
        info!("Generating {} phones...", count);

        let interval = self.progress_interval;
        let mut phones = Vec::with_capacity(initial_capacity(count));
        for (i, phone) in self.phones(count).enumerate() {
            phones.push(phone);
            let done = i as u64 + 1;
            if done % interval == 0 {
                info!("Generated {} phones...", done);
            }
        }

        phones
    }
}

/// Iterator that lazily generates phone records.
pub struct PhoneIterator<'a> {
    generator: &'a mut PhoneGenerator,
    remaining: u64,
}

impl Iterator for PhoneIterator<'_> {
    type Item = PhoneRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_phone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PhoneIterator<'_> {}
