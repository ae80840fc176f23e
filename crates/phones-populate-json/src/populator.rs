//! JSON document populator.

use crate::error::PopulateError;
use phones_core::PhoneRecord;
use phones_generator::PhoneGenerator;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::info;

/// Default buffer size for document writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Layout of the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// Two-space indentation
    #[default]
    Pretty,
    /// No whitespace between tokens
    Compact,
}

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub rows_written: u64,
    /// Records listed as in stock by at least one shop.
    pub available_rows: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Output size in megabytes.
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_bytes as f64 / BYTES_PER_MB
    }
}

/// Populator that generates phone records and writes them as one document.
pub struct JsonPopulator {
    generator: PhoneGenerator,
    format: DocumentFormat,
}

impl JsonPopulator {
    /// Create a populator around a configured generator.
    pub fn new(generator: PhoneGenerator) -> Self {
        Self {
            generator,
            format: DocumentFormat::default(),
        }
    }

    /// Set the document layout.
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    /// Get a reference to the generator.
    pub fn generator(&self) -> &PhoneGenerator {
        &self.generator
    }

    /// Generate `count` records and write them to `output_path`.
    ///
    /// The whole collection is generated first and written in a single pass.
    /// The document is staged in a temporary file next to the destination
    /// and renamed into place, so a failed write leaves no partial document.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        let gen_start = Instant::now();
        let phones = self.generator.generate(count);
        let generation_duration = gen_start.elapsed();

        info!("Saving {} phones to '{}'...", phones.len(), output_path.display());

        let write_start = Instant::now();
        let file_size_bytes = write_document(&phones, output_path, self.format)?;
        let write_duration = write_start.elapsed();

        let metrics = PopulateMetrics {
            rows_written: phones.len() as u64,
            available_rows: phones.iter().filter(|p| p.is_available()).count() as u64,
            total_duration: start_time.elapsed(),
            generation_duration,
            write_duration,
            file_size_bytes,
        };

        info!(
            "Saved {} phones ({} in stock somewhere) in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.available_rows,
            metrics.total_duration,
            metrics.rows_per_second()
        );
        info!("File size: {:.2} MB", metrics.file_size_mb());

        Ok(metrics)
    }
}

/// Create the temporary file the document is staged in.
///
/// The file is opened with the same mode `File::create` uses (0o666 less the
/// process umask) so the renamed document is readable like any other file.
#[cfg(unix)]
fn stage_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .prefix(".phones")
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn stage_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    tempfile::Builder::new().prefix(".phones").tempfile_in(dir)
}

/// Write `phones` to `output_path` as one JSON array.
///
/// An existing document keeps its permissions. Returns the size of the
/// written file in bytes.
pub fn write_document<P: AsRef<Path>>(
    phones: &[PhoneRecord],
    output_path: P,
    format: DocumentFormat,
) -> Result<u64, PopulateError> {
    let output_path = output_path.as_ref();
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = stage_in(dir)?;
    if let Ok(existing) = std::fs::metadata(output_path) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    {
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, staged.as_file_mut());
        match format {
            DocumentFormat::Pretty => serde_json::to_writer_pretty(&mut writer, phones)?,
            DocumentFormat::Compact => serde_json::to_writer(&mut writer, phones)?,
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    staged.persist(output_path).map_err(|e| e.error)?;

    Ok(std::fs::metadata(output_path)?.len())
}
