//! Command-line interface for phones-seed
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 7000 phones into ./phones.json
//! phones-seed generate
//!
//! # Reproducible output with custom pools
//! phones-seed generate \
//!   --count 500 \
//!   --output data/phones.json \
//!   --seed 42 \
//!   --catalog my_catalog.yaml
//! ```
//!
//! ## Catalog
//! ```bash
//! # Dump the built-in pools as a starting point for --catalog
//! phones-seed catalog --output my_catalog.yaml
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use phones_core::Catalog;
use phones_populate_json::{CatalogArgs, GeneratePhonesArgs};

#[derive(Parser)]
#[command(name = "phones-seed")]
#[command(about = "Generate synthetic mobile-phone catalog data as a JSON document")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate phone records and write them as one JSON document
    Generate {
        #[command(flatten)]
        args: GeneratePhonesArgs,
    },

    /// Print the built-in value pools as YAML
    Catalog {
        #[command(flatten)]
        args: CatalogArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args)?,
        Commands::Catalog { args } => run_catalog(args)?,
    }

    Ok(())
}

fn run_generate(args: GeneratePhonesArgs) -> anyhow::Result<()> {
    let mut populator = args.populator().with_context(|| match &args.catalog {
        Some(path) => format!("Failed to load catalog from {path:?}"),
        None => "Failed to initialize generator".to_string(),
    })?;

    tracing::info!(
        "Generating {} phones into {:?} (seed={:?}, reference date {})",
        args.count,
        args.output,
        args.seed,
        populator.generator().today()
    );

    let metrics = populator
        .populate(&args.output, args.count)
        .with_context(|| format!("Failed to write phones document to {:?}", args.output))?;

    tracing::info!(
        "Done: {} phones, {} bytes in {:?}",
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.total_duration
    );

    Ok(())
}

fn run_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let yaml = Catalog::default()
        .to_yaml()
        .context("Failed to render catalog")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, yaml)
                .with_context(|| format!("Failed to write catalog to {path:?}"))?;
            tracing::info!("Wrote catalog to {:?}", path);
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
