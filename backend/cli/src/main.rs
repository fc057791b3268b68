mod config;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use shelfscan_core::{ProductRecord, ScanError};
use shelfscan_media::{load_image, prepare_for_submission};
use shelfscan_report::write_report;
use shelfscan_understanding::{extract_record, VisionRuntime};

use config::Config;

#[derive(Parser)]
#[command(name = "shelfscan")]
#[command(about = "Shelfscan — product and produce analysis from photos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one photo and write its report row
    Analyze {
        /// Path to the product or produce photo
        image: PathBuf,

        /// Report artifact path (overrides SHELFSCAN_REPORT)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Also print the raw model output
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    // One-time vision runtime initialization. A bad provider setup is
    // fatal here, before any command runs.
    let runtime = VisionRuntime::initialize(config.provider()?)?;
    info!(provider = runtime.provider_name(), "Vision runtime initialized");

    match cli.command {
        Commands::Analyze { image, report, raw } => {
            let report_path = report.unwrap_or_else(|| config.report_path.clone());
            match analyze(runtime, &image, &report_path, raw).await {
                Ok(record) => print_record(&record),
                Err(ScanError::InvalidInput(reason)) => {
                    // Recoverable input problem: no record, no artifact.
                    eprintln!("cannot analyze: {reason}");
                }
                Err(err) => {
                    error!(error = %err, "Image processing failed");
                    eprintln!("an error occurred during image processing");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Run the full pipeline for one image: load, preprocess, describe,
/// extract, report.
async fn analyze(
    runtime: &VisionRuntime,
    image: &Path,
    report_path: &Path,
    raw: bool,
) -> Result<ProductRecord, ScanError> {
    let payload = load_image(image)?;
    let prepared = prepare_for_submission(&payload.data)?;

    let text = runtime
        .analyze(&prepared, "image/png")
        .await
        .map_err(|e| ScanError::Provider {
            provider: runtime.provider_name().to_string(),
            message: e.to_string(),
        })?;

    if raw {
        println!("{text}\n");
    }

    let record = extract_record(&text);
    write_report(report_path, &record)?;
    Ok(record)
}

fn print_record(record: &ProductRecord) {
    println!("Product Name:    {}", record.name);
    println!("Category:        {}", record.category);
    println!("Quantity:        {}", record.quantity);
    println!("Count:           {}", record.count);
    println!("Expiry Date:     {}", record.expiry_date);
    println!("Freshness Index: {}", record.freshness_index);
    println!("Shelf Life:      {}", record.shelf_life);
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfscan_understanding::VisionProvider;

    #[tokio::test]
    async fn missing_image_writes_no_artifact() {
        let runtime = VisionRuntime::initialize(VisionProvider::gemini("test-key")).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");

        let err = analyze(runtime, Path::new("/no/such/photo.png"), &report, false)
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
        assert!(!report.exists());
    }
}
