use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use frio_core::config::PathsConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Consolidates corridor monitoring exports into a single delimited file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the JSON configuration file holding the input and output
    /// directories.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = PathsConfig::load(&cli.config)
        .context("configuration could not be loaded; no files were processed")?;
    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "Configuration loaded"
    );

    let summary = frio_core::pipeline::run(&config)?;

    println!("\n--- Run Summary ---");
    println!("  Files found:     {}", summary.files_found);
    println!("  Files processed: {}", summary.files_processed);
    println!("  Files skipped:   {}", summary.files_skipped);
    println!("  Rows written:    {}", summary.rows_written);
    println!("  Rows discarded:  {}", summary.rows_discarded);
    if !summary.output_written {
        println!("  No output file was produced.");
    }
    Ok(())
}
