//! goodshelf CLI
//!
//! Local execution entry point: reads one shelf reference (user id,
//! shelf URL, or saved HTML file) and writes the extracted records to
//! stdout as a JSON array. Diagnostics go to the logger on stderr.

use std::path::PathBuf;

use clap::Parser;
use goodshelf::{
    config::Config,
    error::{AppError, Result},
    pipeline,
};

/// goodshelf - Goodreads shelf extractor
#[derive(Parser, Debug)]
#[command(
    name = "goodshelf",
    version,
    about = "Extracts book records from a Goodreads shelf"
)]
struct Cli {
    /// Goodreads user id, 'read' shelf URL, or local HTML file path
    shelf: String,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rows to request per page (overrides the config value)
    #[arg(long)]
    per_page: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(per_page) = cli.per_page {
        config.scraper.per_page = per_page;
    }
    config.validate()?;

    let records = match pipeline::run(&cli.shelf, &config) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Extraction failed: {e}");
            if let AppError::Status { status, .. } = &e {
                if *status == 403 {
                    log::error!(
                        "The site may be blocking automated requests. Workaround: open the \
                         shelf in your browser while logged in, use File -> Save Page As... \
                         (HTML only), and run this tool on the saved file instead."
                    );
                }
            }
            return Err(e);
        }
    };

    log::info!("Extracted {} records", records.len());
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
