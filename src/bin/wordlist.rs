//! wordlist CLI
//!
//! Single-page table scrape: fetches one page (or reads a saved file),
//! pulls the first column out of every wikitable, and writes one title
//! per line.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use goodshelf::{
    config::Config,
    error::Result,
    pipeline,
    resolver,
    services::wordlist,
    utils::http,
};

/// wordlist - table title extractor
#[derive(Parser, Debug)]
#[command(
    name = "wordlist",
    version,
    about = "Extracts a word list from a page's tables"
)]
struct Cli {
    /// Page URL or local HTML file path
    source: String,

    /// Write the list to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

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

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let source = resolver::resolve_input(&cli.source, &config.scraper);
    let client = http::create_client(&config)?;
    let html = pipeline::fetch_html(&client, &source)?;

    let titles = wordlist::extract_titles(&html)?;
    log::info!("Extracted {} titles", titles.len());

    let body: String = titles.iter().map(|title| format!("{title}\n")).collect();
    match &cli.output {
        Some(path) => {
            fs::write(path, body)?;
            log::info!("Wrote {} titles to {}", titles.len(), path.display());
        }
        None => print!("{body}"),
    }

    Ok(())
}
