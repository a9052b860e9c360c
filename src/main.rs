//! Tululu-dl main entry point
//!
//! This is the command-line interface for the tululu.org batch book scraper.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tululu_dl::config::{default_base_url, CrawlConfig};
use tululu_dl::crawler::crawl;
use tululu_dl::output::print_report;

/// Tululu-dl: a batch scraper for the tululu.org book library
///
/// Tululu-dl walks a range of science-fiction catalog listing pages,
/// downloads every listed book's metadata, text and cover image, and
/// stores the collected records as one JSON array.
#[derive(Parser, Debug)]
#[command(name = "tululu-dl")]
#[command(version = "1.0.0")]
#[command(about = "Batch scraper for the tululu.org book library", long_about = None)]
struct Cli {
    /// First listing page to download (1-based)
    #[arg(long = "start_page", default_value_t = 1)]
    start_page: u32,

    /// Listing page at which to stop downloading (exclusive)
    #[arg(long = "end_page")]
    end_page: u32,

    /// Name of the JSON file the collected records are written to
    #[arg(long, default_value = "books.json")]
    filename: String,

    /// Skip downloading book text files
    #[arg(long = "skip_txt")]
    skip_txt: bool,

    /// Skip downloading cover images
    #[arg(long = "skip_images")]
    skip_images: bool,

    /// Directory for downloaded files and the output document
    #[arg(long = "dest_folder", default_value = "")]
    dest_folder: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let base_url = match default_base_url() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Invalid site base URL: {}", e);
            return;
        }
    };

    let config = CrawlConfig {
        start_page: cli.start_page,
        end_page: cli.end_page,
        skip_txt: cli.skip_txt,
        skip_images: cli.skip_images,
        dest_folder: PathBuf::from(cli.dest_folder),
        filename: cli.filename,
        base_url,
    };

    tracing::info!(
        "Downloading listing pages {}..{} into {}",
        config.start_page,
        config.end_page,
        config.output_path().display()
    );

    // Failures surface through the log only; the process exits normally
    // either way.
    match crawl(config).await {
        Ok(report) => print_report(&report),
        Err(e) => tracing::error!("Crawl failed: {}", e),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("tululu_dl=info,warn"),
            1 => EnvFilter::new("tululu_dl=debug,info"),
            2 => EnvFilter::new("tululu_dl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
