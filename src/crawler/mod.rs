//! Crawler module for listing enumeration and book collection
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching for pages and assets
//! - Field extraction from detail-page markup
//! - Listing-page enumeration
//! - Book record assembly
//! - Overall crawl coordination with per-page failure isolation

mod book;
mod coordinator;
mod extract;
mod fetcher;
mod listing;
mod observer;

pub use book::{book_id_from_link, build_book_record, BookRecord};
pub use coordinator::{run_crawl, Coordinator};
pub use extract::{parse_book_page, BookPage};
pub use fetcher::{build_asset_client, build_page_client, fetch_document, FetchedPage};
pub use listing::{collect_book_links, extract_book_links};
pub use observer::{CrawlObserver, LogObserver};

use crate::config::CrawlConfig;
use crate::output::CrawlReport;
use crate::Result;

/// Runs a complete crawl with the default logging observer
///
/// This is the main entry point for one batch run. It will:
/// 1. Validate the configuration
/// 2. Enumerate book links over the listing page range
/// 3. Fetch each book's detail page and download its assets
/// 4. Write the collected records as one JSON array
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Aggregate counts for the finished run
/// * `Err(TululuError)` - Invalid configuration, or the output document
///   could not be written
///
/// # Example
///
/// ```no_run
/// use std::path::PathBuf;
/// use tululu_dl::config::{default_base_url, CrawlConfig};
/// use tululu_dl::crawler::crawl;
///
/// # async fn example() -> tululu_dl::Result<()> {
/// let config = CrawlConfig {
///     start_page: 1,
///     end_page: 5,
///     skip_txt: false,
///     skip_images: false,
///     dest_folder: PathBuf::from("library"),
///     filename: "books.json".to_string(),
///     base_url: default_base_url()?,
/// };
///
/// let report = crawl(config).await?;
/// println!("{} records collected", report.books_built);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport> {
    run_crawl(config, &LogObserver).await
}
