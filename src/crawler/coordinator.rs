//! Crawl coordination - the page-range crawl loop
//!
//! This module runs one batch crawl from start to finish:
//! - Validating the configuration before any network activity
//! - Enumerating book links across the listing page range
//! - Fetching each detail page and building its record
//! - Isolating per-page and per-book failures so the batch keeps going
//! - Writing the collected records as the output JSON document
//!
//! The run moves through three phases. Enumerating walks the half-open
//! listing page range and accumulates detail links; a listing page that
//! fails to load is reported and the next page is tried. Building walks the
//! accumulated links in order; a link that redirects to the site's home
//! page is a removed book and is skipped silently, while fetch and
//! extraction failures are reported and skipped. Done writes whatever was
//! accumulated.

use crate::config::{validate, CrawlConfig};
use crate::crawler::book::{build_book_record, BookRecord};
use crate::crawler::fetcher::{build_asset_client, build_page_client, fetch_document};
use crate::crawler::listing::collect_book_links;
use crate::crawler::observer::CrawlObserver;
use crate::output::{write_records, CrawlReport};
use crate::Result;
use reqwest::Client;
use url::Url;

/// Runs one crawl over the configured listing page range
pub struct Coordinator<'obs> {
    config: CrawlConfig,
    page_client: Client,
    asset_client: Client,
    observer: &'obs dyn CrawlObserver,
}

impl<'obs> Coordinator<'obs> {
    /// Creates a new coordinator
    ///
    /// Validates the configuration and builds both HTTP clients. A
    /// validation failure means no network request is made and no output
    /// file is written.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawl configuration
    /// * `observer` - Receiver for per-page and per-book outcomes
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(TululuError::Config)` - The configuration is invalid
    pub fn new(config: CrawlConfig, observer: &'obs dyn CrawlObserver) -> Result<Self> {
        validate(&config)?;

        let page_client = build_page_client()?;
        let asset_client = build_asset_client()?;

        Ok(Self {
            config,
            page_client,
            asset_client,
            observer,
        })
    }

    /// Runs the crawl and writes the output document
    ///
    /// Always attempts to write the accumulated records, even when every
    /// page failed; only a write failure at the end surfaces as an error.
    pub async fn run(&mut self) -> Result<CrawlReport> {
        tracing::info!(
            "Crawling listing pages {}..{}",
            self.config.start_page,
            self.config.end_page
        );

        let mut report = CrawlReport::new();

        let links = self.enumerate_links(&mut report).await;
        tracing::info!("Enumerated {} book links", links.len());

        let records = self.build_records(&links, &mut report).await;

        write_records(&records, &self.config.output_path())?;
        tracing::info!(
            "Wrote {} records to {}",
            records.len(),
            self.config.output_path().display()
        );

        report.finish();
        Ok(report)
    }

    /// Enumerating phase: collects detail links across the page range
    ///
    /// Walks `start_page..end_page` and appends each listing page's links.
    /// One bad listing page never aborts the run; the failure is reported
    /// and the loop continues.
    async fn enumerate_links(&self, report: &mut CrawlReport) -> Vec<Url> {
        let mut links = Vec::new();

        for page in self.config.start_page..self.config.end_page {
            match self.fetch_listing(page).await {
                Ok(found) => {
                    tracing::info!("Listing page {}: {} book links", page, found.len());
                    report.listing_pages_visited += 1;
                    report.links_discovered += found.len() as u64;
                    links.extend(found);
                }
                Err(e) => {
                    report.listing_pages_failed += 1;
                    self.observer.listing_failed(page, &e);
                }
            }
        }

        links
    }

    /// Fetches one listing page's links
    async fn fetch_listing(&self, page: u32) -> Result<Vec<Url>> {
        let url = self.config.listing_url(page)?;
        collect_book_links(&self.page_client, &url, &self.config.base_url).await
    }

    /// Building phase: fetches each detail link and assembles its record
    ///
    /// Links are processed in enumeration order. A link whose final
    /// response URL is the site home page is a removed book and is skipped
    /// without an error report. Fetch and extraction failures are reported
    /// and skipped, so one broken book page never aborts the batch.
    async fn build_records(&self, links: &[Url], report: &mut CrawlReport) -> Vec<BookRecord> {
        let home = self.config.home_url();
        let mut records = Vec::new();

        for link in links {
            let page = match fetch_document(&self.page_client, link).await {
                Ok(page) => page,
                Err(e) => {
                    report.books_failed += 1;
                    self.observer.book_failed(link, &e);
                    continue;
                }
            };

            if page.final_url == home {
                report.books_removed += 1;
                self.observer.book_removed(link);
                continue;
            }

            match build_book_record(&page, link, &self.config, &self.asset_client).await {
                Ok(record) => {
                    report.books_built += 1;
                    self.observer.book_built(link, &record);
                    records.push(record);
                }
                Err(e) => {
                    report.books_failed += 1;
                    self.observer.book_failed(link, &e);
                }
            }
        }

        records
    }
}

/// Runs the crawl with an injected observer
///
/// # Arguments
///
/// * `config` - The crawl configuration
/// * `observer` - Receiver for per-page and per-book outcomes
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Aggregate counts for the finished run
/// * `Err(TululuError)` - Invalid configuration, or the output document
///   could not be written
pub async fn run_crawl(config: CrawlConfig, observer: &dyn CrawlObserver) -> Result<CrawlReport> {
    let mut coordinator = Coordinator::new(config, observer)?;
    coordinator.run().await
}
