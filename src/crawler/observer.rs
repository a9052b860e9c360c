//! Observer seam for crawl events
//!
//! The coordinator reports every failure-isolation decision through an
//! injected [`CrawlObserver`] instead of logging directly. Production runs
//! use [`LogObserver`], which forwards events to `tracing`; tests inject a
//! recording implementation and assert on the isolation behavior without
//! capturing process-wide log state.

use crate::crawler::book::BookRecord;
use crate::TululuError;
use url::Url;

/// Receiver for the coordinator's per-page and per-book outcomes
pub trait CrawlObserver {
    /// A listing page could not be fetched; the crawl continues with the
    /// next page.
    fn listing_failed(&self, page: u32, error: &TululuError);

    /// A detail link resolved to the site's home page, meaning the book has
    /// been removed; the link is skipped.
    fn book_removed(&self, link: &Url);

    /// A detail page failed to fetch or extract; the link is skipped.
    fn book_failed(&self, link: &Url, error: &TululuError);

    /// A record was successfully assembled and added to the result.
    fn book_built(&self, link: &Url, record: &BookRecord);
}

/// Observer that reports crawl events through `tracing`
///
/// Failures are logged at error severity. Removed books are routine on
/// this site and stay at debug so they do not drown normal output.
pub struct LogObserver;

impl CrawlObserver for LogObserver {
    fn listing_failed(&self, page: u32, error: &TululuError) {
        tracing::error!("Failed to load listing page {}: {}", page, error);
    }

    fn book_removed(&self, link: &Url) {
        tracing::debug!("Book at {} has been removed from the site", link);
    }

    fn book_failed(&self, link: &Url, error: &TululuError) {
        tracing::error!("Failed to process book page {}: {}", link, error);
    }

    fn book_built(&self, link: &Url, record: &BookRecord) {
        tracing::info!(
            "Collected \"{}\" by {} from {}",
            record.title,
            record.author,
            link
        );
    }
}
