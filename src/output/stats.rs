//! Run summary for a finished crawl
//!
//! The coordinator fills a [`CrawlReport`] with aggregate counts while it
//! runs; the binary prints it at the end of the run. The report is not part
//! of the JSON output document.

use chrono::{DateTime, Utc};

/// Aggregate counts and timestamps for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished; `None` while still running
    pub finished_at: Option<DateTime<Utc>>,

    /// Listing pages fetched successfully
    pub listing_pages_visited: u64,

    /// Listing pages skipped after a fetch failure
    pub listing_pages_failed: u64,

    /// Detail links found across all listing pages, duplicates included
    pub links_discovered: u64,

    /// Records assembled and written to the output document
    pub books_built: u64,

    /// Links skipped because the site redirected to its home page
    pub books_removed: u64,

    /// Links skipped after a fetch or extraction failure
    pub books_failed: u64,
}

impl CrawlReport {
    /// Creates a report stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            listing_pages_visited: 0,
            listing_pages_failed: 0,
            links_discovered: 0,
            books_built: 0,
            books_removed: 0,
            books_failed: 0,
        }
    }

    /// Stamps the report with the finish time
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Returns the run duration in whole seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Returns how many detail links were attempted
    pub fn books_attempted(&self) -> u64 {
        self.books_built + self.books_removed + self.books_failed
    }

    /// Returns the share of attempted links that produced a record
    pub fn success_rate(&self) -> f64 {
        let attempted = self.books_attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.books_built as f64 / attempted as f64) * 100.0
    }
}

impl Default for CrawlReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the run summary to stdout in a formatted manner
pub fn print_report(report: &CrawlReport) {
    println!("=== Crawl Summary ===\n");

    println!("Started:  {}", report.started_at.to_rfc3339());
    if let Some(finished) = report.finished_at {
        println!("Finished: {}", finished.to_rfc3339());
    }
    if let Some(seconds) = report.duration_seconds() {
        println!("Duration: {}s", seconds);
    }
    println!();

    println!("Listing pages visited: {}", report.listing_pages_visited);
    println!("Listing pages failed:  {}", report.listing_pages_failed);
    println!("Book links discovered: {}", report.links_discovered);
    println!();

    println!("Records built:         {}", report.books_built);
    println!("Removed books skipped: {}", report.books_removed);
    println!("Books failed:          {}", report.books_failed);
    println!();

    println!(
        "Success rate: {:.1}% ({} / {} links)",
        report.success_rate(),
        report.books_built,
        report.books_attempted()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_unfinished() {
        let report = CrawlReport::new();
        assert!(report.finished_at.is_none());
        assert!(report.duration_seconds().is_none());
        assert_eq!(report.books_attempted(), 0);
    }

    #[test]
    fn test_finish_stamps_time() {
        let mut report = CrawlReport::new();
        report.finish();
        assert!(report.finished_at.is_some());
        assert!(report.duration_seconds().unwrap() >= 0);
    }

    #[test]
    fn test_books_attempted_sums_outcomes() {
        let mut report = CrawlReport::new();
        report.books_built = 7;
        report.books_removed = 2;
        report.books_failed = 1;
        assert_eq!(report.books_attempted(), 10);
    }

    #[test]
    fn test_success_rate() {
        let mut report = CrawlReport::new();
        report.books_built = 8;
        report.books_failed = 2;

        let rate = report.success_rate();
        assert!((rate - 80.0).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_with_no_attempts() {
        let report = CrawlReport::new();
        assert_eq!(report.success_rate(), 0.0);
    }
}
