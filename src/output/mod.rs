//! Output module for the collected records and the run summary
//!
//! This module handles:
//! - Writing the batch result as a single JSON array document
//! - Recording aggregate run statistics for the end-of-run summary

mod json;
pub mod stats;

pub use json::write_records;
pub use stats::{print_report, CrawlReport};
