//! Configuration module for tululu-dl
//!
//! The crawl configuration comes entirely from the command line; this module
//! holds the validated configuration type and the derived site URLs
//! (listing pages, text-download endpoint, home-page sentinel).

mod types;
mod validation;

// Re-export types
pub use types::{default_base_url, CrawlConfig, DEFAULT_BASE_URL};

// Re-export validation
pub use validation::validate;
