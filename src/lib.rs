//! Tululu-dl: a batch scraper for the tululu.org book library
//!
//! This crate implements a single-run crawler that walks a range of catalog
//! listing pages, collects every book detail link they contain, extracts
//! per-book metadata (title, author, genres, reader comments), downloads
//! cover images and book texts, and writes the collected records as one
//! JSON array document.

pub mod config;
pub mod crawler;
pub mod output;
pub mod storage;

use thiserror::Error;

/// Main error type for tululu-dl operations
#[derive(Debug, Error)]
pub enum TululuError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting fields from a book detail page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Detail page has no title heading")]
    MissingHeading,

    #[error("Title heading has no '::' separator: {0:?}")]
    MalformedHeading(String),
}

/// Result type alias for tululu-dl operations
pub type Result<T> = std::result::Result<T, TululuError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for field extraction
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, BookRecord, CrawlObserver, LogObserver};
pub use output::CrawlReport;
