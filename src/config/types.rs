use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;
use url::Url;

/// Default base URL of the library site
pub const DEFAULT_BASE_URL: &str = "http://tululu.org/";

/// Path prefix of the science-fiction listing section (`l55`)
const LISTING_SECTION: &str = "l55";

/// Runtime configuration for one crawl run
///
/// Built from the command line, validated once before any network activity,
/// and immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// First listing page to visit (1-based)
    pub start_page: u32,

    /// Listing page at which to stop (exclusive)
    pub end_page: u32,

    /// Skip downloading book text files
    pub skip_txt: bool,

    /// Skip downloading cover images
    pub skip_images: bool,

    /// Root directory for downloaded assets and the output document
    pub dest_folder: PathBuf,

    /// Name of the JSON output file
    pub filename: String,

    /// Base URL of the site; kept as a field so tests can point the
    /// crawler at a local mock server
    pub base_url: Url,
}

impl CrawlConfig {
    /// Returns the URL of the catalog listing page with the given number
    pub fn listing_url(&self, page: u32) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("{}/{}/", LISTING_SECTION, page))
    }

    /// Returns the text-download endpoint URL for a numeric book id
    pub fn text_url(&self, book_id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join("txt.php")?;
        url.set_query(Some(&format!("id={}", book_id)));
        Ok(url)
    }

    /// Returns the site's home-page URL
    ///
    /// The site redirects requests for removed books here, so the crawler
    /// compares final response URLs against this value.
    pub fn home_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Directory where cover images are stored
    pub fn images_dir(&self) -> PathBuf {
        self.dest_folder.join("images")
    }

    /// Directory where book text files are stored
    pub fn books_dir(&self) -> PathBuf {
        self.dest_folder.join("books")
    }

    /// Path of the JSON output document
    pub fn output_path(&self) -> PathBuf {
        self.dest_folder.join(&self.filename)
    }
}

/// Parses the default site base URL
pub fn default_base_url() -> ConfigResult<Url> {
    Url::parse(DEFAULT_BASE_URL)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", DEFAULT_BASE_URL, e)))
}
