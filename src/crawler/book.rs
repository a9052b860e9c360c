//! Book record assembly
//!
//! This module turns one fetched detail page into a [`BookRecord`]:
//! - Extracts title, author, genres and comments from the page
//! - Downloads the cover image into `<dest_folder>/images/`
//! - Derives the numeric book id from the detail link and downloads the
//!   text from the site's `txt.php?id=` endpoint into `<dest_folder>/books/`
//!
//! Either download can be switched off by configuration. A download that
//! fails or finds the asset absent leaves the corresponding optional field
//! unset; only a missing or malformed title heading fails the record.

use crate::config::CrawlConfig;
use crate::crawler::extract::parse_book_page;
use crate::crawler::fetcher::FetchedPage;
use crate::storage::{download_asset, image_filename, text_filename};
use crate::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// One book's collected metadata, as written into the output JSON array
///
/// The two path fields are omitted from the JSON when the download was
/// skipped by configuration or the asset was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Path of the downloaded cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img_src: Option<String>,

    /// Path of the downloaded book text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_path: Option<String>,

    /// Reader comments in page order
    pub comments: Vec<String>,

    /// Genre names in page order
    pub genres: Vec<String>,
}

/// Builds one book record from a fetched detail page
///
/// # Arguments
///
/// * `page` - The fetched detail page
/// * `link` - The detail link the page came from; the numeric book id for
///   the text endpoint is derived from it
/// * `config` - The active crawl configuration
/// * `asset_client` - The non-redirecting client for asset downloads
///
/// # Returns
///
/// * `Ok(BookRecord)` - The assembled record
/// * `Err(TululuError::Extract)` - The page has no usable title heading
pub async fn build_book_record(
    page: &FetchedPage,
    link: &Url,
    config: &CrawlConfig,
    asset_client: &Client,
) -> Result<BookRecord> {
    let book_page = parse_book_page(&page.body, &config.base_url)?;

    let img_src = if config.skip_images {
        None
    } else {
        download_cover(asset_client, book_page.image_url.as_ref(), link, config).await
    };

    let book_path = if config.skip_txt {
        None
    } else {
        download_text(asset_client, link, &book_page.title, config).await
    };

    Ok(BookRecord {
        title: book_page.title,
        author: book_page.author,
        img_src,
        book_path,
        comments: book_page.comments,
        genres: book_page.genres,
    })
}

/// Downloads the cover image and returns its stored path
///
/// A page without a cover, an absent asset and a failed download all leave
/// the record without an image path; none of them fails the record.
async fn download_cover(
    client: &Client,
    image_url: Option<&Url>,
    link: &Url,
    config: &CrawlConfig,
) -> Option<String> {
    let image_url = match image_url {
        Some(url) => url,
        None => {
            tracing::warn!("No cover image on {}", link);
            return None;
        }
    };

    let filename = match image_filename(image_url) {
        Some(name) => name,
        None => {
            tracing::warn!("No usable filename in cover URL {}", image_url);
            return None;
        }
    };

    fetch_asset(client, image_url, &config.images_dir(), &filename).await
}

/// Downloads the book text and returns its stored path
///
/// The text lives at the site's `txt.php?id=<book-id>` endpoint, where the
/// id is the first digit run in the detail link's path. The sanitized title
/// becomes the filename stem.
async fn download_text(
    client: &Client,
    link: &Url,
    title: &str,
    config: &CrawlConfig,
) -> Option<String> {
    let book_id = match book_id_from_link(link) {
        Some(id) => id,
        None => {
            tracing::warn!("No numeric book id in {}", link);
            return None;
        }
    };

    let text_url = match config.text_url(&book_id) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Cannot build text URL for book {}: {}", book_id, e);
            return None;
        }
    };

    let filename = text_filename(title);
    fetch_asset(client, &text_url, &config.books_dir(), &filename).await
}

/// Runs one asset download, demoting failures to a warning
async fn fetch_asset(client: &Client, url: &Url, dir: &Path, filename: &str) -> Option<String> {
    match download_asset(client, url, dir, filename).await {
        Ok(Some(path)) => Some(path.to_string_lossy().into_owned()),
        Ok(None) => {
            tracing::warn!("Asset {} is absent, record keeps no path", url);
            None
        }
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", url, e);
            None
        }
    }
}

/// Derives the numeric book id from a detail link
///
/// The id is the first contiguous run of ASCII digits in the URL path. The
/// host is deliberately not searched; its digits (ports, IP addresses) are
/// never book ids.
pub fn book_id_from_link(link: &Url) -> Option<String> {
    let path = link.path();
    let start = path.find(|c: char| c.is_ascii_digit())?;

    let digits: String = path[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BookRecord {
        BookRecord {
            title: "Eugene Onegin".to_string(),
            author: "A. Pushkin".to_string(),
            img_src: Some("images/239.jpg".to_string()),
            book_path: Some("books/Eugene Onegin.txt".to_string()),
            comments: vec!["Great".to_string()],
            genres: vec!["Novel in verse".to_string()],
        }
    }

    #[test]
    fn test_book_id_from_detail_link() {
        let link = Url::parse("http://tululu.org/b239/").unwrap();
        assert_eq!(book_id_from_link(&link), Some("239".to_string()));
    }

    #[test]
    fn test_book_id_takes_first_digit_run() {
        let link = Url::parse("http://tululu.org/b239/chapter12/").unwrap();
        assert_eq!(book_id_from_link(&link), Some("239".to_string()));
    }

    #[test]
    fn test_book_id_ignores_host_digits() {
        // Mock servers live on 127.0.0.1:<port>; those digits are not an id.
        let link = Url::parse("http://127.0.0.1:8080/b8/").unwrap();
        assert_eq!(book_id_from_link(&link), Some("8".to_string()));
    }

    #[test]
    fn test_book_id_absent_when_path_has_no_digits() {
        let link = Url::parse("http://tululu.org/about/").unwrap();
        assert_eq!(book_id_from_link(&link), None);
    }

    #[test]
    fn test_record_serializes_all_fields_in_order() {
        let json = serde_json::to_string(&record()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Eugene Onegin","author":"A. Pushkin","img_src":"images/239.jpg","book_path":"books/Eugene Onegin.txt","comments":["Great"],"genres":["Novel in verse"]}"#
        );
    }

    #[test]
    fn test_skipped_paths_are_omitted_from_json() {
        let mut record = record();
        record.img_src = None;
        record.book_path = None;

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("img_src"));
        assert!(!json.contains("book_path"));
        assert!(json.contains("\"title\""));
    }

    #[test]
    fn test_record_roundtrip_without_paths() {
        let mut original = record();
        original.img_src = None;
        original.book_path = None;

        let json = serde_json::to_string(&original).unwrap();
        let parsed: BookRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_non_ascii_title_survives_serialization() {
        let mut record = record();
        record.title = "Пикник на обочине".to_string();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("Пикник на обочине"));
        assert!(!json.contains("\\u"));
    }
}
