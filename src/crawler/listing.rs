//! Listing page enumeration
//!
//! A catalog listing page shows a column of book cards (`table.d_book`
//! elements), each linking to one book's detail page. This module fetches a
//! listing page and returns the detail links it contains, in page order and
//! with duplicates preserved.
//!
//! Fetch failures propagate to the caller; isolating them per page is the
//! coordinator's job, not this module's.

use crate::crawler::fetcher::fetch_document;
use crate::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Fetches one listing page and returns the detail links found on it
///
/// # Arguments
///
/// * `client` - The redirect-following page client
/// * `url` - The absolute listing-page URL
/// * `base_url` - The site base URL, for resolving relative card links
///
/// # Returns
///
/// * `Ok(Vec<Url>)` - Detail-page links in page order
/// * `Err(TululuError)` - The listing page could not be fetched
pub async fn collect_book_links(client: &Client, url: &Url, base_url: &Url) -> Result<Vec<Url>> {
    let page = fetch_document(client, url).await?;
    Ok(extract_book_links(&page.body, base_url))
}

/// Extracts detail-page links from listing-page HTML
///
/// Each book card contributes its first `a[href]`, resolved against the
/// base URL. Cards without an anchor and hrefs that do not resolve are
/// skipped. Duplicates are not removed; a book listed twice is returned
/// twice.
pub fn extract_book_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(card_selector) = Selector::parse("table.d_book") {
        if let Ok(anchor_selector) = Selector::parse("a[href]") {
            for card in document.select(&card_selector) {
                let href = match card
                    .select(&anchor_selector)
                    .next()
                    .and_then(|anchor| anchor.value().attr("href"))
                {
                    Some(href) => href,
                    None => {
                        tracing::debug!("Skipping book card without a link");
                        continue;
                    }
                };

                match base_url.join(href) {
                    Ok(link) => links.push(link),
                    Err(e) => {
                        tracing::debug!("Skipping unresolvable card link {:?}: {}", href, e);
                    }
                }
            }
        }
    }

    links
}
