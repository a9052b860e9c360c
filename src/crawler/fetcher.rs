//! HTTP fetching for listing and detail pages
//!
//! This module handles the HTTP side of the crawl, including:
//! - Building the two HTTP clients the crawler uses
//! - GET requests for HTML pages with redirect following
//! - Capturing the final URL after redirects (removed books redirect home)
//! - Raising HTTP error statuses as crawl errors
//!
//! Two clients exist because pages and assets need opposite redirect
//! behavior: page fetches follow redirects so the final URL can be compared
//! against the home-page sentinel, while asset fetches must not follow them
//! because a redirect on an asset endpoint means the asset does not exist.

use crate::{Result, TululuError};
use reqwest::{redirect::Policy, Client};
use url::Url;

/// A fetched HTML page together with the URL the response came from
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,

    /// Raw HTML body
    pub body: String,
}

/// Builds the HTTP client used for listing and detail pages
///
/// The client follows redirects (up to reqwest's default of 10 hops); the
/// final response URL is what the coordinator compares against the site's
/// home page to detect removed books. No request timeout is configured, so
/// a hanging remote endpoint stalls the run at the transport's default
/// behavior.
pub fn build_page_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("tululu-dl/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Builds the HTTP client used for text and image downloads
///
/// This client never follows redirects: the site answers requests for
/// missing assets with a redirect to its home page, and following it would
/// save the home page's HTML as book content.
pub fn build_asset_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("tululu-dl/", env!("CARGO_PKG_VERSION")))
        .redirect(Policy::none())
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Fetches one HTML page
///
/// # Arguments
///
/// * `client` - The redirect-following page client
/// * `url` - The page URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - Body and final URL of a successful response
/// * `Err(TululuError::Http)` - Transport failure or HTTP error status
pub async fn fetch_document(client: &Client, url: &Url) -> Result<FetchedPage> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| TululuError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let final_url = response.url().clone();

    let response = response
        .error_for_status()
        .map_err(|e| TululuError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let body = response.text().await.map_err(|e| TululuError::Http {
        url: url.to_string(),
        source: e,
    })?;

    tracing::debug!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage { final_url, body })
}
