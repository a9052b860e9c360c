//! Asset download and persistence
//!
//! Downloads cover images and book texts and writes them under the
//! destination directory. The site signals a missing asset by redirecting
//! to its home page, so asset requests never follow redirects: only a
//! direct 200 response is saved, and any redirect or error status is
//! reported as "asset absent" rather than as a failure.

use crate::{Result, TululuError};
use reqwest::{Client, StatusCode};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads one asset and persists it under `dir` as `filename`
///
/// The target directory is created if it does not exist yet.
///
/// # Arguments
///
/// * `client` - The non-redirecting asset HTTP client
/// * `url` - The asset URL
/// * `dir` - Directory the file is written into
/// * `filename` - Already-sanitized filename to store the bytes under
///
/// # Returns
///
/// * `Ok(Some(path))` - Asset existed and was written to `path`
/// * `Ok(None)` - Asset is absent (redirect or non-200 status); nothing written
/// * `Err(TululuError)` - Transport or filesystem failure
pub async fn download_asset(
    client: &Client,
    url: &Url,
    dir: &Path,
    filename: &str,
) -> Result<Option<PathBuf>> {
    let response = client.get(url.clone()).send().await.map_err(|e| {
        TululuError::Http {
            url: url.to_string(),
            source: e,
        }
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        // Redirects and error statuses both mean the asset does not exist
        // on the site; the caller records the asset as absent.
        tracing::debug!("Asset {} unavailable (HTTP {})", url, status);
        return Ok(None);
    }

    let bytes = response.bytes().await.map_err(|e| TululuError::Http {
        url: url.to_string(),
        source: e,
    })?;

    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, &bytes)?;
    tracing::debug!("Saved {} ({} bytes)", path.display(), bytes.len());

    Ok(Some(path))
}
