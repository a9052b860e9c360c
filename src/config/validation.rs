use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Validates the entire configuration
///
/// Runs once before the crawl begins; a validation failure means no network
/// request is made and no output file is written.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_page_range(config.start_page, config.end_page)?;
    validate_output(&config.filename)?;
    validate_base_url(config)?;
    Ok(())
}

/// Validates the listing page range (`end_page > start_page > 0`)
fn validate_page_range(start_page: u32, end_page: u32) -> Result<(), ConfigError> {
    if start_page == 0 {
        return Err(ConfigError::Validation(
            "start_page must be positive".to_string(),
        ));
    }

    if end_page <= start_page {
        return Err(ConfigError::Validation(format!(
            "end_page must be greater than start_page, got start_page={} end_page={}",
            start_page, end_page
        )));
    }

    Ok(())
}

/// Validates the output file name
fn validate_output(filename: &str) -> Result<(), ConfigError> {
    if filename.is_empty() {
        return Err(ConfigError::Validation(
            "filename cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the site base URL
fn validate_base_url(config: &CrawlConfig) -> Result<(), ConfigError> {
    let url = &config.base_url;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL must use http or https, got '{}'",
            url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base URL has no host: '{}'",
            url
        )));
    }

    Ok(())
}
