// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};

use crate::config::Config;
use crate::error::{AppError, Result};

/// Create a configured blocking HTTP client.
///
/// Default headers carry the browser-like identity from the config; the
/// Referer points at the source site's own base URL.
pub fn create_client(config: &Config) -> Result<Client> {
    let referer = format!("{}/", config.scraper.base_url.trim_end_matches('/'));

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, header_value(&config.http.accept)?);
    headers.insert(ACCEPT_LANGUAGE, header_value(&config.http.accept_language)?);
    headers.insert(REFERER, header_value(&referer)?);

    let client = Client::builder()
        .user_agent(&config.http.user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and return the raw HTML text.
///
/// A non-success status becomes [`AppError::Status`] carrying the target
/// URL, so the caller can tell a block from a transport failure.
pub fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(url, status));
    }
    Ok(response.text()?)
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::config(format!("invalid header value '{value}': {e}")))
}
