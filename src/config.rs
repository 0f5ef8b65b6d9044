//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Shelf location and paging settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.base_url.trim().is_empty() {
            return Err(AppError::validation("scraper.base_url is empty"));
        }
        if !self.scraper.base_url.starts_with("http://")
            && !self.scraper.base_url.starts_with("https://")
        {
            return Err(AppError::validation(
                "scraper.base_url must start with http:// or https://",
            ));
        }
        if self.scraper.shelf.trim().is_empty() {
            return Err(AppError::validation("scraper.shelf is empty"));
        }
        if self.scraper.per_page == 0 {
            return Err(AppError::validation("scraper.per_page must be > 0"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

/// Shelf location and paging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the source site, also used to resolve relative links
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Shelf name used when expanding a bare user id
    #[serde(default = "defaults::shelf")]
    pub shelf: String,

    /// Rows requested per page. The site advertises up to 200 but rejects
    /// large values; 15 was the largest that worked in testing, so the
    /// default stays conservative.
    #[serde(default = "defaults::per_page")]
    pub per_page: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            shelf: defaults::shelf(),
            per_page: defaults::per_page(),
        }
    }
}

/// HTTP client settings.
///
/// The header defaults imitate a desktop browser; the source site answers
/// 403 to clients it does not recognize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Accept header
    #[serde(default = "defaults::accept")]
    pub accept: String,

    /// Accept-Language header
    #[serde(default = "defaults::accept_language")]
    pub accept_language: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            accept: defaults::accept(),
            accept_language: defaults::accept_language(),
            timeout_secs: defaults::timeout(),
        }
    }
}

mod defaults {
    // Scraper defaults
    pub fn base_url() -> String {
        "https://www.goodreads.com".into()
    }
    pub fn shelf() -> String {
        "read".into()
    }
    pub fn per_page() -> usize {
        10
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
         AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/120.0.0.0 Safari/537.36"
            .into()
    }
    pub fn accept() -> String {
        "text/html,application/xhtml+xml,application/xml;\
         q=0.9,image/avif,image/webp,*/*;q=0.8"
            .into()
    }
    pub fn accept_language() -> String {
        "en-US,en;q=0.9".into()
    }
    pub fn timeout() -> u64 {
        30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_per_page() {
        let mut config = Config::default();
        config.scraper.per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_schemeless_base_url() {
        let mut config = Config::default();
        config.scraper.base_url = "www.goodreads.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_or_default_survives_a_missing_file() {
        let config = Config::load_or_default("no/such/config.toml");
        assert_eq!(config.scraper.per_page, 10);
    }

    #[test]
    fn partial_toml_falls_back_to_field_defaults() {
        let config: Config = toml::from_str("[scraper]\nper_page = 15\n").unwrap();
        assert_eq!(config.scraper.per_page, 15);
        assert_eq!(config.scraper.shelf, "read");
        assert_eq!(config.scraper.base_url, "https://www.goodreads.com");
        assert_eq!(config.http.timeout_secs, 30);
    }
}
