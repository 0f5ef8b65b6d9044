// src/resolver.rs

//! Input classification.
//!
//! One raw argument can name a saved HTML file, a bare numeric user id,
//! or a full shelf URL; everything downstream works from the resolved
//! [`SourceRef`].

use std::path::{Path, PathBuf};

use crate::config::ScraperConfig;

/// A fetchable source resolved from raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// An existing file on disk
    LocalFile(PathBuf),
    /// A URL to fetch over HTTP
    RemoteUrl(String),
}

/// Classify raw input into a fetchable source. First match wins:
///
/// 1. an existing local path is used as-is
/// 2. an all-digit string is a user id and expands to the shelf URL
/// 3. an `http(s)://` string passes through unchanged
/// 4. anything else passes through as a literal reference, and the fetch
///    step reports the real problem if it is invalid
///
/// The existence check in rule 1 is the only side effect.
pub fn resolve_input(raw: &str, scraper: &ScraperConfig) -> SourceRef {
    if Path::new(raw).exists() {
        return SourceRef::LocalFile(PathBuf::from(raw));
    }

    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        let url = format!(
            "{}/review/list/{}?shelf={}",
            scraper.base_url.trim_end_matches('/'),
            raw,
            scraper.shelf
        );
        return SourceRef::RemoteUrl(url);
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        return SourceRef::RemoteUrl(raw.to_string());
    }

    SourceRef::RemoteUrl(raw.to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn user_id_expands_to_shelf_url() {
        let resolved = resolve_input("162248230", &ScraperConfig::default());
        assert_eq!(
            resolved,
            SourceRef::RemoteUrl(
                "https://www.goodreads.com/review/list/162248230?shelf=read".to_string()
            )
        );
    }

    #[test]
    fn user_id_honors_configured_shelf() {
        let scraper = ScraperConfig {
            shelf: "to-read".to_string(),
            ..ScraperConfig::default()
        };
        let resolved = resolve_input("42", &scraper);
        assert_eq!(
            resolved,
            SourceRef::RemoteUrl(
                "https://www.goodreads.com/review/list/42?shelf=to-read".to_string()
            )
        );
    }

    #[test]
    fn existing_file_wins_over_other_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "<html></html>").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let resolved = resolve_input(&path, &ScraperConfig::default());
        assert_eq!(resolved, SourceRef::LocalFile(PathBuf::from(&path)));
    }

    #[test]
    fn url_passes_through_unchanged() {
        let resolved = resolve_input("https://example.com/x", &ScraperConfig::default());
        assert_eq!(
            resolved,
            SourceRef::RemoteUrl("https://example.com/x".to_string())
        );
    }

    #[test]
    fn unclassifiable_input_passes_through() {
        let resolved = resolve_input("no-such-file.html", &ScraperConfig::default());
        assert_eq!(
            resolved,
            SourceRef::RemoteUrl("no-such-file.html".to_string())
        );
    }
}
