// src/utils/url.rs

//! URL manipulation utilities.

use regex::Regex;
use url::Url;

use crate::error::Result;

/// Resolve a potentially relative href against a base URL.
///
/// Already-absolute hrefs pass through unchanged; anything the base
/// cannot absorb falls back to the raw href so the caller still has
/// something to report.
pub fn resolve(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    Url::parse(base)
        .and_then(|b| b.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Extract the numeric work identifier from a book detail URL.
///
/// Matches the canonical `/book/show/<digits>` path segment, so
/// `/book/show/364549.A_Letter_Concerning_Toleration` yields `364549`.
pub fn extract_book_id(href: &str) -> Option<String> {
    let pattern = Regex::new(r"/book/show/(\d+)").ok()?;

    // Match against the path component only, never the query string.
    let path = Url::parse(href)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| href.to_string());

    pattern
        .captures(&path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Rebuild a shelf URL with the paging parameters overwritten.
///
/// `per_page` and `page` are replaced (or appended when missing); every
/// other query parameter is preserved.
pub fn with_paging(url: &str, per_page: usize, page: usize) -> Result<String> {
    let mut parsed = Url::parse(url)?;

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| key != "per_page" && key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = parsed.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("per_page", &per_page.to_string());
        pairs.append_pair("page", &page.to_string());
    }

    Ok(parsed.to_string())
}
