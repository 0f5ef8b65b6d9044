// src/pipeline.rs

//! Extraction pipeline.
//!
//! Resolves raw input into a source, drives fetch/parse cycles over it,
//! and hands the accumulated records to the caller. Fetches are blocking
//! and strictly sequential; the stop condition depends on the
//! immediately preceding page's record count.

use std::fs;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::BookRecord;
use crate::resolver::{resolve_input, SourceRef};
use crate::services::ShelfParser;
use crate::utils::http;
use crate::utils::url::with_paging;

/// Fetch the raw HTML for a resolved source.
///
/// Local files are read from disk (a missing file is
/// [`AppError::NotFound`]); remote URLs go through the HTTP client. A
/// failure here aborts the whole run rather than skipping the page,
/// since skipping would silently lose data.
pub fn fetch_html(client: &Client, source: &SourceRef) -> Result<String> {
    match source {
        SourceRef::LocalFile(path) => {
            if !path.exists() {
                return Err(AppError::not_found(path.display().to_string()));
            }
            Ok(fs::read_to_string(path)?)
        }
        SourceRef::RemoteUrl(url) => http::fetch_text(client, url),
    }
}

/// Collect every record from a paginated shelf URL.
///
/// Each iteration rebuilds the URL with `per_page` and `page`
/// overwritten, fetches and parses that page, and stops on an empty page
/// or a short one (fewer than `per_page` rows means the source has run
/// out of data). There is no explicit upper bound on `page`; termination
/// rests on those two signals, so a transient short page would end the
/// run early with no way to detect it.
pub fn collect_paginated<F>(
    initial_url: &str,
    per_page: usize,
    parser: &ShelfParser,
    mut fetch: F,
) -> Result<Vec<BookRecord>>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut accumulated = Vec::new();
    let mut page = 1usize;

    loop {
        let page_url = with_paging(initial_url, per_page, page)?;
        log::debug!("Fetching page {page}: {page_url}");

        let html = fetch(&page_url)?;
        let page_records = parser.parse(&html, Some(&page_url));

        if page_records.is_empty() {
            break;
        }

        log::info!("Page {page}: {} records", page_records.len());
        let short_page = page_records.len() < per_page;
        accumulated.extend(page_records);

        if short_page {
            break;
        }
        page += 1;
    }

    Ok(accumulated)
}

/// Run the full extraction for one raw input.
///
/// A local file parses exactly once; a shelf listing URL paginates; any
/// other URL fetches and parses exactly once.
pub fn run(raw_input: &str, config: &Config) -> Result<Vec<BookRecord>> {
    let source = resolve_input(raw_input, &config.scraper);
    let parser = ShelfParser::new(&config.scraper.base_url)?;
    let client = http::create_client(config)?;

    match &source {
        SourceRef::LocalFile(path) => {
            log::info!("Parsing saved page {}", path.display());
            let html = fetch_html(&client, &source)?;
            let page_ref = path.to_string_lossy();
            Ok(parser.parse(&html, Some(&page_ref)))
        }
        SourceRef::RemoteUrl(url) if url.contains("/review/list") => {
            log::info!("Collecting shelf pages from {url}");
            collect_paginated(url, config.scraper.per_page, &parser, |page_url| {
                http::fetch_text(&client, page_url)
            })
        }
        SourceRef::RemoteUrl(url) => {
            log::info!("Parsing single page {url}");
            let html = fetch_html(&client, &source)?;
            Ok(parser.parse(&html, Some(url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELF_URL: &str = "https://www.goodreads.com/review/list/162248230?shelf=read";

    fn page_with_rows(count: usize, offset: usize) -> String {
        let rows: String = (0..count)
            .map(|i| {
                let id = offset + i;
                format!(
                    r#"<tr class="bookalike">
                        <td class="field title"><a href="/book/show/{id}.Book_{id}">Book {id}</a></td>
                        <td class="field author"><a href="/author/show/{id}">Author {id}</a></td>
                    </tr>"#
                )
            })
            .collect();
        format!("<html><body><table>{rows}</table></body></html>")
    }

    fn parser() -> ShelfParser {
        ShelfParser::new("https://www.goodreads.com").unwrap()
    }

    #[test]
    fn short_final_page_terminates_the_loop() {
        // 10 + 10 + 4 rows over three pages.
        let mut fetched = Vec::new();
        let records = collect_paginated(SHELF_URL, 10, &parser(), |url| {
            fetched.push(url.to_string());
            let page = fetched.len();
            let count = if page < 3 { 10 } else { 4 };
            Ok(page_with_rows(count, page * 100))
        })
        .unwrap();

        assert_eq!(records.len(), 24);
        assert_eq!(fetched.len(), 3);
        assert!(fetched[0].contains("page=1") && fetched[0].contains("per_page=10"));
        assert!(fetched[2].contains("page=3"));
        assert!(fetched.iter().all(|url| url.contains("shelf=read")));
    }

    #[test]
    fn empty_first_page_yields_no_records() {
        let mut fetches = 0;
        let records = collect_paginated(SHELF_URL, 10, &parser(), |_| {
            fetches += 1;
            Ok(page_with_rows(0, 0))
        })
        .unwrap();

        assert!(records.is_empty());
        assert_eq!(fetches, 1);
    }

    #[test]
    fn exact_multiple_needs_one_extra_fetch() {
        // Two full pages then an empty one: the loop cannot tell the
        // second full page is the last until page 3 comes back empty.
        let mut fetches = 0;
        let records = collect_paginated(SHELF_URL, 10, &parser(), |_| {
            fetches += 1;
            let count = if fetches <= 2 { 10 } else { 0 };
            Ok(page_with_rows(count, fetches * 100))
        })
        .unwrap();

        assert_eq!(records.len(), 20);
        assert_eq!(fetches, 3);
    }

    #[test]
    fn fetch_failure_aborts_the_run() {
        let result = collect_paginated(SHELF_URL, 10, &parser(), |url| {
            Err(AppError::status(url, reqwest::StatusCode::FORBIDDEN))
        });
        assert!(matches!(result, Err(AppError::Status { .. })));
    }

    #[test]
    fn rows_without_title_links_do_not_count_toward_paging() {
        // Page 1 has per_page rows but only 4 parse into records, so the
        // short-page signal fires and the loop stops after one fetch.
        let mut fetches = 0;
        let noise: String = (0..6)
            .map(|_| r#"<tr class="bookalike"><td class="field title">ad</td></tr>"#)
            .collect();
        let records = collect_paginated(SHELF_URL, 10, &parser(), |_| {
            fetches += 1;
            let rows = page_with_rows(4, 0).replace("</table>", &format!("{noise}</table>"));
            Ok(rows)
        })
        .unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(fetches, 1);
    }

    #[test]
    fn fetch_html_reports_missing_file() {
        let config = Config::default();
        let client = http::create_client(&config).unwrap();
        let source = SourceRef::LocalFile("definitely/not/here.html".into());
        assert!(matches!(
            fetch_html(&client, &source),
            Err(AppError::NotFound { .. })
        ));
    }
}
