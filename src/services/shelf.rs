// src/services/shelf.rs

//! Shelf page parser.
//!
//! Turns one shelf HTML document into an ordered list of book records.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{BookRecord, BookSource};
use crate::utils::hash::key_hash;
use crate::utils::url::{extract_book_id, resolve};

/// Parser for one shelf listing page.
///
/// Selectors are compiled once at construction; `parse` itself cannot
/// fail and yields zero records for markup it does not recognize.
pub struct ShelfParser {
    base_url: String,
    row_sel: Selector,
    title_sel: Selector,
    link_sel: Selector,
    author_sel: Selector,
    cover_img_sel: Selector,
    pages_sel: Selector,
    date_pub_sel: Selector,
}

impl ShelfParser {
    /// Create a parser that resolves relative links against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            // Each shelf entry renders as <tr id="review_..." class="bookalike review">.
            row_sel: Self::parse_selector("tr.bookalike")?,
            title_sel: Self::parse_selector("td.field.title")?,
            link_sel: Self::parse_selector("a[href]")?,
            author_sel: Self::parse_selector("td.field.author")?,
            cover_img_sel: Self::parse_selector("td.field.cover img[src]")?,
            pages_sel: Self::parse_selector("td.field.num_pages")?,
            date_pub_sel: Self::parse_selector("td.field.date_pub")?,
        })
    }

    /// Parse one page of shelf HTML into records.
    ///
    /// `page_ref` is the reference the page was fetched from; when it is
    /// supplied, relative detail links are resolved against the base URL
    /// before the external id is derived.
    pub fn parse(&self, html: &str, page_ref: Option<&str>) -> Vec<BookRecord> {
        let document = Html::parse_document(html);
        document
            .select(&self.row_sel)
            .filter_map(|row| self.parse_row(&row, page_ref))
            .collect()
    }

    /// Parse a single shelf row.
    ///
    /// Rows without a title link are markup noise (headers, separators,
    /// ads) and yield no record.
    fn parse_row(&self, row: &ElementRef, page_ref: Option<&str>) -> Option<BookRecord> {
        let title_td = row.select(&self.title_sel).next()?;
        let title_link = title_td.select(&self.link_sel).next()?;

        let title = collect_text(&title_link);
        if title.is_empty() {
            return None;
        }

        let href = title_link.value().attr("href")?;
        let book_url = if page_ref.is_some() && !href.starts_with("http") {
            resolve(&self.base_url, href)
        } else {
            href.to_string()
        };
        let external_id = extract_book_id(&book_url);

        let authors = row
            .select(&self.author_sel)
            .next()
            .and_then(|cell| self.extract_authors(&cell));

        let cover_url = row
            .select(&self.cover_img_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string);

        let page_count = row
            .select(&self.pages_sel)
            .next()
            .and_then(|cell| extract_first_int(&collect_text(&cell)));

        let published_year = row
            .select(&self.date_pub_sel)
            .next()
            .and_then(|cell| extract_year(&collect_text(&cell)));

        let source = BookSource::Other;
        let key = key_hash(
            source.as_str(),
            external_id.as_deref(),
            &title,
            authors.as_deref(),
        );

        Some(BookRecord {
            source,
            external_id,
            title,
            authors,
            page_count,
            published_year,
            cover_url,
            key_hash: key,
        })
    }

    /// Join the author cell's hyperlinked names, falling back to the
    /// cell's plain text when no links are present.
    fn extract_authors(&self, cell: &ElementRef) -> Option<String> {
        let names: Vec<String> = cell
            .select(&self.link_sel)
            .map(|link| collect_text(&link))
            .filter(|name| !name.is_empty())
            .collect();

        if !names.is_empty() {
            return Some(names.join(", "));
        }

        let plain = collect_text(cell);
        (!plain.is_empty()).then_some(plain)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

/// Collect an element's visible text, whitespace-normalized.
fn collect_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First integer in free-form text, thousands separators stripped.
///
/// `"352 pages"` yields 352 and `"1,024"` yields 1024; text with no
/// digit run yields `None`.
pub fn extract_first_int(text: &str) -> Option<u32> {
    let digits = Regex::new(r"\d+").ok()?;
    let cleaned = text.replace(',', "");
    digits.find(&cleaned)?.as_str().parse().ok()
}

/// Last 4-digit run anywhere in a free-form publication date.
///
/// `"Mar 18, 2025"` yields 2025; text without a 4-digit run yields `None`.
pub fn extract_year(text: &str) -> Option<u32> {
    let years = Regex::new(r"\d{4}").ok()?;
    years.find_iter(text).last()?.as_str().parse().ok()
}
