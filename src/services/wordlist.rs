// src/services/wordlist.rs

//! Word-list table extraction.
//!
//! Pulls the first column out of every `table.wikitable` on a page.
//! Used to turn reference tables (e.g. a wiki list of game titles) into
//! plain-text word lists; no pagination or identity hashing applies.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};

/// Extract the first-column text of every data row on the page.
///
/// Header rows contribute nothing because they have no `td` cells.
/// Exact duplicates are removed; the result is ordered
/// case-insensitively.
pub fn extract_titles(html: &str) -> Result<Vec<String>> {
    let table_sel = parse_selector("table.wikitable")?;
    let row_sel = parse_selector("tr")?;
    let cell_sel = parse_selector("td")?;

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut titles = Vec::new();

    for table in document.select(&table_sel) {
        for row in table.select(&row_sel) {
            let Some(cell) = row.select(&cell_sel).next() else {
                continue;
            };
            let title = cell
                .text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if !title.is_empty() && seen.insert(title.clone()) {
                titles.push(title);
            }
        }
    }

    titles.sort_by_cached_key(|title| title.to_lowercase());
    Ok(titles)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
