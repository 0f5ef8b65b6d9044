//! Service layer for the shelf scraper.
//!
//! - Shelf page parsing (`ShelfParser`)
//! - Word-list table extraction (`wordlist`)

mod shelf;
pub mod wordlist;

pub use shelf::{extract_first_int, extract_year, ShelfParser};
