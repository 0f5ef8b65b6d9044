// src/utils/hash.rs

//! Record identity fingerprint.

use sha2::{Digest, Sha256};

/// Compute the deduplication key for a record.
///
/// The four identity fields are trimmed, joined with `|` in fixed order,
/// and digested with SHA-256, rendered as lowercase hex. Absent fields
/// participate as empty strings, so the same quadruple maps to the same
/// digest across runs and sources. No salt is involved; this is record
/// identity, not security.
pub fn key_hash(
    source: &str,
    external_id: Option<&str>,
    title: &str,
    authors: Option<&str>,
) -> String {
    let parts = [
        source,
        external_id.unwrap_or(""),
        title,
        authors.unwrap_or(""),
    ];
    let raw = parts.map(str::trim).join("|");
    hex::encode(Sha256::digest(raw.as_bytes()))
}
