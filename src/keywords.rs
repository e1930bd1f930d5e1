//! Keyword list helpers for callers assembling input by hand.
//!
//! The engine expects a trimmed, de-duplicated keyword list in user order;
//! these functions produce one from raw delimited input.

use std::collections::HashSet;

/// Splits raw keyword input into individual keywords.
///
/// Tries comma separation first, then newlines, then semicolons; input with
/// none of those delimiters is treated as a single keyword. Entries are
/// trimmed and empties dropped.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let parts: Vec<&str> = if raw.contains(',') {
        raw.split(',').collect()
    } else if raw.contains('\n') {
        raw.split('\n').collect()
    } else if raw.contains(';') {
        raw.split(';').collect()
    } else {
        vec![raw]
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// De-duplicates keywords case-insensitively, preserving first-seen order
/// and the original casing of the first occurrence.
pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for keyword in keywords {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            normalized.push(trimmed.to_string());
        }
    }

    normalized
}
