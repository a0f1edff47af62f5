//! Header normalization & duplicate detection.
//!
//! Rules:
//! - Trim surrounding whitespace and remove every U+FEFF (exports often carry
//!   the BOM on the first header only).
//! - Empty headers become `__mxa_col_<1-based index>`.
//! - Duplicates are kept; the first occurrence wins during field resolution
//!   and re-alignment, so they are only reported.

use std::collections::HashMap;

const BOM: char = '\u{FEFF}';

/// Duplicate header (after normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHeader {
    pub name: String,
    pub first_index: usize,
    pub second_index: usize,
}

/// Normalize a header row.
pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| normalize_header_name(header, idx + 1))
        .collect()
}

/// Normalize a single header name.
pub fn normalize_header_name(header: &str, index: usize) -> String {
    let cleaned: String = header.chars().filter(|ch| *ch != BOM).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        format!("__mxa_col_{index}")
    } else {
        trimmed.to_string()
    }
}

/// Returns the first duplicated header name, 1-based indices.
pub fn find_duplicate(headers: &[String]) -> Option<DuplicateHeader> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        if let Some(first) = seen.get(name.as_str()).copied() {
            return Some(DuplicateHeader {
                name: name.clone(),
                first_index: first,
                second_index: idx + 1,
            });
        }
        seen.insert(name, idx + 1);
    }
    None
}
