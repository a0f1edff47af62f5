//! Free-text search over the four searchable columns.
//!
//! Tokens are whitespace-separated and lowercased. A record is kept when
//! every token is a substring of at least one of: content id, creator,
//! sku id, product name.

use crate::dataset::Record;
use crate::resolve::fields::FieldKeys;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn parse(term: &str) -> Self {
        Self {
            tokens: term.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// An empty query keeps every record.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, record: &Record, keys: &FieldKeys) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let haystacks = [
            keys.id.value(record).to_lowercase(),
            keys.creator.value(record).to_lowercase(),
            keys.sku_id.value(record).to_lowercase(),
            keys.sku_name.value(record).to_lowercase(),
        ];
        self.tokens.iter().all(|token| {
            haystacks
                .iter()
                .any(|haystack| haystack.contains(token.as_str()))
        })
    }
}

/// Records matching `query`, in input order.
pub fn filter_records<'a>(
    records: &'a [Record],
    keys: &FieldKeys,
    query: &SearchQuery,
) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| query.matches(record, keys))
        .collect()
}

/// Search text after drilling into `term` (a creator, video or sku).
///
/// The term is appended unless the current search already contains it.
pub fn append_search_term(current: &str, term: &str) -> String {
    let current_trimmed = current.trim();
    if current_trimmed.is_empty() {
        return term.to_string();
    }
    if current.to_lowercase().contains(&term.to_lowercase()) {
        return current.to_string();
    }
    format!("{current_trimmed} {term}")
}
