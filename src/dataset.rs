//! In-memory record set built from one or more export files.
//!
//! The first file with a header row fixes the canonical header list. Later
//! files are re-aligned to it: each logical field is matched through the
//! column resolver, so a Chinese export merges into an English one, and the
//! remaining columns are matched by header name. Canonical columns a file
//! lacks read as empty and columns the canonical list lacks are dropped.
//! Under [`MergePolicy::Strict`] any header difference is refused instead.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::csv::parser::{ParsedCsv, parse_csv_text};
use crate::normalize::headers::find_duplicate;
use crate::resolve::fields::{FieldKeys, match_fields};

/// One data row, positionally aligned to [`Dataset::headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Value at `index`, or empty string if out of range.
    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// How later files with different headers are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergePolicy {
    #[default]
    Align,
    Strict,
}

/// Header difference between a later file and the canonical header list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMismatch {
    pub file: String,
    /// Canonical headers absent from the file.
    pub missing: Vec<String>,
    /// File headers absent from the canonical list.
    pub extra: Vec<String>,
    /// Same header set in a different order.
    pub reordered: bool,
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} headers differ from the first file", self.file)?;
        if !self.missing.is_empty() {
            write!(f, "; missing [{}]", self.missing.join(", "))?;
        }
        if !self.extra.is_empty() {
            write!(f, "; extra [{}]", self.extra.join(", "))?;
        }
        if self.reordered {
            write!(f, "; column order differs")?;
        }
        Ok(())
    }
}

impl std::error::Error for HeaderMismatch {}

/// Per-file load receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub rows: u64,
    pub short_rows: u64,
    pub long_rows: u64,
    pub lossy_utf8: bool,
}

/// What happened while loading, for the caller to surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub files: Vec<FileReport>,
    pub header_mismatches: Vec<HeaderMismatch>,
}

impl LoadReport {
    pub fn total_rows(&self) -> u64 {
        self.files.iter().map(|file| file.rows).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
    report: LoadReport,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single-file convenience.
    pub fn from_csv_text(text: &str) -> Self {
        let mut builder = DatasetBuilder::new(MergePolicy::Align);
        if let Err(mismatch) = builder.add_text("input", text, false) {
            tracing::warn!(%mismatch, "input not loaded");
        }
        builder.finish()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Accumulates files into a [`Dataset`].
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    policy: MergePolicy,
    headers: Option<Vec<String>>,
    keys: Option<FieldKeys>,
    records: Vec<Record>,
    report: LoadReport,
}

impl DatasetBuilder {
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parse and append one file's text.
    pub fn add_text(
        &mut self,
        name: &str,
        text: &str,
        lossy_utf8: bool,
    ) -> Result<(), HeaderMismatch> {
        let parsed = parse_csv_text(text);
        self.add_parsed(name, parsed, lossy_utf8)
    }

    pub fn add_parsed(
        &mut self,
        name: &str,
        parsed: ParsedCsv,
        lossy_utf8: bool,
    ) -> Result<(), HeaderMismatch> {
        let mut file = FileReport {
            name: name.to_string(),
            rows: parsed.rows.len() as u64,
            short_rows: parsed.short_rows,
            long_rows: parsed.long_rows,
            lossy_utf8,
        };
        if lossy_utf8 {
            tracing::warn!(file = name, "invalid UTF-8 replaced with U+FFFD");
        }
        if !parsed.has_header() {
            tracing::warn!(file = name, "file has no header row; skipped");
            file.rows = 0;
            self.report.files.push(file);
            return Ok(());
        }
        if let Some(dup) = find_duplicate(&parsed.headers) {
            tracing::warn!(
                file = name,
                header = %dup.name,
                first = dup.first_index,
                second = dup.second_index,
                "duplicate header; the first column is used"
            );
        }

        if self.headers.is_none() {
            tracing::debug!(file = name, headers = parsed.headers.len(), "canonical headers");
            self.keys = Some(match_fields(&parsed.headers));
            self.headers = Some(parsed.headers);
            self.records.extend(parsed.rows.into_iter().map(Record::new));
            self.report.files.push(file);
            return Ok(());
        }
        let canonical = self.headers.as_deref().unwrap_or_default();

        if canonical == parsed.headers.as_slice() {
            self.records.extend(parsed.rows.into_iter().map(Record::new));
            self.report.files.push(file);
            return Ok(());
        }

        let mismatch = header_mismatch(name, canonical, &parsed.headers);
        if self.policy == MergePolicy::Strict {
            return Err(mismatch);
        }
        tracing::warn!(%mismatch, "re-aligning rows to the first file's columns");

        let canonical_keys = self.keys.get_or_insert_with(|| match_fields(canonical));
        let mapping = align_columns(canonical, canonical_keys, &parsed.headers);
        self.records.extend(parsed.rows.into_iter().map(|row| {
            let values = mapping
                .iter()
                .map(|source| source.map(|idx| row[idx].clone()).unwrap_or_default())
                .collect();
            Record::new(values)
        }));
        self.report.header_mismatches.push(mismatch);
        self.report.files.push(file);
        Ok(())
    }

    pub fn finish(self) -> Dataset {
        Dataset {
            headers: self.headers.unwrap_or_default(),
            records: self.records,
            report: self.report,
        }
    }
}

/// Source column in `file_headers` for each canonical column.
///
/// Columns bound to a logical field on both sides are paired through the
/// resolver. Every other canonical column takes the first unclaimed file
/// column with the same header name.
fn align_columns(
    canonical: &[String],
    canonical_keys: &FieldKeys,
    file_headers: &[String],
) -> Vec<Option<usize>> {
    let file_keys = match_fields(file_headers);
    let mut mapping: Vec<Option<usize>> = vec![None; canonical.len()];
    let mut claimed = vec![false; file_headers.len()];
    for (target, source) in canonical_keys.iter().zip(file_keys.iter()) {
        let (Some(to), Some(from)) = (target.index, source.index) else {
            continue;
        };
        if mapping[to].is_none() && !claimed[from] {
            mapping[to] = Some(from);
            claimed[from] = true;
        }
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in file_headers.iter().enumerate() {
        if !claimed[idx] {
            positions.entry(name.as_str()).or_insert(idx);
        }
    }
    for (slot, name) in mapping.iter_mut().zip(canonical) {
        if slot.is_none() {
            *slot = positions.remove(name.as_str());
        }
    }
    mapping
}

fn header_mismatch(file: &str, canonical: &[String], file_headers: &[String]) -> HeaderMismatch {
    let missing: Vec<String> = canonical
        .iter()
        .filter(|name| !file_headers.contains(*name))
        .cloned()
        .collect();
    let extra: Vec<String> = file_headers
        .iter()
        .filter(|name| !canonical.contains(*name))
        .cloned()
        .collect();
    let reordered = missing.is_empty() && extra.is_empty();
    HeaderMismatch {
        file: file.to_string(),
        missing,
        extra,
        reordered,
    }
}
