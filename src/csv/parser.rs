//! CSV text to header list + width-normalized rows.
//!
//! RFC4180 quoting through the `csv` reader: commas and line breaks inside
//! quotes are literal and `""` is one quote. The reader runs in flexible mode
//! so ragged rows never fail; every value is trimmed.

use csv::ByteRecord;

use crate::csv::blank::is_blank_record;
use crate::csv::records::{WidthFit, fit_to_header};
use crate::normalize::headers::normalize_headers;

/// Output of parsing one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` values wide.
    pub rows: Vec<Vec<String>>,
    pub short_rows: u64,
    pub long_rows: u64,
}

impl ParsedCsv {
    pub fn has_header(&self) -> bool {
        !self.headers.is_empty()
    }
}

/// Build a CSV reader over comma-separated export text.
pub fn build_reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .has_headers(false)
        .from_reader(text.as_bytes())
}

/// Parse export text. Never fails: malformed input degrades to padded rows.
pub fn parse_csv_text(text: &str) -> ParsedCsv {
    let mut reader = build_reader(text);
    let mut record = ByteRecord::new();
    let mut parsed = ParsedCsv::default();

    loop {
        match reader.read_byte_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                tracing::warn!(error = %err, "stopped reading CSV input early");
                break;
            }
        }
        if is_blank_record(&record) {
            continue;
        }

        let fields = decode_fields(&record);
        if !parsed.has_header() {
            parsed.headers = normalize_headers(fields.iter().map(String::as_str));
            continue;
        }

        let (row, fit) = fit_to_header(fields, parsed.headers.len());
        match fit {
            WidthFit::Exact => {}
            WidthFit::Padded { .. } => parsed.short_rows += 1,
            WidthFit::Truncated { non_blank, .. } => {
                parsed.long_rows += 1;
                if non_blank {
                    tracing::debug!(
                        row = parsed.rows.len() + 1,
                        "dropped non-empty fields beyond the header width"
                    );
                }
            }
        }
        parsed.rows.push(row);
    }

    parsed
}

fn decode_fields(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).trim().to_string())
        .collect()
}
