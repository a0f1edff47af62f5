//! Record width normalization.
//!
//! Rules:
//! - If a row has fewer fields than the header, missing trailing fields are
//!   treated as empty string.
//! - If a row has more fields than the header, the extra trailing fields are
//!   dropped. The row is still kept.

/// How a row was fitted to the header width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthFit {
    Exact,
    Padded { missing: usize },
    Truncated { dropped: usize, non_blank: bool },
}

/// Pad or truncate `fields` to exactly `header_len` values.
pub fn fit_to_header(mut fields: Vec<String>, header_len: usize) -> (Vec<String>, WidthFit) {
    let fit = match fields.len() {
        len if len == header_len => WidthFit::Exact,
        len if len < header_len => {
            fields.resize(header_len, String::new());
            WidthFit::Padded {
                missing: header_len - len,
            }
        }
        len => {
            let non_blank = fields[header_len..].iter().any(|field| !field.is_empty());
            fields.truncate(header_len);
            WidthFit::Truncated {
                dropped: len - header_len,
                non_blank,
            }
        }
    };
    (fields, fit)
}
