//! Refusal detail payloads and next steps.
//!
//! A refusal names the file it concerns, what went wrong, and a
//! deterministic "next" remediation for the operator.

use std::fmt;
use std::io;

use serde_json::{Value, json};

use crate::csv::input::EncodingIssue;
use crate::dataset::HeaderMismatch;
use crate::refusal::codes::RefusalCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefusalKind {
    Io { file: String, error: String },
    Encoding { file: String, issue: EncodingIssue },
    Headers { mismatch: HeaderMismatch },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefusalDetail {
    pub kind: RefusalKind,
    /// Next-step remediation (without "Next:" prefix).
    pub next: String,
}

impl RefusalDetail {
    pub fn new(kind: RefusalKind) -> Self {
        let next = kind.default_next();
        Self { kind, next }
    }

    pub fn io(file: &str, err: &io::Error) -> Self {
        Self::new(RefusalKind::Io {
            file: file.to_string(),
            error: err.to_string(),
        })
    }

    pub fn encoding(file: &str, issue: EncodingIssue) -> Self {
        Self::new(RefusalKind::Encoding {
            file: file.to_string(),
            issue,
        })
    }

    pub fn headers(mismatch: HeaderMismatch) -> Self {
        Self::new(RefusalKind::Headers { mismatch })
    }

    pub fn code(&self) -> RefusalCode {
        self.kind.code()
    }

    pub fn file(&self) -> &str {
        match &self.kind {
            RefusalKind::Io { file, .. } | RefusalKind::Encoding { file, .. } => file,
            RefusalKind::Headers { mismatch } => &mismatch.file,
        }
    }

    /// Machine-readable detail for JSON output.
    pub fn detail_json(&self) -> Value {
        match &self.kind {
            RefusalKind::Io { file, error } => json!({
                "file": file,
                "error": error,
            }),
            RefusalKind::Encoding { file, issue } => json!({
                "file": file,
                "issue": match issue {
                    EncodingIssue::Utf16Bom => "utf16",
                    EncodingIssue::Utf32Bom => "utf32",
                    EncodingIssue::NulByte => "nul_byte",
                },
            }),
            RefusalKind::Headers { mismatch } => json!({
                "file": mismatch.file,
                "missing": mismatch.missing,
                "extra": mismatch.extra,
                "reordered": mismatch.reordered,
            }),
        }
    }
}

impl fmt::Display for RefusalDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RefusalKind::Io { file, error } => write!(f, "cannot read {file}: {error}"),
            RefusalKind::Encoding { file, issue } => {
                write!(f, "{file} starts with {}", issue.label())
            }
            RefusalKind::Headers { mismatch } => write!(f, "{mismatch}"),
        }
    }
}

impl std::error::Error for RefusalDetail {}

impl RefusalKind {
    pub fn code(&self) -> RefusalCode {
        match self {
            RefusalKind::Io { .. } => RefusalCode::Io,
            RefusalKind::Encoding { .. } => RefusalCode::Encoding,
            RefusalKind::Headers { .. } => RefusalCode::Headers,
        }
    }

    pub fn default_next(&self) -> String {
        match self {
            RefusalKind::Io { .. } => "check file paths/permissions and rerun".to_string(),
            RefusalKind::Encoding { file, .. } => {
                format!("re-export {file} as UTF-8 CSV and rerun")
            }
            RefusalKind::Headers { mismatch } => format!(
                "re-export {} with the same columns as the first file, or rerun without --strict-headers",
                mismatch.file
            ),
        }
    }
}
