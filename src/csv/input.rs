//! Input bytes, BOM stripping, and encoding guardrails.

use std::borrow::Cow;

/// Maximum number of bytes to scan for NUL (0x00).
pub const NUL_SCAN_LIMIT: usize = 8 * 1024;

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 BE BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-16 LE BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-32 BE BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
/// UTF-32 LE BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

/// Encoding guardrail failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingIssue {
    /// UTF-16 BOM detected.
    Utf16Bom,
    /// UTF-32 BOM detected.
    Utf32Bom,
    /// NUL byte detected within the first 8KB.
    NulByte,
}

impl EncodingIssue {
    pub fn label(self) -> &'static str {
        match self {
            EncodingIssue::Utf16Bom => "a UTF-16 byte-order mark",
            EncodingIssue::Utf32Bom => "a UTF-32 byte-order mark",
            EncodingIssue::NulByte => "a NUL byte in the first 8KB",
        }
    }
}

/// Export text that passed the guardrails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText<'a> {
    pub text: Cow<'a, str>,
    /// True when invalid UTF-8 sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Strip a UTF-8 BOM if present. Returns the stripped slice and a flag.
#[inline]
pub fn strip_utf8_bom(input: &[u8]) -> (&[u8], bool) {
    if input.starts_with(&UTF8_BOM) {
        (&input[UTF8_BOM.len()..], true)
    } else {
        (input, false)
    }
}

/// Classify a leading UTF-16 or UTF-32 BOM. UTF-32 LE is checked first since
/// its first two bytes are the UTF-16 LE BOM.
#[inline]
pub fn wide_bom(input: &[u8]) -> Option<EncodingIssue> {
    match input {
        [0x00, 0x00, 0xFE, 0xFF, ..] | [0xFF, 0xFE, 0x00, 0x00, ..] => {
            Some(EncodingIssue::Utf32Bom)
        }
        [0xFE, 0xFF, ..] | [0xFF, 0xFE, ..] => Some(EncodingIssue::Utf16Bom),
        _ => None,
    }
}

/// Returns true if a NUL byte (0x00) is found within the first 8KB.
#[inline]
pub fn has_nul_in_first_8k(input: &[u8]) -> bool {
    input.iter().take(NUL_SCAN_LIMIT).any(|byte| *byte == 0)
}

/// Apply encoding guardrails, strip a UTF-8 BOM, and decode the rest.
///
/// Order:
/// 1) UTF-16/UTF-32 BOM => refuse
/// 2) UTF-8 BOM => strip and continue
/// 3) NUL byte in first 8KB => refuse
/// 4) invalid UTF-8 => decode lossily and flag it
pub fn decode_input(input: &[u8]) -> Result<DecodedText<'_>, EncodingIssue> {
    if let Some(issue) = wide_bom(input) {
        return Err(issue);
    }
    let (stripped, _had_utf8_bom) = strip_utf8_bom(input);
    if has_nul_in_first_8k(stripped) {
        return Err(EncodingIssue::NulByte);
    }
    let text = String::from_utf8_lossy(stripped);
    let lossy = matches!(text, Cow::Owned(_));
    Ok(DecodedText { text, lossy })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_bom_is_stripped() {
        let input = [UTF8_BOM.as_slice(), "内容ID".as_bytes()].concat();
        let (stripped, had_bom) = strip_utf8_bom(&input);
        assert!(had_bom);
        assert_eq!(stripped, "内容ID".as_bytes());
        let decoded = decode_input(&input).expect("decode");
        assert_eq!(decoded.text, "内容ID");
        assert!(!decoded.lossy);
    }

    #[test]
    fn utf16_bom_refused() {
        let input = [UTF16_LE_BOM.as_slice(), b"a\0"].concat();
        assert_eq!(decode_input(&input), Err(EncodingIssue::Utf16Bom));
        let input = [UTF16_BE_BOM.as_slice(), b"\0a"].concat();
        assert_eq!(decode_input(&input), Err(EncodingIssue::Utf16Bom));
    }

    #[test]
    fn utf32_bom_refused() {
        let input = [UTF32_BE_BOM.as_slice(), b"abc"].concat();
        assert_eq!(decode_input(&input), Err(EncodingIssue::Utf32Bom));
        let input = [UTF32_LE_BOM.as_slice(), b"abc"].concat();
        assert_eq!(decode_input(&input), Err(EncodingIssue::Utf32Bom));
    }

    #[test]
    fn nul_in_first_8k_refused() {
        assert_eq!(decode_input(b"ab\0cd"), Err(EncodingIssue::NulByte));
    }

    #[test]
    fn nul_after_8k_allowed() {
        let mut input = vec![b'a'; NUL_SCAN_LIMIT + 1];
        input[NUL_SCAN_LIMIT] = 0;
        assert!(decode_input(&input).is_ok());
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let decoded = decode_input(b"id\n\xffx").expect("decode");
        assert!(decoded.lossy);
        assert_eq!(decoded.text, "id\n\u{FFFD}x");
    }
}
