//! Quantity normalization for free-form export cells.
//!
//! Supported:
//! - Plain integers and thousands separators (`1,234`).
//! - Stray symbols and units around the digits (`12件`, `$1,234`); they are
//!   dropped.
//! - Decimals are truncated toward zero (`12.9` -> 12).
//!
//! Anything without a leading digit after cleanup, and negative counts,
//! normalize to zero.

/// Parse a quantity cell. Never fails; unusable input is `0`.
pub fn parse_quantity(input: &str) -> u64 {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return 0;
    }

    let mut value: u64 = 0;
    for ch in trimmed.chars() {
        match ch {
            '0'..='9' => {
                let digit = u64::from(ch as u8 - b'0');
                value = value.saturating_mul(10).saturating_add(digit);
            }
            '.' => break,
            _ => {}
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_grouped_integers() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity("1,234"), 1234);
        assert_eq!(parse_quantity("1,234,567"), 1_234_567);
        assert_eq!(parse_quantity("  42  "), 42);
    }

    #[test]
    fn strips_symbols_and_units() {
        assert_eq!(parse_quantity("12件"), 12);
        assert_eq!(parse_quantity("$1,234"), 1234);
        assert_eq!(parse_quantity("1 2"), 12);
        assert_eq!(parse_quantity("x7y"), 7);
    }

    #[test]
    fn truncates_fractions() {
        assert_eq!(parse_quantity("12.9"), 12);
        assert_eq!(parse_quantity("1,234.99"), 1234);
        assert_eq!(parse_quantity("1.2.3"), 1);
    }

    #[test]
    fn invalid_input_is_zero() {
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("   "), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(".5"), 0);
        assert_eq!(parse_quantity("-5"), 0);
        assert_eq!(parse_quantity(" -1,000"), 0);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        assert_eq!(parse_quantity("99999999999999999999999"), u64::MAX);
    }
}
