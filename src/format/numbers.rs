// Number formatting utilities

/// Format an integer with thousands separators.
pub fn format_int_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let first_group = if bytes.len().is_multiple_of(3) {
        3
    } else {
        bytes.len() % 3
    };
    out.push_str(&digits[..first_group]);
    let mut idx = first_group;
    while idx < bytes.len() {
        out.push(',');
        out.push_str(&digits[idx..idx + 3]);
        idx += 3;
    }
    out
}

/// Share of `total` taken by `qty`, e.g. `62.5%`; `0.0%` when `total` is 0.
///
/// Rounded to tenths of a percent, halves up, in integer arithmetic.
pub fn format_share(qty: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let total = u128::from(total);
    let tenths = (u128::from(qty) * 2000 + total) / (2 * total);
    format!("{}.{}%", tenths / 10, tenths % 10)
}
