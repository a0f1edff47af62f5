use mxa::numeric::quantity::parse_quantity;

#[test]
fn export_formats() {
    assert_eq!(parse_quantity("12"), 12);
    assert_eq!(parse_quantity("1,200"), 1200);
    assert_eq!(parse_quantity(" 7 "), 7);
    assert_eq!(parse_quantity("3件"), 3);
}

#[test]
fn fractions_truncate() {
    assert_eq!(parse_quantity("2.9"), 2);
    assert_eq!(parse_quantity("1,000.50"), 1000);
}

#[test]
fn garbage_and_negatives_are_zero() {
    assert_eq!(parse_quantity(""), 0);
    assert_eq!(parse_quantity("abc"), 0);
    assert_eq!(parse_quantity("-5"), 0);
    assert_eq!(parse_quantity("   "), 0);
}

#[test]
fn huge_values_saturate() {
    assert_eq!(parse_quantity("99999999999999999999999"), u64::MAX);
}
