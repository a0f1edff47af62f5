use csv::ByteRecord;

/// Returns true if the record came from a blank line.
///
/// The reader already skips empty lines; a whitespace-only line surfaces as a
/// single blank field. Rows with separators (`,,`) are real rows with empty
/// values and are kept.
pub fn is_blank_record(record: &ByteRecord) -> bool {
    match record.len() {
        0 => true,
        1 => record
            .get(0)
            .is_none_or(|field| field.iter().all(|b| b.is_ascii_whitespace())),
        _ => false,
    }
}
