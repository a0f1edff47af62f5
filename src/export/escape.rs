use std::borrow::Cow;

/// Escape one report cell for spreadsheet import.
///
/// The value is trimmed. Values containing a comma, quote, or line break are
/// quoted with inner quotes doubled; line breaks become a single space so each
/// report row stays on one line.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim();
    if !trimmed.contains([',', '"', '\n', '\r']) {
        return Cow::Borrowed(trimmed);
    }
    let body = trimmed
        .replace('"', "\"\"")
        .replace("\r\n", " ")
        .replace('\n', " ");
    Cow::Owned(format!("\"{body}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through_trimmed() {
        assert_eq!(escape_field(" Widget "), "Widget");
        assert!(matches!(escape_field("Widget"), Cow::Borrowed(_)));
    }

    #[test]
    fn quotes_commas_and_doubles_quotes() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn replaces_line_breaks_with_space() {
        assert_eq!(escape_field("two\nlines"), "\"two lines\"");
        assert_eq!(escape_field("two\r\nlines"), "\"two lines\"");
    }
}
