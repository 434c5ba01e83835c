/// Truncate to at most `max_chars` characters, never splitting a code point.
/// Returns `None` when the text already fits.
pub fn truncate_chars(text: &str, max_chars: usize) -> Option<&str> {
    text.char_indices()
        .nth(max_chars)
        .map(|(byte_index, _)| &text[..byte_index])
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_text() {
        assert_eq!(truncate_chars("short", 10), None);
        assert_eq!(truncate_chars("exact", 5), None);
        assert_eq!(truncate_chars("", 5), None);
    }

    #[test]
    fn test_truncate_chars_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("立法院議案", 3), Some("立法院"));
        assert_eq!(truncate_chars("ab立法", 3), Some("ab立"));
    }

    #[test]
    fn test_char_count() {
        assert_eq!(char_count("立法院"), 3);
        assert_eq!(char_count("abc"), 3);
    }
}
