//! Text payload sanitizing.

/// Longest message the relay will process (Telegram's message limit).
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Trim surrounding whitespace and bound the length.
///
/// Truncation happens on a character boundary so multi-byte input never
/// splits a code point.
///
/// # Examples
///
/// ```
/// use relaybot_core::sanitize_input;
///
/// assert_eq!(sanitize_input("  hello \n"), "hello");
/// assert_eq!(sanitize_input("   "), "");
/// assert_eq!(sanitize_input(&"é".repeat(5000)).chars().count(), 4096);
/// ```
pub fn sanitize_input(text: &str) -> String {
    truncate_chars(text.trim(), MAX_MESSAGE_CHARS).to_string()
}

/// Borrow at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_exact_boundary() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_sanitize_trims_before_truncating() {
        let padded = format!("   {}", "x".repeat(MAX_MESSAGE_CHARS + 10));
        assert_eq!(sanitize_input(&padded).len(), MAX_MESSAGE_CHARS);
    }
}
