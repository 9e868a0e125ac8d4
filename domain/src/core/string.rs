//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters, appending `...`
/// when anything was cut.
///
/// Counts characters rather than bytes, so multi-byte text is never split
/// inside a code point.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((end, _)) => format!("{}...", &s[..end]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_question_label() {
        assert_eq!(
            truncate("How many team members can participate?", 30),
            "How many team members can part..."
        );
        assert_eq!(truncate("What are the prizes?", 30), "What are the prizes?");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("日本語テスト", 30), "日本語テスト");
        assert_eq!(truncate("日本語テスト文字列", 4), "日本語テ...");
    }

    #[test]
    fn test_truncate_zero() {
        assert_eq!(truncate("abc", 0), "...");
        assert_eq!(truncate("", 0), "");
    }
}
