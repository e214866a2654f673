//! Text processing utilities.
//!
//! Server-provided titles and descriptions are free text of any length, so
//! they are shortened and flattened before they are drawn into fixed-size
//! cards.

/// Shorten text to at most `max_chars` characters, ending in "..." when cut.
///
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept.trim_end())
}

/// Collapse every run of whitespace, line breaks included, into one space.
///
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("EdTech", 10), "EdTech");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("Campus food delivery", 10), "Campus...");
        assert_eq!(truncate("Campus food delivery", 3), "Cam");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("स्टार्टअप वीकेंड", 5), "स्...");
        assert_eq!(truncate("🚀🚀🚀🚀", 4), "🚀🚀🚀🚀");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  An app\nfor\t\tstudents "), "An app for students");
        assert_eq!(single_line(""), "");
    }
}
