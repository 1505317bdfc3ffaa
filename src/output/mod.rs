// Output formatting — terminal display and shared text helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// truncated. Character-based so multi-byte input (emoji, accents) never
/// splits mid-codepoint.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_chars("fine", 10), "fine");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_chars("abcdefgh", 3), "abc...");
    }

    #[test]
    fn multibyte_boundaries_are_safe() {
        assert_eq!(truncate_chars("héllo🎬🎬", 6), "héllo🎬");
        assert_eq!(truncate_chars("🎬🎬🎬", 2), "🎬🎬...");
    }
}
