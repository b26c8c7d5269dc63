//! Legacy markup stripping. Note titles in the shipped data carry HTML-ish
//! tags that must not reach the display layer.

use regex::Regex;

/// Removes markup-tag-like substrings (`<...>`) from note titles,
/// including an unterminated tag running to the end of the string.
pub struct TagStripper {
    pattern: Regex,
}

impl TagStripper {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"</?[^>]+(>|$)").unwrap(),
        }
    }

    /// Strip all tags from `text`. Tag-free text passes through unchanged.
    pub fn strip(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}
