//! # Text Spanning
//!
//! Before merging, text is split into words by a fixed regex pattern
//! (contractions, letter runs, digit runs, other-symbol runs, whitespace).
//!
//! The pattern needs a negative lookahead (``\s+(?!\S)``), and so is compiled
//! with [`fancy_regex`] rather than the standard [`regex`](https://docs.rs/regex) crate.

mod pattern_tools;
mod word_splitter;

#[doc(inline)]
pub use word_splitter::*;

/// The BART (GPT-2) word split pattern.
pub const BART_WORD_PATTERN: &str = crate::join_patterns!(
    r"'s",
    r"'t",
    r"'re",
    r"'ve",
    r"'m",
    r"'ll",
    r"'d",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert_eq!(
            BART_WORD_PATTERN,
            r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+"
        );
        assert!(fancy_regex::Regex::new(BART_WORD_PATTERN).is_ok());
    }
}
