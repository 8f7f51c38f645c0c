//! # Word Splitter

use core::ops::Range;

use crate::{
    errors::{BCResult, BartchipperError},
    spanning::BART_WORD_PATTERN,
};

/// Regex word splitter.
///
/// Splits text into the word spans fed to the byte table and merger.
/// Every byte of the input is covered by exactly one span for the
/// BART pattern, since its final alternatives match any whitespace run.
#[derive(Debug, Clone)]
pub struct WordSplitter {
    regex: fancy_regex::Regex,
}

impl WordSplitter {
    /// Build a splitter for [`BART_WORD_PATTERN`].
    pub fn bart() -> BCResult<Self> {
        Self::from_pattern(BART_WORD_PATTERN)
    }

    /// Build a splitter for an arbitrary pattern.
    ///
    /// ## Arguments
    /// * `pattern` - A `fancy_regex` pattern.
    pub fn from_pattern(pattern: &str) -> BCResult<Self> {
        let regex = fancy_regex::Regex::new(pattern)
            .map_err(|e| BartchipperError::Regex(format!("{pattern:?}: {e}")))?;
        Ok(Self { regex })
    }

    /// Get the underlying pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Visit each word span of the text, in order.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `f` - Called with the byte range of each word.
    ///
    /// ## Returns
    /// An error if the regex engine gives up on the text (backtrack limit).
    pub fn try_for_each_span<F>(
        &self,
        text: &str,
        mut f: F,
    ) -> BCResult<()>
    where
        F: FnMut(Range<usize>),
    {
        for m in self.regex.find_iter(text) {
            let m = m.map_err(|e| BartchipperError::Regex(e.to_string()))?;
            f(m.range());
        }
        Ok(())
    }

    /// Split text into words.
    pub fn split<'h>(
        &self,
        text: &'h str,
    ) -> BCResult<Vec<&'h str>> {
        let mut words = Vec::new();
        self.try_for_each_span(text, |range| words.push(&text[range]))?;
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bart_split() {
        let splitter = WordSplitter::bart().unwrap();
        assert_eq!(splitter.as_str(), BART_WORD_PATTERN);

        assert_eq!(
            splitter.split("Hello world's 123!").unwrap(),
            vec!["Hello", " world", "'s", " 123", "!"]
        );
        assert_eq!(
            splitter.split("I'll be   there.").unwrap(),
            vec!["I", "'ll", " be", "  ", " there", "."]
        );
        assert_eq!(splitter.split("hi  ").unwrap(), vec!["hi", "  "]);
        assert_eq!(
            splitter.split("caf\u{e9} \u{1f635}").unwrap(),
            vec!["caf\u{e9}", " \u{1f635}"]
        );
        assert!(splitter.split("").unwrap().is_empty());
    }

    #[test]
    fn test_split_covers_text() {
        let splitter = WordSplitter::bart().unwrap();
        for text in [
            "line1\nline2\r\nline3",
            "\t\ttabs\tand\tspaces ",
            "$$$!!!...---",
            "  multiple   spaces  ",
        ] {
            assert_eq!(splitter.split(text).unwrap().concat(), text);
        }
    }

    #[test]
    fn test_bad_pattern() {
        let err = WordSplitter::from_pattern("[").unwrap_err();
        assert!(matches!(err, BartchipperError::Regex(_)));
    }
}
