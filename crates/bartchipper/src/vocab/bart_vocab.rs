//! # BART Vocabulary Store

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    sync::Arc,
};

use crate::{
    errors::BCResult,
    types::TokenType,
    vocab::{
        MergeRanks,
        TokenVocab,
        io::{read_merge_ranks, read_vocab_json},
    },
};

/// BART Vocabulary.
///
/// Combines:
///  * [`TokenVocab`] - the ``{ token <-> id }`` maps; and
///  * [`MergeRanks`] - the ordered BPE merge table.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct BartVocab<T: TokenType> {
    tokens: TokenVocab<T>,
    merges: Arc<MergeRanks>,
}

impl<T: TokenType> BartVocab<T> {
    /// Build a vocabulary from its parts.
    pub fn new<M>(
        tokens: TokenVocab<T>,
        merges: M,
    ) -> Self
    where
        M: Into<Arc<MergeRanks>>,
    {
        Self {
            tokens,
            merges: merges.into(),
        }
    }

    /// Load a vocabulary from ``vocab.json`` and ``merges.txt`` sources.
    ///
    /// ## Arguments
    /// * `vocab_reader` - The ``vocab.json`` source.
    /// * `merges_reader` - The ``merges.txt`` source.
    ///
    /// ## Returns
    /// The loaded vocabulary; or a resource error.
    pub fn from_readers<VR, MR>(
        vocab_reader: VR,
        merges_reader: MR,
    ) -> BCResult<Self>
    where
        VR: Read,
        MR: BufRead,
    {
        let tokens = TokenVocab::from_token_map(read_vocab_json(vocab_reader)?)?;
        let merges = read_merge_ranks(merges_reader)?;

        log::info!(
            "loaded vocab: {} tokens, {} merges",
            tokens.len(),
            merges.len()
        );

        Ok(Self::new(tokens, merges))
    }

    /// Load a vocabulary from ``vocab.json`` and ``merges.txt`` paths.
    pub fn from_paths<VP, MP>(
        vocab_path: VP,
        merges_path: MP,
    ) -> BCResult<Self>
    where
        VP: AsRef<Path>,
        MP: AsRef<Path>,
    {
        let vocab_reader = BufReader::new(File::open(vocab_path)?);
        let merges_reader = BufReader::new(File::open(merges_path)?);
        Self::from_readers(vocab_reader, merges_reader)
    }

    /// Get the token vocabulary.
    pub fn tokens(&self) -> &TokenVocab<T> {
        &self.tokens
    }

    /// Get the merge rank table.
    pub fn merges(&self) -> &Arc<MergeRanks> {
        &self.merges
    }

    /// Get the number of tokens in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Get the largest token id, if any.
    pub fn max_id(&self) -> Option<T> {
        self.tokens.max_id()
    }

    /// Get the number of merge rules.
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BartchipperError;

    #[test]
    fn test_from_readers() {
        type T = u32;

        let json = r#"{"<s>": 0, "</s>": 2, "h": 3, "e": 4, "he": 5}"#;
        let merges = "#version: 0.2\nh e\n";

        let vocab: BartVocab<T> = BartVocab::from_readers(json.as_bytes(), merges.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.max_id(), Some(5));
        assert_eq!(vocab.merge_count(), 1);
        assert_eq!(vocab.tokens().lookup_id("he"), Some(5));
        assert_eq!(vocab.merges().get_rank("h", "e"), Some(0));
    }

    #[test]
    fn test_from_readers_conflict() {
        let json = r#"{"a": 1, "b": 1}"#;
        let err = BartVocab::<u32>::from_readers(json.as_bytes(), "".as_bytes()).unwrap_err();
        assert!(matches!(err, BartchipperError::VocabConflict(_)));
    }

    #[test]
    fn test_from_missing_paths() {
        let err = BartVocab::<u32>::from_paths("/no/such/vocab.json", "/no/such/merges.txt")
            .unwrap_err();
        assert!(matches!(err, BartchipperError::Io(_)));
        assert!(err.is_resource_error());
    }
}
