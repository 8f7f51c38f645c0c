//! Tokenizer Options
//!
//! Options for building a [`BartTokenizer`].

use core::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    errors::BCResult,
    tokenizer::BartTokenizer,
    types::TokenType,
    vocab::{BartVocab, SpecialTokens},
};

/// Options for configuring a [`BartTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Special token surface strings.
    pub special_tokens: SpecialTokens,

    /// Bound on the number of words held by the BPE cache.
    ///
    /// `None` is unbounded. Once the bound is reached, further words are
    /// merged on every call; cached entries are never evicted.
    pub cache_limit: Option<NonZeroUsize>,
}

impl TokenizerOptions {
    /// Get the configured special tokens.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    /// Set the special tokens.
    pub fn set_special_tokens(
        &mut self,
        special_tokens: SpecialTokens,
    ) {
        self.special_tokens = special_tokens;
    }

    /// Set the special tokens and return the options.
    pub fn with_special_tokens(
        mut self,
        special_tokens: SpecialTokens,
    ) -> Self {
        self.set_special_tokens(special_tokens);
        self
    }

    /// Get the configured BPE cache bound.
    pub fn cache_limit(&self) -> Option<NonZeroUsize> {
        self.cache_limit
    }

    /// Set the BPE cache bound.
    pub fn set_cache_limit<L>(
        &mut self,
        cache_limit: L,
    ) where
        L: Into<Option<NonZeroUsize>>,
    {
        self.cache_limit = cache_limit.into();
    }

    /// Set the BPE cache bound and return the options.
    pub fn with_cache_limit<L>(
        mut self,
        cache_limit: L,
    ) -> Self
    where
        L: Into<Option<NonZeroUsize>>,
    {
        self.set_cache_limit(cache_limit);
        self
    }

    /// Build a [`BartTokenizer`] for the given vocab.
    ///
    /// ## Returns
    /// The tokenizer; or a configuration error if the vocab lacks
    /// the begin/end special tokens.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<BartVocab<T>>,
    ) -> BCResult<BartTokenizer<T>> {
        BartTokenizer::new(vocab, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options() {
        let options = TokenizerOptions::default();
        assert_eq!(options.special_tokens(), &SpecialTokens::default());
        assert_eq!(options.cache_limit(), None);

        let options = options
            .with_cache_limit(NonZeroUsize::new(16))
            .with_special_tokens(SpecialTokens::default().with_unk("[UNK]"));
        assert_eq!(options.cache_limit(), NonZeroUsize::new(16));
        assert_eq!(options.special_tokens().unk, "[UNK]");

        let mut options = options;
        options.set_cache_limit(None::<NonZeroUsize>);
        assert_eq!(options.cache_limit(), None);
    }
}
