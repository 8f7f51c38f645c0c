//! # Special Tokens
//!
//! BART marks sequence boundaries with ``<s>`` / ``</s>``, pads with ``<pad>``,
//! and substitutes ``<unk>`` for anything outside the vocabulary.

use crate::{
    errors::{BCResult, BartchipperError},
    types::TokenType,
    vocab::TokenVocab,
};

/// The BART begin-of-sequence token.
pub const BART_BOS_TOKEN: &str = "<s>";

/// The BART end-of-sequence token.
pub const BART_EOS_TOKEN: &str = "</s>";

/// The BART padding token.
pub const BART_PAD_TOKEN: &str = "<pad>";

/// The BART unknown token.
pub const BART_UNK_TOKEN: &str = "<unk>";

/// Surface strings of the special tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecialTokens {
    /// Begin-of-sequence token.
    pub bos: String,

    /// End-of-sequence token.
    pub eos: String,

    /// Padding token.
    pub pad: String,

    /// Unknown token.
    pub unk: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            bos: BART_BOS_TOKEN.to_string(),
            eos: BART_EOS_TOKEN.to_string(),
            pad: BART_PAD_TOKEN.to_string(),
            unk: BART_UNK_TOKEN.to_string(),
        }
    }
}

impl SpecialTokens {
    /// Set the begin-of-sequence token.
    pub fn with_bos<S: Into<String>>(
        mut self,
        bos: S,
    ) -> Self {
        self.bos = bos.into();
        self
    }

    /// Set the end-of-sequence token.
    pub fn with_eos<S: Into<String>>(
        mut self,
        eos: S,
    ) -> Self {
        self.eos = eos.into();
        self
    }

    /// Set the padding token.
    pub fn with_pad<S: Into<String>>(
        mut self,
        pad: S,
    ) -> Self {
        self.pad = pad.into();
        self
    }

    /// Set the unknown token.
    pub fn with_unk<S: Into<String>>(
        mut self,
        unk: S,
    ) -> Self {
        self.unk = unk.into();
        self
    }

    /// The surface strings removed from decoded text.
    pub fn stripped_on_decode(&self) -> [&str; 3] {
        [self.bos.as_str(), self.eos.as_str(), self.pad.as_str()]
    }

    /// Resolve the boundary token ids against a vocabulary.
    ///
    /// ## Returns
    /// The resolved ids; or a configuration error naming the first missing token.
    pub fn resolve<T: TokenType>(
        &self,
        vocab: &TokenVocab<T>,
    ) -> BCResult<SpecialTokenIds<T>> {
        Ok(SpecialTokenIds {
            bos: required_id(vocab, "bos", &self.bos)?,
            eos: required_id(vocab, "eos", &self.eos)?,
            pad: vocab.lookup_id(&self.pad),
            unk: vocab.lookup_id(&self.unk),
        })
    }

    /// Resolve the unknown token id, which is only required once an
    /// unknown token is actually seen.
    pub fn require_unk<T: TokenType>(
        &self,
        ids: &SpecialTokenIds<T>,
    ) -> BCResult<T> {
        ids.unk.ok_or_else(|| BartchipperError::MissingSpecialToken {
            role: "unk",
            token: self.unk.clone(),
        })
    }
}

fn required_id<T: TokenType>(
    vocab: &TokenVocab<T>,
    role: &'static str,
    token: &str,
) -> BCResult<T> {
    vocab
        .lookup_id(token)
        .ok_or_else(|| BartchipperError::MissingSpecialToken {
            role,
            token: token.to_string(),
        })
}

/// Special token ids resolved against a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialTokenIds<T: TokenType> {
    /// Begin-of-sequence id.
    pub bos: T,

    /// End-of-sequence id.
    pub eos: T,

    /// Padding id, if present.
    pub pad: Option<T>,

    /// Unknown id, if present.
    pub unk: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::TokenIdMap;

    fn vocab_of(entries: &[(&str, u32)]) -> TokenVocab<u32> {
        let map: TokenIdMap<u32> = entries.iter().map(|&(k, v)| (k.to_string(), v)).collect();
        TokenVocab::from_token_map(map).unwrap()
    }

    #[test]
    fn test_resolve_bart_specials() {
        let vocab = vocab_of(&[("<s>", 0), ("<pad>", 1), ("</s>", 2), ("<unk>", 3)]);
        let specials = SpecialTokens::default();

        let ids = specials.resolve(&vocab).unwrap();
        assert_eq!(
            ids,
            SpecialTokenIds {
                bos: 0,
                eos: 2,
                pad: Some(1),
                unk: Some(3),
            }
        );
        assert_eq!(specials.require_unk(&ids).unwrap(), 3);
        assert_eq!(specials.stripped_on_decode(), ["<s>", "</s>", "<pad>"]);
    }

    #[test]
    fn test_missing_boundary_token() {
        let vocab = vocab_of(&[("<s>", 0)]);
        let err = SpecialTokens::default().resolve(&vocab).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(
            err,
            BartchipperError::MissingSpecialToken { role: "eos", .. }
        ));
    }

    #[test]
    fn test_missing_unk_is_lazy() {
        let vocab = vocab_of(&[("<s>", 0), ("</s>", 2)]);
        let specials = SpecialTokens::default();

        let ids = specials.resolve(&vocab).unwrap();
        assert_eq!(ids.pad, None);
        assert_eq!(ids.unk, None);

        let err = specials.require_unk(&ids).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_custom_specials() {
        let vocab = vocab_of(&[("[CLS]", 7), ("[SEP]", 8)]);
        let specials = SpecialTokens::default()
            .with_bos("[CLS]")
            .with_eos("[SEP]")
            .with_pad("[PAD]")
            .with_unk("[UNK]");

        let ids = specials.resolve(&vocab).unwrap();
        assert_eq!((ids.bos, ids.eos), (7, 8));
    }
}
