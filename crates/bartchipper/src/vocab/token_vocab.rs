//! # Token ``{ String <-> T }`` Vocabulary

use crate::{
    errors::{BCResult, BartchipperError},
    types::{BCHashMap, TokenType},
};

/// Map from token strings to ids.
pub type TokenIdMap<T> = BCHashMap<String, T>;

/// Map from ids to token strings.
pub type IdTokenMap<T> = BCHashMap<T, String>;

/// Bidirectional token string / id vocabulary.
///
/// The inverse map is derived on construction; and construction fails
/// if two tokens share an id, so ``id -> token -> id`` always round-trips.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_ids: TokenIdMap<T>,
    id_tokens: IdTokenMap<T>,
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from a ``{ token -> id }`` map.
    ///
    /// ## Arguments
    /// * `token_ids` - The forward map.
    ///
    /// ## Returns
    /// A `Result` containing the vocabulary, or a [`BartchipperError::VocabConflict`]
    /// if the map is not injective.
    pub fn from_token_map(token_ids: TokenIdMap<T>) -> BCResult<Self> {
        let mut id_tokens: IdTokenMap<T> = crate::types::hash_map_with_capacity(token_ids.len());

        for (token, &id) in token_ids.iter() {
            if let Some(prev) = id_tokens.insert(id, token.clone()) {
                return Err(BartchipperError::VocabConflict(format!(
                    "id {id} assigned to both {prev:?} and {token:?}"
                )));
            }
        }

        Ok(Self {
            token_ids,
            id_tokens,
        })
    }

    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.token_ids.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.token_ids.is_empty()
    }

    /// Get the largest id, if any.
    pub fn max_id(&self) -> Option<T> {
        self.id_tokens.keys().max().copied()
    }

    /// Get the ``{ token -> id }`` map.
    pub fn token_ids(&self) -> &TokenIdMap<T> {
        &self.token_ids
    }

    /// Look up the id of a token.
    #[inline(always)]
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_ids.get(token).copied()
    }

    /// Look up the token string of an id.
    #[inline(always)]
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_tokens.get(&id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_vocab() {
        type T = u32;

        let map: TokenIdMap<T> = [("<s>", 0), ("</s>", 2), ("he", 5)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let vocab = TokenVocab::from_token_map(map).unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_id(), Some(5));

        assert_eq!(vocab.lookup_id("he"), Some(5));
        assert_eq!(vocab.lookup_id("h"), None);
        assert_eq!(vocab.lookup_token(2), Some("</s>"));
        assert_eq!(vocab.lookup_token(1), None);

        for (token, &id) in vocab.token_ids() {
            assert_eq!(vocab.lookup_token(id), Some(token.as_str()));
        }
    }

    #[test]
    fn test_token_vocab_conflict() {
        type T = u32;

        let map: TokenIdMap<T> = [("a", 1), ("b", 1)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let err = TokenVocab::from_token_map(map).unwrap_err();
        assert!(matches!(err, BartchipperError::VocabConflict(_)));
        assert!(err.is_resource_error());
    }

    #[test]
    fn test_empty_vocab() {
        let vocab: TokenVocab<u16> = TokenVocab::default();
        assert!(vocab.is_empty());
        assert_eq!(vocab.max_id(), None);
    }
}
