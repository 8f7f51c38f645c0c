//! # Parallel Encoder

use std::sync::Arc;

use crate::{errors::BCResult, tokenizer::BartTokenizer, types::TokenType};

/// Batch-Level Parallel Tokenizer Wrapper.
///
/// Encodes and decodes independent texts on the ``rayon`` pool.
/// Every worker shares the wrapped tokenizer, and so its BPE cache.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType> {
    /// Wrapped tokenizer.
    pub inner: Arc<BartTokenizer<T>>,
}

impl<T: TokenType> ParallelRayonEncoder<T> {
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The tokenizer to wrap.
    pub fn new<B>(inner: B) -> Self
    where
        B: Into<Arc<BartTokenizer<T>>>,
    {
        Self {
            inner: inner.into(),
        }
    }

    /// Encode a batch of texts.
    ///
    /// ## Returns
    /// The framed ids of each text, in batch order; or the first error.
    pub fn encode_batch<S>(
        &self,
        batch: &[S],
        add_prefix_space: bool,
    ) -> BCResult<Vec<Vec<T>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.encode(text.as_ref(), add_prefix_space))
            .collect()
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> Vec<String> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|ids| self.inner.decode(ids))
            .collect()
    }
}
