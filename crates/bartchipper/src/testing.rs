//! # Testing Utilities
//!
//! Fixture vocabularies and a scripted inference backend.

use core::cell::{Cell, RefCell};

use crate::{
    generation::{Seq2SeqBackend, Tensor3},
    types::TokenType,
    vocab::{
        BartVocab,
        ByteCharTable,
        MergeRanks,
        TokenIdMap,
        TokenVocab,
        special_tokens::{BART_BOS_TOKEN, BART_EOS_TOKEN, BART_PAD_TOKEN, BART_UNK_TOKEN},
    },
};

/// The id of the first byte token in [`build_byte_level_test_vocab`].
pub const TEST_BYTE_OFFSET: usize = 4;

/// Build a vocab from explicit token and merge lists.
///
/// ## Panics
/// If the token ids are not unique, or do not fit in `T`.
pub fn build_test_vocab<T: TokenType>(
    tokens: &[(&str, usize)],
    merges: &[(&str, &str)],
) -> BartVocab<T> {
    let token_ids: TokenIdMap<T> = tokens
        .iter()
        .map(|&(token, id)| (token.to_string(), T::from_usize(id).unwrap()))
        .collect();

    BartVocab::new(
        TokenVocab::from_token_map(token_ids).unwrap(),
        MergeRanks::from_merges(merges.iter().copied()),
    )
}

/// Build a complete byte-level vocab.
///
/// * ``<s>``, ``<pad>``, ``</s>``, ``<unk>`` take ids ``0..4``;
/// * every byte's stand-in char takes id ``TEST_BYTE_OFFSET + byte``;
/// * each merge's joined token takes the next free id, in merge order.
///
/// Any text encodes, and decodes back, under this vocab.
pub fn build_byte_level_test_vocab<T: TokenType>(merges: &[(&str, &str)]) -> BartVocab<T> {
    let mut tokens: Vec<(String, usize)> = [BART_BOS_TOKEN, BART_PAD_TOKEN, BART_EOS_TOKEN, BART_UNK_TOKEN]
        .iter()
        .enumerate()
        .map(|(id, token)| (token.to_string(), id))
        .collect();

    let table = ByteCharTable::shared();
    for b in 0..=255u8 {
        tokens.push((table.get_char(b).to_string(), TEST_BYTE_OFFSET + b as usize));
    }

    for (first, second) in merges {
        let joined = format!("{first}{second}");
        if !tokens.iter().any(|(t, _)| *t == joined) {
            let id = tokens.len();
            tokens.push((joined, id));
        }
    }

    let borrowed = tokens
        .iter()
        .map(|(t, id)| (t.as_str(), *id))
        .collect::<Vec<_>>();
    build_test_vocab(&borrowed, merges)
}

/// Scripted [`Seq2SeqBackend`].
///
/// The decoder returns scores whose arg-max at the last position is
/// ``script[step]``, where ``step`` is the number of ids generated so far
/// in the current request; past the end of the script, `fallback` is
/// returned. Call counts and the last decoder inputs are recorded.
#[derive(Debug)]
pub struct ScriptedBackend<T: TokenType> {
    /// The vocab size of the produced score vectors.
    pub vocab_size: usize,

    /// The hidden size of the produced encoder states.
    pub hidden_size: usize,

    /// Arg-max ids, one per generation step.
    pub script: Vec<T>,

    /// Arg-max id once `script` is exhausted.
    pub fallback: T,

    /// If set, the decoder fails at this generation step (0-based).
    pub fail_at_step: Option<usize>,

    encoder_calls: Cell<usize>,
    decoder_calls: Cell<usize>,
    last_decoder_input: RefCell<Vec<T>>,
}

/// Error type of [`ScriptedBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scripted failure at decoder step {step}")]
pub struct ScriptedFailure {
    /// The failing step.
    pub step: usize,
}

impl<T: TokenType> ScriptedBackend<T> {
    /// Create a new scripted backend.
    pub fn new(
        vocab_size: usize,
        script: Vec<T>,
        fallback: T,
    ) -> Self {
        Self {
            vocab_size,
            hidden_size: 4,
            script,
            fallback,
            fail_at_step: None,
            encoder_calls: Cell::new(0),
            decoder_calls: Cell::new(0),
            last_decoder_input: RefCell::new(Vec::new()),
        }
    }

    /// Fail the decoder at this generation step.
    pub fn with_fail_at_step(
        mut self,
        step: usize,
    ) -> Self {
        self.fail_at_step = Some(step);
        self
    }

    /// The number of encoder calls made.
    pub fn encoder_calls(&self) -> usize {
        self.encoder_calls.get()
    }

    /// The number of decoder calls made.
    pub fn decoder_calls(&self) -> usize {
        self.decoder_calls.get()
    }

    /// The ids passed to the most recent decoder call.
    pub fn last_decoder_input(&self) -> Vec<T> {
        self.last_decoder_input.borrow().clone()
    }
}

impl<T: TokenType> Seq2SeqBackend<T> for ScriptedBackend<T> {
    type Error = ScriptedFailure;

    fn run_encoder(
        &self,
        input_ids: &[T],
        attention_mask: &[T],
    ) -> Result<Tensor3, Self::Error> {
        assert_eq!(input_ids.len(), attention_mask.len());
        self.encoder_calls.set(self.encoder_calls.get() + 1);

        let seq_len = input_ids.len();
        Ok(Tensor3::zeros([1, seq_len, self.hidden_size]))
    }

    fn run_decoder(
        &self,
        input_ids: &[T],
        encoder_attention_mask: &[T],
        encoder_hidden_states: &Tensor3,
    ) -> Result<Tensor3, Self::Error> {
        assert_eq!(encoder_hidden_states.dims()[1], encoder_attention_mask.len());

        self.decoder_calls.set(self.decoder_calls.get() + 1);
        *self.last_decoder_input.borrow_mut() = input_ids.to_vec();

        let step = input_ids.len() - 1;

        if self.fail_at_step == Some(step) {
            return Err(ScriptedFailure { step });
        }

        let next = self.script.get(step).copied().unwrap_or(self.fallback);
        let next = next.to_usize().unwrap();

        // Earlier positions point elsewhere; only the last row may matter.
        let positions = input_ids.len();
        let mut scores = vec![0.0f32; positions * self.vocab_size];
        for pos in 0..positions {
            let target = if pos + 1 == positions {
                next
            } else {
                (next + 1) % self.vocab_size
            };
            scores[pos * self.vocab_size + target] = 1.0;
        }

        Ok(Tensor3::new([1, positions, self.vocab_size], scores).unwrap())
    }
}
