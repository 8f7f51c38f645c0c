//! # Inference Backend

use crate::{generation::Tensor3, types::TokenType};

/// An encoder/decoder inference engine.
///
/// Implementations wrap the actual model runtime; calls are made
/// synchronously and in order, and errors are passed through unchanged.
pub trait Seq2SeqBackend<T: TokenType> {
    /// The error type of the inference runtime.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run the encoder.
    ///
    /// ## Arguments
    /// * `input_ids` - The framed input ids.
    /// * `attention_mask` - All ones, the same length as `input_ids`.
    ///
    /// ## Returns
    /// Hidden states shaped ``[1, input_ids.len(), hidden_size]``.
    fn run_encoder(
        &self,
        input_ids: &[T],
        attention_mask: &[T],
    ) -> Result<Tensor3, Self::Error>;

    /// Run the decoder over the ids generated so far.
    ///
    /// ## Arguments
    /// * `input_ids` - Every id generated so far, starting with the begin id.
    /// * `encoder_attention_mask` - The mask passed to the encoder.
    /// * `encoder_hidden_states` - The encoder output.
    ///
    /// ## Returns
    /// Scores shaped ``[1, input_ids.len(), vocab_size]``.
    fn run_decoder(
        &self,
        input_ids: &[T],
        encoder_attention_mask: &[T],
        encoder_hidden_states: &Tensor3,
    ) -> Result<Tensor3, Self::Error>;
}
