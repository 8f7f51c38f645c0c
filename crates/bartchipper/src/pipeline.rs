//! # Summarization Pipeline
//!
//! ``text -> ids -> encoder -> greedy decoder loop -> ids -> text``.

use std::sync::Arc;

use crate::{
    generation::{
        CancellationToken,
        GenerateError,
        Generation,
        GenerationConfig,
        Generator,
        Seq2SeqBackend,
    },
    tokenizer::BartTokenizer,
    types::TokenType,
};

/// Text summarizer over a tokenizer and an inference backend.
///
/// Each request owns its own generated sequence; the tokenizer
/// (and its BPE cache) may be shared between summarizers.
#[derive(Debug)]
pub struct Summarizer<T, B>
where
    T: TokenType,
    B: Seq2SeqBackend<T>,
{
    tokenizer: Arc<BartTokenizer<T>>,
    backend: B,
    config: GenerationConfig<T>,
    add_prefix_space: bool,
}

impl<T, B> Summarizer<T, B>
where
    T: TokenType,
    B: Seq2SeqBackend<T>,
{
    /// Create a summarizer.
    ///
    /// The generation config takes its begin/end ids from the tokenizer.
    pub fn new<K>(
        tokenizer: K,
        backend: B,
    ) -> Self
    where
        K: Into<Arc<BartTokenizer<T>>>,
    {
        let tokenizer = tokenizer.into();
        let config = GenerationConfig::for_tokenizer(&tokenizer);
        Self {
            tokenizer,
            backend,
            config,
            add_prefix_space: false,
        }
    }

    /// Set the generation config and return the summarizer.
    pub fn with_config(
        mut self,
        config: GenerationConfig<T>,
    ) -> Self {
        self.config = config;
        self
    }

    /// Set whether input text gets a prefix space, and return the summarizer.
    pub fn with_add_prefix_space(
        mut self,
        add_prefix_space: bool,
    ) -> Self {
        self.add_prefix_space = add_prefix_space;
        self
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &Arc<BartTokenizer<T>> {
        &self.tokenizer
    }

    /// Get the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the generation config.
    pub fn config(&self) -> &GenerationConfig<T> {
        &self.config
    }

    /// Does input text get a prefix space?
    pub fn add_prefix_space(&self) -> bool {
        self.add_prefix_space
    }

    /// Generate summary ids for a text.
    ///
    /// ## Arguments
    /// * `text` - The text to summarize.
    /// * `cancellation` - Checked before every decoder call.
    pub fn generate(
        &self,
        text: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<Generation<T>, GenerateError<B::Error>> {
        let input_ids = self.tokenizer.encode(text, self.add_prefix_space)?;
        log::debug!("summarizing {} input ids", input_ids.len());

        let mut generator = Generator::encode(&self.backend, self.config, &input_ids)?;
        if let Some(token) = cancellation {
            generator = generator.with_cancellation(token.clone());
        }
        generator.run()
    }

    /// Summarize a text.
    ///
    /// ## Returns
    /// The decoded summary; or the first tokenizer or inference error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn summarize(
        &self,
        text: &str,
    ) -> Result<String, GenerateError<B::Error>> {
        self.summarize_with_cancel(text, None)
    }

    /// Summarize a text, honoring a cancellation token.
    pub fn summarize_with_cancel(
        &self,
        text: &str,
        cancellation: Option<&CancellationToken>,
    ) -> Result<String, GenerateError<B::Error>> {
        let generation = self.generate(text, cancellation)?;
        Ok(self.tokenizer.decode(&generation.tokens))
    }
}
