//! # Greedy Generator

use crate::{
    errors::BartchipperError,
    generation::{
        CancellationToken,
        GenerateError,
        GenerationConfig,
        Seq2SeqBackend,
        Tensor3,
        argmax,
    },
    types::TokenType,
};

/// Why generation stopped. Both are normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The decoder selected the end id.
    EndOfSequence,

    /// `max_steps` ids were appended.
    MaxSteps,
}

/// The state of a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationState {
    /// The sequence holds only the begin id.
    Start,

    /// The next decoder call is for step `step`.
    Generating {
        /// The 0-based step index.
        step: usize,
    },

    /// Generation is finished.
    Stopped(StopReason),
}

/// The result of a finished generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation<T: TokenType> {
    /// The generated ids; starts with the begin id, never holds the end id.
    pub tokens: Vec<T>,

    /// Why generation stopped.
    pub stop_reason: StopReason,

    /// The number of decoder calls made.
    pub steps: usize,
}

/// Greedy step-by-step decoder driver.
///
/// Owns the growing sequence and the fixed encoder outputs;
/// borrows the backend.
///
/// ## Example
/// ```rust,no_run
/// # use bartchipper::generation::{Generator, GenerationConfig, Seq2SeqBackend};
/// # fn demo<B: Seq2SeqBackend<u32>>(backend: &B, input_ids: &[u32]) {
/// let generator = Generator::encode(backend, GenerationConfig::default(), input_ids).unwrap();
/// let generation = generator.run().unwrap();
/// assert_eq!(generation.tokens[0], 0);
/// # }
/// ```
pub struct Generator<'a, T, B>
where
    T: TokenType,
    B: Seq2SeqBackend<T>,
{
    backend: &'a B,
    config: GenerationConfig<T>,
    encoder_attention_mask: Vec<T>,
    encoder_hidden_states: Tensor3,
    cancellation: Option<CancellationToken>,

    state: GenerationState,
    tokens: Vec<T>,
    steps: usize,
}

impl<'a, T, B> Generator<'a, T, B>
where
    T: TokenType,
    B: Seq2SeqBackend<T>,
{
    /// Create a generator from precomputed encoder outputs.
    ///
    /// ## Arguments
    /// * `backend` - The inference backend.
    /// * `config` - Generation config.
    /// * `encoder_attention_mask` - The mask passed to the encoder.
    /// * `encoder_hidden_states` - The encoder output.
    pub fn new(
        backend: &'a B,
        config: GenerationConfig<T>,
        encoder_attention_mask: Vec<T>,
        encoder_hidden_states: Tensor3,
    ) -> Self {
        Self {
            backend,
            config,
            encoder_attention_mask,
            encoder_hidden_states,
            cancellation: None,
            state: GenerationState::Start,
            tokens: vec![config.begin_id],
            steps: 0,
        }
    }

    /// Run the encoder once, and create a generator over its output.
    ///
    /// ## Arguments
    /// * `backend` - The inference backend.
    /// * `config` - Generation config.
    /// * `input_ids` - The framed input ids.
    ///
    /// ## Returns
    /// The generator; or the encoder's error, or a shape error if the
    /// hidden states do not match ``[1, input_ids.len(), _]``.
    pub fn encode(
        backend: &'a B,
        config: GenerationConfig<T>,
        input_ids: &[T],
    ) -> Result<Self, GenerateError<B::Error>> {
        let attention_mask = vec![T::one(); input_ids.len()];

        let hidden_states = backend
            .run_encoder(input_ids, &attention_mask)
            .map_err(GenerateError::Inference)?;

        let [batch, seq_len, _] = hidden_states.dims();
        if batch != 1 || seq_len != input_ids.len() {
            return Err(BartchipperError::Shape(format!(
                "encoder output {:?} does not match {} input ids",
                hidden_states.dims(),
                input_ids.len()
            ))
            .into());
        }
        log::debug!("encoded {} input ids", input_ids.len());

        Ok(Self::new(backend, config, attention_mask, hidden_states))
    }

    /// Attach a cancellation token, checked before each decoder call.
    pub fn with_cancellation(
        mut self,
        cancellation: CancellationToken,
    ) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    /// Get the config.
    pub fn config(&self) -> &GenerationConfig<T> {
        &self.config
    }

    /// Get the current state.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    /// Get the ids generated so far.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }

    /// Get the number of decoder calls made.
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Advance by one step.
    ///
    /// From `Start` or `Generating`, makes at most one decoder call;
    /// a `Stopped` generator is left unchanged.
    ///
    /// ## Returns
    /// The new state; or an error, after which the generator must be discarded.
    pub fn step(&mut self) -> Result<GenerationState, GenerateError<B::Error>> {
        let step = match self.state {
            GenerationState::Stopped(_) => return Ok(self.state),
            GenerationState::Start => 0,
            GenerationState::Generating { step } => step,
        };

        if step >= self.config.max_steps {
            self.state = GenerationState::Stopped(StopReason::MaxSteps);
            return Ok(self.state);
        }

        if self.is_cancelled() {
            log::debug!("cancelled before step {step}");
            return Err(GenerateError::Cancelled {
                generated: self.tokens.len() - 1,
            });
        }

        let scores = self
            .backend
            .run_decoder(
                &self.tokens,
                &self.encoder_attention_mask,
                &self.encoder_hidden_states,
            )
            .map_err(GenerateError::Inference)?;
        self.steps += 1;

        let idx = argmax(scores.last_row()?)?;
        let next = T::from_usize(idx).ok_or_else(|| {
            BartchipperError::Shape(format!("selected index {idx} is not a valid token id"))
        })?;
        log::debug!("step {step}: selected {next}");

        self.state = if next == self.config.end_id {
            GenerationState::Stopped(StopReason::EndOfSequence)
        } else {
            self.tokens.push(next);
            if step + 1 >= self.config.max_steps {
                GenerationState::Stopped(StopReason::MaxSteps)
            } else {
                GenerationState::Generating { step: step + 1 }
            }
        };

        Ok(self.state)
    }

    /// Step until stopped.
    ///
    /// ## Returns
    /// The finished [`Generation`]; or the first error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn run(mut self) -> Result<Generation<T>, GenerateError<B::Error>> {
        let stop_reason = loop {
            if let GenerationState::Stopped(reason) = self.step()? {
                break reason;
            }
        };

        log::info!(
            "generation stopped ({stop_reason:?}) after {} steps, {} ids",
            self.steps,
            self.tokens.len()
        );

        Ok(Generation {
            tokens: self.tokens,
            stop_reason,
            steps: self.steps,
        })
    }
}
