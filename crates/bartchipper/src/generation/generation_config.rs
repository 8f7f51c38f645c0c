//! # Generation Config

use crate::{tokenizer::BartTokenizer, types::TokenType};

/// The default bound on generated ids.
pub const DEFAULT_MAX_STEPS: usize = 256;

/// Configuration for a [`Generator`](crate::generation::Generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig<T: TokenType> {
    /// The maximum number of ids appended after the begin id.
    pub max_steps: usize,

    /// The id the generated sequence starts with.
    pub begin_id: T,

    /// The id that stops generation; never appended.
    pub end_id: T,
}

impl<T: TokenType> Default for GenerationConfig<T> {
    /// BART ids: ``<s>`` is 0, ``</s>`` is 2.
    fn default() -> Self {
        Self::new(T::zero(), T::one() + T::one())
    }
}

impl<T: TokenType> GenerationConfig<T> {
    /// Create a config with [`DEFAULT_MAX_STEPS`].
    pub fn new(
        begin_id: T,
        end_id: T,
    ) -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            begin_id,
            end_id,
        }
    }

    /// Create a config using a tokenizer's begin/end ids.
    pub fn for_tokenizer(tokenizer: &BartTokenizer<T>) -> Self {
        Self::new(tokenizer.bos_id(), tokenizer.eos_id())
    }

    /// Get the step bound.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Set the step bound.
    pub fn set_max_steps(
        &mut self,
        max_steps: usize,
    ) {
        self.max_steps = max_steps;
    }

    /// Set the step bound and return the config.
    pub fn with_max_steps(
        mut self,
        max_steps: usize,
    ) -> Self {
        self.set_max_steps(max_steps);
        self
    }

    /// Get the begin id.
    pub fn begin_id(&self) -> T {
        self.begin_id
    }

    /// Set the begin id and return the config.
    pub fn with_begin_id(
        mut self,
        begin_id: T,
    ) -> Self {
        self.begin_id = begin_id;
        self
    }

    /// Get the end id.
    pub fn end_id(&self) -> T {
        self.end_id
    }

    /// Set the end id and return the config.
    pub fn with_end_id(
        mut self,
        end_id: T,
    ) -> Self {
        self.end_id = end_id;
        self
    }
}
