//! # Greedy Seq2Seq Generation
//!
//! Drives an encoder/decoder model one token at a time:
//! * the encoder runs once over the input ids,
//! * the decoder runs once per step over every id generated so far,
//! * the highest scoring id of the last position is appended,
//! * generation stops at the end id, or after `max_steps` appended ids.
//!
//! The model itself is an external collaborator, reached through
//! the [`Seq2SeqBackend`] trait.

mod backend;
mod cancellation;
mod generate_error;
mod generation_config;
mod generator;
mod greedy;
mod tensor;

#[doc(inline)]
pub use backend::*;
#[doc(inline)]
pub use cancellation::*;
#[doc(inline)]
pub use generate_error::*;
#[doc(inline)]
pub use generation_config::*;
#[doc(inline)]
pub use generator::*;
#[doc(inline)]
pub use greedy::*;
#[doc(inline)]
pub use tensor::*;
