//! # `bartchipper` BART Tokenizer and Greedy Summarizer
//!
//! A byte-level BPE tokenizer compatible with BART ``vocab.json`` /
//! ``merges.txt`` resources; and a greedy encoder/decoder generation loop
//! driven through an external inference backend.
//!
//! See:
//! * [`vocab`] to load vocabularies and merge tables.
//! * [`tokenizer`] to encode text into ids, and decode ids into text.
//! * [`generation`] to run the greedy decoder loop over a [`generation::Seq2SeqBackend`].
//! * [`pipeline`] to summarize text end-to-end.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! These swap all HashMap/HashSet implementations for ``ahash`` (or ``foldhash``);
//! through the ``types::BCHashMap`` / ``types::BCHashSet`` aliases.
//! Without either, the ``std`` hashers are used.
//!
//! #### feature: ``rayon``
//!
//! This enables [`rayon::ParallelRayonEncoder`], for batch encoding and decoding.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation points on BPE merges,
//! encoding, and generation.
//!
//! #### feature: ``testing``
//!
//! This exposes the [`testing`] fixtures to downstream crates.
//!
//! ## Loading a Tokenizer
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bartchipper::{BartTokenizer, BartVocab, BCResult};
//!
//! fn demo() -> BCResult<()> {
//!     type T = u32;
//!
//!     let vocab: BartVocab<T> = BartVocab::from_paths("vocab.json", "merges.txt")?;
//!     let tokenizer = BartTokenizer::from_vocab(Arc::new(vocab))?;
//!
//!     let ids = tokenizer.encode("Hello world", false)?;
//!     assert_eq!(ids.first(), Some(&tokenizer.bos_id()));
//!     assert_eq!(tokenizer.decode(&ids), "Hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod bpe;
pub mod compat;
pub mod errors;
pub mod generation;
pub mod pipeline;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{BCResult, BartchipperError};
#[doc(inline)]
pub use generation::{GenerateError, Generation, GenerationConfig, Generator, Seq2SeqBackend};
#[doc(inline)]
pub use pipeline::Summarizer;
#[doc(inline)]
pub use tokenizer::{BartTokenizer, TokenizerOptions};
#[doc(inline)]
pub use vocab::{BartVocab, SpecialTokens};
