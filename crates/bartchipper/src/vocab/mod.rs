//! # Vocabulary
//!
//! This module provides the vocabulary store and related io mechanisms.
//!
//! ## Byte Table
//!
//! Byte-level BPE operates on text; every byte value is given a printable
//! stand-in character. This is provided by:
//! * [`ByteCharTable`].
//!
//! ## BART Vocabulary
//!
//! The primary user-oriented vocabulary is [`BartVocab`], which contains:
//! * `tokens` - a [`TokenVocab`] ``{ String <-> T }`` vocabulary,
//! * `merges` - a [`MergeRanks`] ``{ (String, String) -> rank }`` table.
//!
//! Both are immutable once loaded, and may be shared freely across threads.
pub mod io;

pub mod bart_vocab;
pub mod byte_table;
pub mod merge_ranks;
pub mod special_tokens;
pub mod token_vocab;

#[doc(inline)]
pub use bart_vocab::BartVocab;
#[doc(inline)]
pub use byte_table::ByteCharTable;
#[doc(inline)]
pub use merge_ranks::{MergeRanks, Rank};
#[doc(inline)]
pub use special_tokens::{SpecialTokenIds, SpecialTokens};
#[doc(inline)]
pub use token_vocab::{IdTokenMap, TokenIdMap, TokenVocab};
