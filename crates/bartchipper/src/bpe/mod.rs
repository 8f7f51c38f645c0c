//! # Byte-Pair Merging
//!
//! * [`BpeMerger`] - rank-driven pairwise merging of a byte-encoded word.
//! * [`BpeCache`] - a shared, grow-only memo of merge results.

mod bpe_cache;
mod bpe_merger;

#[doc(inline)]
pub use bpe_cache::*;
#[doc(inline)]
pub use bpe_merger::*;
