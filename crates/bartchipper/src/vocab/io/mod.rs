//! # Vocabulary IO
//!
//! BART ships its vocabulary as two resources:
//! * ``vocab.json`` - a flat ``{ token: id }`` JSON object; see [`read_vocab_json`].
//! * ``merges.txt`` - ordered merge rules, one ``first second`` pair per line;
//!   see [`read_merges_txt`].
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use bartchipper::vocab::BartVocab;
//!
//! fn example() -> bartchipper::BCResult<BartVocab<u32>> {
//!     BartVocab::from_paths("vocab.json", "merges.txt")
//! }
//! ```

mod merges_txt;
mod vocab_json;

#[doc(inline)]
pub use merges_txt::*;
#[doc(inline)]
pub use vocab_json::*;
