//! # BART Tokenizer Facade

use std::sync::Arc;

use crate::{
    bpe::{BpeMerger, CacheStats},
    compat::strings::string_from_utf8_lossy,
    errors::BCResult,
    spanning::WordSplitter,
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::{BartVocab, ByteCharTable, SpecialTokenIds},
};

/// Prepend a single space unless the text is empty or already starts with whitespace.
fn with_prefix_space(text: &str) -> Option<String> {
    match text.chars().next() {
        Some(c) if !c.is_whitespace() => Some(format!(" {text}")),
        _ => None,
    }
}

/// BART byte-level BPE tokenizer.
///
/// Combines:
///  * a [`WordSplitter`] for the BART word pattern,
///  * the shared [`ByteCharTable`],
///  * a memoizing [`BpeMerger`] over the vocab's merge table, and
///  * the vocab's [`SpecialTokenIds`].
///
/// All methods take `&self`; the tokenizer may be shared across threads,
/// and the BPE cache is shared with it.
#[derive(Debug)]
pub struct BartTokenizer<T: TokenType> {
    vocab: Arc<BartVocab<T>>,
    options: TokenizerOptions,
    special_ids: SpecialTokenIds<T>,
    byte_table: &'static ByteCharTable,
    splitter: WordSplitter,
    merger: BpeMerger,
}

impl<T: TokenType> BartTokenizer<T> {
    /// Build a tokenizer with default options.
    pub fn from_vocab(vocab: Arc<BartVocab<T>>) -> BCResult<Self> {
        Self::new(vocab, TokenizerOptions::default())
    }

    /// Build a tokenizer.
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary.
    /// * `options` - Tokenizer options.
    ///
    /// ## Returns
    /// The tokenizer; or a configuration error if the begin/end tokens
    /// are absent from the vocabulary.
    pub fn new(
        vocab: Arc<BartVocab<T>>,
        options: TokenizerOptions,
    ) -> BCResult<Self> {
        let special_ids = options.special_tokens().resolve(vocab.tokens())?;
        let merger = BpeMerger::new(vocab.merges().clone(), options.cache_limit());

        Ok(Self {
            vocab,
            options,
            special_ids,
            byte_table: ByteCharTable::shared(),
            splitter: WordSplitter::bart()?,
            merger,
        })
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<BartVocab<T>> {
        &self.vocab
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the resolved special token ids.
    pub fn special_ids(&self) -> &SpecialTokenIds<T> {
        &self.special_ids
    }

    /// The begin-of-sequence id.
    pub fn bos_id(&self) -> T {
        self.special_ids.bos
    }

    /// The end-of-sequence id.
    pub fn eos_id(&self) -> T {
        self.special_ids.eos
    }

    /// Snapshot the BPE cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.merger.cache_stats()
    }

    /// Split text into BPE subword tokens.
    ///
    /// Each word matched by the splitter is translated through the byte
    /// table and merged; the units of each word are appended in order.
    ///
    /// ## Arguments
    /// * `text` - The text to tokenize.
    /// * `add_prefix_space` - Prepend a space to text not starting with whitespace.
    ///
    /// ## Returns
    /// The subword token strings.
    pub fn tokenize(
        &self,
        text: &str,
        add_prefix_space: bool,
    ) -> BCResult<Vec<String>> {
        let prefixed = if add_prefix_space {
            with_prefix_space(text)
        } else {
            None
        };
        let text = prefixed.as_deref().unwrap_or(text);

        let mut tokens = Vec::new();
        let mut word = String::new();
        self.splitter.try_for_each_span(text, |range| {
            word.clear();
            self.byte_table
                .append_chars(text[range].as_bytes(), &mut word);

            let merged = self.merger.merge(&word);
            tokens.extend(merged.split(' ').map(str::to_string));
        })?;

        Ok(tokens)
    }

    /// Map tokens to ids, framed by the begin/end ids.
    ///
    /// Tokens absent from the vocabulary map to the unknown id.
    ///
    /// ## Returns
    /// ``[bos, ids.., eos]``; or a configuration error if an unknown
    /// token is seen and the vocabulary has no unknown token.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> BCResult<Vec<T>> {
        let vocab = self.vocab.tokens();

        let mut ids = Vec::with_capacity(tokens.len() + 2);
        ids.push(self.special_ids.bos);
        for token in tokens {
            let id = match vocab.lookup_id(token.as_ref()) {
                Some(id) => id,
                None => self
                    .options
                    .special_tokens()
                    .require_unk(&self.special_ids)?,
            };
            ids.push(id);
        }
        ids.push(self.special_ids.eos);

        Ok(ids)
    }

    /// Tokenize and map to framed ids.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
        add_prefix_space: bool,
    ) -> BCResult<Vec<T>> {
        let tokens = self.tokenize(text, add_prefix_space)?;
        self.convert_tokens_to_ids(&tokens)
    }

    /// Map ids to token strings; unknown ids map to the unknown token string.
    pub fn convert_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> Vec<&str> {
        let vocab = self.vocab.tokens();
        let unk = self.options.special_tokens().unk.as_str();

        ids.iter()
            .map(|&id| vocab.lookup_token(id).unwrap_or(unk))
            .collect()
    }

    /// Join tokens and translate them back to text.
    ///
    /// Chars outside the byte table become ``?``; invalid UTF-8 is
    /// replaced with `U+FFFD`. The result is trimmed.
    pub fn convert_tokens_to_string<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> String {
        let joined: String = tokens.iter().map(AsRef::as_ref).collect();
        let bytes = self.byte_table.decode_str(&joined);
        string_from_utf8_lossy(bytes).trim().to_string()
    }

    /// Decode ids to text.
    ///
    /// All occurrences of the begin, end and pad surface strings are
    /// removed from the decoded text, which is then trimmed.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        let tokens = self.convert_ids_to_tokens(ids);
        let mut text = self.convert_tokens_to_string(&tokens);

        for special in self.options.special_tokens().stripped_on_decode() {
            if !special.is_empty() && text.contains(special) {
                text = text.replace(special, "");
            }
        }

        text.trim().to_string()
    }
}
