//! # Rank-Driven BPE Merger

use core::num::NonZeroUsize;
use std::sync::Arc;

use compact_str::CompactString;

use crate::{
    bpe::{BpeCache, CacheStats},
    vocab::MergeRanks,
};

/// Find the adjacent pair with the lowest merge rank.
///
/// Pairs absent from the table never qualify. Among equal ranks
/// (only possible for repeats of the same pair) the leftmost wins.
///
/// ## Returns
/// The index of the left unit of the pair, if any pair is ranked.
fn lowest_ranked_pair(
    ranks: &MergeRanks,
    units: &[CompactString],
) -> Option<usize> {
    units
        .windows(2)
        .enumerate()
        .filter_map(|(idx, w)| ranks.get_rank(&w[0], &w[1]).map(|rank| (rank, idx)))
        .min_by_key(|&(rank, _)| rank)
        .map(|(_, idx)| idx)
}

/// Merge every non-overlapping ``(first, second)`` occurrence, left to right.
fn merge_pair(
    units: &[CompactString],
    first: &str,
    second: &str,
) -> Vec<CompactString> {
    let mut merged = Vec::with_capacity(units.len());

    let mut i = 0;
    while i < units.len() {
        if i + 1 < units.len() && units[i].as_str() == first && units[i + 1].as_str() == second {
            let mut unit = units[i].clone();
            unit.push_str(second);
            merged.push(unit);
            i += 2;
        } else {
            merged.push(units[i].clone());
            i += 1;
        }
    }

    merged
}

/// Run the BPE merge loop over a byte-encoded word.
///
/// ## Arguments
/// * `ranks` - The merge rank table.
/// * `word` - A word already translated through the byte table.
///
/// ## Returns
/// The final subword units, in order.
pub fn merge_units(
    ranks: &MergeRanks,
    word: &str,
) -> Vec<CompactString> {
    let mut buf = [0u8; 4];
    let mut units: Vec<CompactString> = word
        .chars()
        .map(|c| CompactString::from(&*c.encode_utf8(&mut buf)))
        .collect();

    while units.len() > 1 {
        let Some(idx) = lowest_ranked_pair(ranks, &units) else {
            break;
        };
        units = merge_pair(&units, &units[idx], &units[idx + 1]);
    }

    units
}

/// Memoizing BPE merger.
///
/// Holds a shared [`MergeRanks`] table, and a [`BpeCache`] keyed by
/// the exact input word. The cache is only valid for this table.
#[derive(Debug)]
pub struct BpeMerger {
    ranks: Arc<MergeRanks>,
    cache: BpeCache,
}

impl BpeMerger {
    /// Create a new merger.
    ///
    /// ## Arguments
    /// * `ranks` - The merge rank table.
    /// * `cache_limit` - Bound on cached words; `None` is unbounded.
    pub fn new(
        ranks: Arc<MergeRanks>,
        cache_limit: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            ranks,
            cache: BpeCache::new(cache_limit),
        }
    }

    /// Get the merge rank table.
    pub fn ranks(&self) -> &Arc<MergeRanks> {
        &self.ranks
    }

    /// Get the merge cache.
    pub fn cache(&self) -> &BpeCache {
        &self.cache
    }

    /// Snapshot the cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Merge a byte-encoded word.
    ///
    /// ## Arguments
    /// * `word` - A word already translated through the byte table.
    ///
    /// ## Returns
    /// The merged subword units joined by single spaces.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn merge(
        &self,
        word: &str,
    ) -> Arc<str> {
        self.cache.get_or_insert_with(word, || {
            log::trace!("bpe cache miss: {word:?}");
            merge_units(&self.ranks, word).join(" ")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks() -> Arc<MergeRanks> {
        Arc::new(MergeRanks::from_merges([
            ("h", "e"),
            ("l", "l"),
            ("he", "ll"),
            ("a", "a"),
        ]))
    }

    #[test]
    fn test_merge_units() {
        let ranks = ranks();

        assert_eq!(merge_units(&ranks, "hello"), vec!["hell", "o"]);
        assert_eq!(merge_units(&ranks, "he"), vec!["he"]);
        assert_eq!(merge_units(&ranks, "eh"), vec!["e", "h"]);
        assert_eq!(merge_units(&ranks, "x"), vec!["x"]);
        assert!(merge_units(&ranks, "").is_empty());
    }

    #[test]
    fn test_merges_do_not_overlap() {
        let ranks = ranks();

        assert_eq!(merge_units(&ranks, "aaa"), vec!["aa", "a"]);
        assert_eq!(merge_units(&ranks, "aaaa"), vec!["aa", "aa"]);
    }

    #[test]
    fn test_lowest_rank_wins_over_position() {
        // ("l", "l") is ranked before ("e", "l"); so "ell" -> "e ll", not "el l".
        let ranks = MergeRanks::from_merges([("l", "l"), ("e", "l")]);
        assert_eq!(merge_units(&ranks, "ell"), vec!["e", "ll"]);

        let ranks = MergeRanks::from_merges([("e", "l"), ("l", "l")]);
        assert_eq!(merge_units(&ranks, "ell"), vec!["el", "l"]);
    }

    #[test]
    fn test_one_unit_per_char() {
        let ranks = MergeRanks::default();

        assert_eq!(
            merge_units(&ranks, "a\u{120}\u{c3}\u{a9}"),
            vec!["a", "\u{120}", "\u{c3}", "\u{a9}"]
        );
        assert_eq!(merge_units(&ranks, "\u{10a}\u{10a}"), vec!["\u{10a}", "\u{10a}"]);
        assert_eq!(merge_units(&ranks, "x"), vec!["x"]);
    }

    #[test]
    fn test_multibyte_units() {
        let ranks = MergeRanks::from_merges([("\u{120}", "t"), ("\u{120}t", "he")]);
        let merged = merge_units(&ranks, "\u{120}the");
        assert_eq!(merged, vec!["\u{120}t", "h", "e"]);
    }

    #[test]
    fn test_merger_memoizes() {
        let merger = BpeMerger::new(ranks(), None);
        assert!(Arc::ptr_eq(merger.ranks(), merger.ranks()));

        let first = merger.merge("hello");
        assert_eq!(&*first, "hell o");

        let second = merger.merge("hello");
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));

        let stats = merger.cache_stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(merger.cache().peek("hello").as_deref(), Some("hell o"));
    }
}
