//! # Merge Rank ``{ (String, String) -> usize }`` Table

use compact_str::CompactString;

use crate::types::BCHashMap;

/// A merge rank; lower ranks merge first.
pub type Rank = usize;

/// Ordered-pair merge rank table.
///
/// Stored as ``{ first -> { second -> rank } }`` so that lookups can be
/// made from borrowed ``&str`` units without building a pair key.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MergeRanks {
    ranks: BCHashMap<CompactString, BCHashMap<CompactString, Rank>>,
    len: usize,
}

impl MergeRanks {
    /// Build a rank table from an ordered list of merge rules.
    ///
    /// The position of each rule in the list is its rank.
    /// A repeated pair keeps the rank of its first occurrence.
    ///
    /// ## Arguments
    /// * `merges` - The ordered merge rules.
    pub fn from_merges<I, S>(merges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for (rank, (first, second)) in merges.into_iter().enumerate() {
            let (first, second) = (first.as_ref(), second.as_ref());
            if !table.try_insert(first, second, rank) {
                log::warn!("duplicate merge rule ({first:?}, {second:?}) at rank {rank}; ignored");
            }
        }
        table
    }

    /// Insert a pair if it is not already ranked.
    ///
    /// ## Returns
    /// `true` if the pair was inserted.
    fn try_insert(
        &mut self,
        first: &str,
        second: &str,
        rank: Rank,
    ) -> bool {
        let inner = self.ranks.entry(CompactString::from(first)).or_default();
        if inner.contains_key(second) {
            return false;
        }
        inner.insert(CompactString::from(second), rank);
        self.len += 1;
        true
    }

    /// Get the number of ranked pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the rank of the ordered pair ``(first, second)``.
    #[inline(always)]
    pub fn get_rank(
        &self,
        first: &str,
        second: &str,
    ) -> Option<Rank> {
        self.ranks.get(first)?.get(second).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_ranks() {
        let ranks = MergeRanks::from_merges([("h", "e"), ("l", "l"), ("he", "ll")]);
        assert_eq!(ranks.len(), 3);
        assert!(!ranks.is_empty());

        assert_eq!(ranks.get_rank("h", "e"), Some(0));
        assert_eq!(ranks.get_rank("l", "l"), Some(1));
        assert_eq!(ranks.get_rank("he", "ll"), Some(2));

        // Pairs are ordered.
        assert_eq!(ranks.get_rank("e", "h"), None);
        assert_eq!(ranks.get_rank("x", "e"), None);
    }

    #[test]
    fn test_duplicate_keeps_first_rank() {
        let ranks = MergeRanks::from_merges([("a", "b"), ("c", "d"), ("a", "b"), ("e", "f")]);
        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks.get_rank("a", "b"), Some(0));
        assert_eq!(ranks.get_rank("c", "d"), Some(1));
        assert_eq!(ranks.get_rank("e", "f"), Some(3));
    }
}
