//! # BPE Result Cache

use core::{
    fmt::Debug,
    num::NonZeroUsize,
    sync::atomic::{AtomicUsize, Ordering},
};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::BCHashMap;

/// Snapshot of [`BpeCache`] counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// The number of cached words.
    pub entries: usize,

    /// Lookups answered from the cache.
    pub hits: usize,

    /// Lookups which had to compute a result.
    pub misses: usize,
}

/// Interior-Mutable Shared Merge Cache.
///
/// Maps a byte-encoded word to its space-joined merge result.
/// Entries are never invalidated; the cache is purely an optimization.
///
/// Misses are computed outside the lock (copy-on-miss); if two threads miss
/// on the same word, both compute, and the first insert wins.
pub struct BpeCache {
    entries: RwLock<BCHashMap<String, Arc<str>>>,

    /// Once this many entries are held, new results are no longer stored.
    limit: Option<NonZeroUsize>,

    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Default for BpeCache {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Debug for BpeCache {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("BpeCache")
            .field("limit", &self.limit)
            .field("stats", &self.stats())
            .finish()
    }
}

impl BpeCache {
    /// Create a new cache.
    ///
    /// ## Arguments
    /// * `limit` - The maximum number of stored entries; `None` is unbounded.
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        Self {
            entries: RwLock::new(BCHashMap::default()),
            limit,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Get the configured entry limit.
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Get the number of cached words.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a word, without touching the counters.
    pub fn peek(
        &self,
        word: &str,
    ) -> Option<Arc<str>> {
        self.entries.read().get(word).cloned()
    }

    /// Look up a word; on a miss, compute and store the result.
    ///
    /// ## Arguments
    /// * `word` - The cache key.
    /// * `compute` - Builds the value on a miss.
    ///
    /// ## Returns
    /// The cached or computed value.
    pub fn get_or_insert_with<F>(
        &self,
        word: &str,
        compute: F,
    ) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        if let Some(hit) = self.entries.read().get(word) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return hit.clone();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value: Arc<str> = compute().into();

        let mut writer = self.entries.write();
        if let Some(existing) = writer.get(word) {
            return existing.clone();
        }
        if self.limit.is_none_or(|limit| writer.len() < limit.get()) {
            writer.insert(word.to_string(), value.clone());
        }
        value
    }

    /// Snapshot the counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::traits::static_is_send_sync_check;

    #[test]
    fn test_cache_hits_and_misses() {
        let cache = BpeCache::default();
        static_is_send_sync_check(&cache);
        assert!(cache.is_empty());

        let mut calls = 0;
        let v = cache.get_or_insert_with("abc", || {
            calls += 1;
            "a bc".to_string()
        });
        assert_eq!(&*v, "a bc");

        let v = cache.get_or_insert_with("abc", || {
            calls += 1;
            "unused".to_string()
        });
        assert_eq!(&*v, "a bc");
        assert_eq!(calls, 1);

        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1,
            }
        );
        assert_eq!(cache.peek("abc").as_deref(), Some("a bc"));
        assert_eq!(cache.peek("xyz"), None);
    }

    #[test]
    fn test_cache_limit() {
        let cache = BpeCache::new(NonZeroUsize::new(1));
        assert_eq!(cache.limit(), NonZeroUsize::new(1));

        cache.get_or_insert_with("a", || "a".to_string());
        let v = cache.get_or_insert_with("b", || "b".to_string());

        // Computed, but not stored.
        assert_eq!(&*v, "b");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.peek("b"), None);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_cache_debug() {
        let cache = BpeCache::default();
        assert_eq!(
            format!("{:?}", cache),
            "BpeCache { limit: None, stats: CacheStats { entries: 0, hits: 0, misses: 0 } }"
        );
    }
}
