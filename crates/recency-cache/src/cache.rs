//! Bounded LRU (least-recently-used) key-value cache with O(1) operations.
//!
//! Composes two structures kept in lockstep: a `HashMap` index from key to
//! arena slot, and a [`RecencyList`] ordering those slots from most- to
//! least-recently used. Lookups consult the index first; hits reposition the
//! entry via the slot the index already holds, and capacity-triggered
//! eviction removes the list's back entry before the new one is inserted,
//! so the size bound holds at every observable point.
//!
//! # Features
//! - O(1) get, put, remove, peek
//! - Bounded capacity with automatic LRU eviction
//! - Hit/miss/eviction statistics
//! - Iterators (MRU→LRU and LRU→MRU order)
//! - Dynamic resize with bulk eviction
//!
//! # Example
//! ```
//! use recency_cache::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"a"), Some(&1));
//! // "a" is now most-recently used, "b" is least-recently used
//!
//! cache.put("d", 4); // evicts "b"
//! assert_eq!(cache.get(&"b"), None);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::recency_list::{Iter, RecencyList, RevIter};

/// Cache hit/miss/eviction counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
    pub updates: u64,
    pub removals: u64,
}

impl CacheStats {
    /// Hit rate as a fraction in [0.0, 1.0]. Returns 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of lookups (hits + misses).
    pub fn total_lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Bounded LRU cache.
///
/// Invariants: `len() == index entries == list entries <= capacity()` after
/// every operation; the index entry for a key always names the slot
/// currently representing that key in the recency order.
pub struct LruCache<K, V> {
    /// Maximum number of entries, fixed at construction (until [`resize`](Self::resize)).
    capacity: usize,
    /// Key → arena slot in the recency list.
    index: HashMap<K, usize>,
    /// Recency order: front = most recent, back = least recent.
    list: RecencyList<K, V>,
    stats: CacheStats,
}

impl<K, V> std::fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Use [`try_new`](Self::try_new) when the
    /// capacity comes from untrusted configuration.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be > 0");
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            list: RecencyList::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Fallible constructor: rejects a zero capacity instead of panicking.
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::new(capacity))
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Cache statistics accumulated since construction or [`reset_stats`](Self::reset_stats).
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset the statistics counters.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Look up `key`, promoting it to most-recently-used on a hit.
    ///
    /// This is a mutating read: recency state changes even though the
    /// caller perceives it as a query. A miss returns `None` with no side
    /// effect on the ordering. Use [`peek`](Self::peek) for a
    /// recency-neutral read.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&slot) = self.index.get(key) {
            self.list.move_to_front(slot);
            self.stats.hits += 1;
            self.list.value(slot)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if let Some(&slot) = self.index.get(key) {
            self.list.move_to_front(slot);
            self.stats.hits += 1;
            self.list.value_mut(slot)
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Read `key` without touching the recency order or the stats.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|&slot| self.list.value(slot))
    }

    /// Returns true if `key` is present, without promoting it.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or update a key-value pair.
    ///
    /// An existing key has its value overwritten and is promoted to
    /// most-recently-used; the size is unchanged and `None` is returned.
    /// A new key while at capacity first evicts the least-recently-used
    /// entry (eviction strictly precedes insertion, and exactly one entry
    /// is evicted), returning the evicted pair.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            self.list.set_value(slot, value);
            self.list.move_to_front(slot);
            self.stats.updates += 1;
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let slot = self.list.push_front(key.clone(), value);
        self.index.insert(key, slot);
        self.stats.insertions += 1;

        evicted
    }

    /// Remove `key`, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        let value = self.list.remove(slot);
        self.stats.removals += 1;
        value
    }

    /// Least-recently-used entry, without removing or promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let slot = self.list.back()?;
        self.list.value(slot).map(|v| (self.list.key(slot), v))
    }

    /// Most-recently-used entry, without removing or promoting it.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        let slot = self.list.front()?;
        self.list.value(slot).map(|v| (self.list.key(slot), v))
    }

    /// Remove and return the least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        self.evict_lru()
    }

    /// Drop all entries. Capacity and stats are unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    /// Iterate entries from most-recently-used to least-recently-used.
    pub fn iter_mru(&self) -> Iter<'_, K, V> {
        self.list.iter()
    }

    /// Iterate entries from least-recently-used to most-recently-used.
    pub fn iter_lru(&self) -> RevIter<'_, K, V> {
        self.list.iter_rev()
    }

    /// Change the capacity, evicting least-recently-used entries while the
    /// size exceeds the new bound. Returns the evicted pairs in eviction
    /// order.
    ///
    /// # Panics
    /// Panics if `new_capacity` is 0.
    pub fn resize(&mut self, new_capacity: usize) -> Vec<(K, V)> {
        assert!(new_capacity > 0, "cache capacity must be > 0");
        let mut evicted = Vec::new();
        while self.index.len() > new_capacity {
            if let Some(pair) = self.evict_lru() {
                evicted.push(pair);
            }
        }
        tracing::debug!(
            old_capacity = self.capacity,
            new_capacity,
            evicted = evicted.len(),
            "cache resized"
        );
        self.capacity = new_capacity;
        evicted
    }

    /// Keep only entries matching the predicate, visited in LRU→MRU order.
    /// Entries dropped here count as removals, not evictions.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let doomed: Vec<K> = self
            .iter_lru()
            .filter(|(k, v)| !f(k, v))
            .map(|(k, _)| k.clone())
            .collect();

        for key in doomed {
            self.remove(&key);
        }
    }

    /// Evict the back of the recency list and drop its index entry.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.index.remove(&key);
        self.stats.evictions += 1;
        tracing::trace!(len = self.index.len(), "evicted least-recently-used entry");
        Some((key, value))
    }
}
