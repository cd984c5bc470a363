//! recency-cache: bounded LRU key-value cache with O(1) operations.
//!
//! # Architecture
//!
//! ```text
//! LruCache ── index: HashMap<K, slot> ──┐
//!     │                                 │  (both name the same arena slot)
//!     └── RecencyList ──────────────────┘
//!         arena-backed doubly-linked list
//!         front = most recent, back = least recent
//! ```
//!
//! The index answers "is this key cached, and where" in O(1); the recency
//! list answers "which entry goes next" in O(1). Every cache operation
//! keeps the two in lockstep: hits reposition the entry through the slot
//! the index already holds, and eviction removes the list's back entry and
//! its index entry together.
//!
//! # Modules
//!
//! - `cache`: the public LRU cache composing index and recency list
//! - `recency_list`: arena-backed ordered list with O(1) reordering
//! - `error`: construction-time error types
//!
//! # Example
//!
//! ```
//! use recency_cache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! assert_eq!(cache.get(&"a"), Some(&1)); // "b" is now least recently used
//! cache.put("c", 3); // evicts "b"
//! assert_eq!(cache.get(&"b"), None);
//! ```
//!
//! # Safety
//!
//! This crate forbids unsafe code. Recency links are arena indices with a
//! sentinel for absent links, not pointers.

#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod recency_list;

pub use cache::{CacheStats, LruCache};
pub use error::{Error, Result};
pub use recency_list::RecencyList;
