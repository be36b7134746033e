//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity cache with O(1) amortized `insert` and `get`, built from
//! two cooperating structures that are only ever mutated together.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                         LruCache<K, V>                           │
//!   │                                                                  │
//!   │   ┌────────────────────────────────────────────────────────┐     │
//!   │   │  KeyIndex<K>  (B chained buckets → NodeId)             │     │
//!   │   │                                                        │     │
//!   │   │  ┌───────────┐                                         │     │
//!   │   │  │ bucket 0  │ ─► (k_3, ───────────────────┐           │     │
//!   │   │  │ bucket 1  │ ─► (k_1, ─────┐             │           │     │
//!   │   │  │ bucket 2  │ ─► (k_2, ──┐  │             │           │     │
//!   │   │  └───────────┘            │  │             │           │     │
//!   │   └───────────────────────────┼──┼─────────────┼───────────┘     │
//!   │                               ▼  ▼             ▼                 │
//!   │   ┌────────────────────────────────────────────────────────┐     │
//!   │   │  RecencyList<Entry<K, V>>  (arena-backed, bounded)     │     │
//!   │   │                                                        │     │
//!   │   │  head ──► [k_1] ◄──► [k_2] ◄──► [k_3] ◄── tail         │     │
//!   │   │           (MRU)                 (LRU)                  │     │
//!   │   └────────────────────────────────────────────────────────┘     │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each structure exists to make the other O(1): the index removes the list
//! scan otherwise needed to find a key's node before promoting or evicting
//! it, and the list gives the index's hits an O(1) detach/re-link. The index
//! is purely derived state (its validity is defined by the list's current
//! membership), so neither half is ever exposed for independent mutation;
//! only the composed operations below are public.
//!
//! ## Operation flow
//!
//! ```text
//!   get(k):     index lookup ── miss ──► None (nothing mutated)
//!                    │ hit
//!                    ▼
//!               move node to list head, return &value
//!
//!   insert(k, v), k present:
//!               overwrite node value, move node to head,
//!               return previous value
//!
//!   insert(k, v), k absent, cache full:
//!               list pops tail ──► evicted key removed from index
//!               new node linked at head ──► new key indexed
//!               (evict-then-index order: no stale pair survives even
//!                when both keys share a bucket)
//! ```
//!
//! ## Key components
//!
//! | Component             | Description                                  |
//! |-----------------------|----------------------------------------------|
//! | `LruCache<K, V>`      | Single-threaded core composing list + index  |
//! | `ConcurrentLruCache`  | Thread-safe wrapper, `parking_lot::RwLock`   |
//! | `RecencyList`         | Bounded arena-backed recency order           |
//! | `KeyIndex`            | Hand-written chained hash table → `NodeId`   |
//!
//! ## Complexity
//!
//! | Operation  | Time      | Notes                                      |
//! |------------|-----------|--------------------------------------------|
//! | `insert`   | O(1) avg  | index probe + list splice                  |
//! | `get`      | O(1) avg  | index probe + move-to-front                |
//! | `remove`   | O(1) avg  | both halves updated together               |
//! | `pop_lru`  | O(1)      | tail pop + index removal                   |
//!
//! Index probes are O(chain length) in the worst case; with the default
//! tiny bucket count every chain is long by construction, which is the
//! configuration the correctness tests lean on.
//!
//! ## Design notes
//!
//! - Nodes live in an arena and are addressed by stable `NodeId` handles;
//!   the index stores the same handle type. No raw pointers anywhere, so an
//!   eviction can never leave a dangling reference behind.
//! - The bucket count defaults to [`DEFAULT_BUCKET_COUNT`], tiny on purpose
//!   so that collisions stay common, and can be raised per cache via
//!   [`LruCache::try_with_buckets`].
//! - Keys need `Eq + Clone + serde::Serialize`: equality for chain scans,
//!   a clone for the index's copy of the key, and a deterministic byte
//!   encoding for the bucket hash. Values are unconstrained.
//!
//! ## Thread safety
//!
//! - `LruCache`: **not** thread-safe; all ops are synchronous and run to
//!   completion with no internal locking.
//! - `ConcurrentLruCache` (feature `concurrency`): one `RwLock` guards both
//!   halves, so every mutation appears atomic to readers and no partial
//!   update (index changed, list not yet relinked) can be observed. Note
//!   that `get` takes the write lock: a hit re-links the list.

use std::fmt;
use std::mem;

use serde::Serialize;

use crate::ds::key_index::KeyIndex;
use crate::ds::recency_list::RecencyList;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;

/// Default number of index buckets.
///
/// Deliberately small, matching the design goal of making collisions common
/// enough that chain traversal is exercised constantly rather than only in
/// adversarial tests. Raise it via [`LruCache::try_with_buckets`] when lookup
/// latency matters more than that property.
pub const DEFAULT_BUCKET_COUNT: usize = 3;

/// One cached `(key, value)` pair, stored inside a recency-list node.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache: a bounded recency list plus a chained key index.
///
/// See the [module documentation](self) for the architecture. Only composed
/// operations are exposed; the two internal structures cannot be mutated
/// independently from outside, which is what keeps them consistent.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
/// use lrukit::traits::CoreCache;
///
/// let mut cache: LruCache<u64, String> = LruCache::new(2);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
///
/// // A hit promotes key 1, so key 2 becomes the eviction candidate.
/// assert_eq!(cache.get(&1).map(String::as_str), Some("one"));
///
/// cache.insert(3, "three".to_string());
/// assert!(!cache.contains(&2));
/// assert!(cache.contains(&1));
/// ```
pub struct LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    list: RecencyList<Entry<K, V>>,
    index: KeyIndex<K>,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Creates a cache holding at most `capacity` entries, with
    /// [`DEFAULT_BUCKET_COUNT`] index buckets.
    ///
    /// Returns a [`ConfigError`] if `capacity` is zero. The capacity is
    /// never silently clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// assert!(LruCache::<u64, String>::try_new(100).is_ok());
    /// assert!(LruCache::<u64, String>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_buckets(capacity, DEFAULT_BUCKET_COUNT)
    }

    /// Creates a cache with an explicit index bucket count.
    ///
    /// Returns a [`ConfigError`] if `capacity` or `bucket_count` is zero.
    pub fn try_with_buckets(capacity: usize, bucket_count: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        if bucket_count == 0 {
            return Err(ConfigError::new("bucket count must be > 0"));
        }
        Ok(Self {
            list: RecencyList::new(capacity),
            index: KeyIndex::new(bucket_count),
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`try_new`](Self::try_new) to
    /// handle the configuration error instead.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a cache with an explicit index bucket count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` or `bucket_count` is zero.
    pub fn with_buckets(capacity: usize, bucket_count: usize) -> Self {
        match Self::try_with_buckets(capacity, bucket_count) {
            Ok(cache) => cache,
            Err(err) => panic!("{}", err),
        }
    }

    /// Returns the number of index buckets.
    pub fn bucket_count(&self) -> usize {
        self.index.bucket_count()
    }

    /// Read-only lookup that does not promote the key.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Peek leaves key 1 as the eviction candidate.
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.peek_calls.incr();

        let id = self.index.get(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.peek_found.incr();

        self.list.get(id).map(|entry| &entry.value)
    }

    /// Iterates entries from most to least recently used.
    ///
    /// Diagnostic surface: the order is exactly the eviction order reversed.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.insert(1, "a");
    /// cache.insert(2, "b");
    /// cache.get(&1);
    ///
    /// let keys: Vec<u32> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Verifies the cross-structure invariants, for tests and debugging.
    ///
    /// Checks that the list is a well-formed chain within capacity, that the
    /// key sets of list and index are identical, and that every index pair
    /// points at the node actually holding its key.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.list.len() > self.list.capacity() {
            return Err(InvariantError::new("list length exceeds capacity"));
        }
        if self.list.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "list holds {} entries but index holds {}",
                self.list.len(),
                self.index.len()
            )));
        }

        self.list.debug_validate_invariants();
        self.index.debug_validate_invariants();

        // Every list entry must be indexed, and the index must point at the
        // node that holds the key.
        for entry in self.list.iter() {
            match self.index.get(&entry.key) {
                None => return Err(InvariantError::new("list key missing from index")),
                Some(id) => match self.list.get(id) {
                    Some(indexed) if indexed.key == entry.key => {},
                    Some(_) => {
                        return Err(InvariantError::new("index points at a node holding a different key"));
                    },
                    None => return Err(InvariantError::new("index points at a freed node")),
                },
            }
        }

        // Lengths match and list keys are unique, so the index cannot hold
        // extra pairs; still verify each indexed node is reachable.
        for (key, id) in self.index.iter() {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {},
                _ => return Err(InvariantError::new("index pair references a stale node")),
            }
        }

        Ok(())
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.list.len(),
            capacity: self.list.capacity(),
        }
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Inserts or updates `key`, promoting it to most recently used either
    /// way. Returns the previous value on update.
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry; the evicted key leaves the index before the new key enters it,
    /// so no stale pair survives even when both keys collide in one bucket.
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            // The index never references a node that is not in the list.
            let previous = self
                .list
                .get_mut(id)
                .map(|entry| mem::replace(&mut entry.value, value));
            debug_assert!(previous.is_some());

            self.list.move_to_front(id);
            return previous;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let (id, evicted) = self.list.push_front_evicting(Entry {
            key: key.clone(),
            value,
        });

        // Evicted key leaves the index before the new key is chained.
        if let Some(evicted) = evicted {
            self.index.remove(&evicted.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
        }

        self.index.insert(key, id);
        None
    }

    /// Looks up `key`, promoting it to most recently used on a hit.
    ///
    /// A miss is a normal outcome, not an error, and mutates nothing.
    fn get(&mut self, key: &K) -> Option<&V> {
        let id = match self.index.get(key) {
            Some(id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn capacity(&self) -> usize {
        self.list.capacity()
    }

    fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Removes `key`, updating both halves together.
    fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key);

        #[cfg(feature = "metrics")]
        self.metrics.record_remove(id.is_some());

        self.list.remove(id?).map(|entry| entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back();

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru(entry.is_some());

        let entry = entry?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        self.metrics.peek_lru_calls.incr();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        self.metrics.peek_lru_found.incr();

        Some((&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        let found = match self.index.get(key) {
            Some(id) => self.list.move_to_front(id),
            None => false,
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_touch(found);

        found
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        self.metrics.recency_rank_calls.incr();

        let mut rank = 0usize;
        for entry in self.list.iter() {
            #[cfg(feature = "metrics")]
            self.metrics.recency_rank_scan_steps.incr();

            if entry.key == *key {
                #[cfg(feature = "metrics")]
                self.metrics.recency_rank_found.incr();
                return Some(rank);
            }
            rank += 1;
        }
        None
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("bucket_count", &self.bucket_count())
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Creates an LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Thread-safe LRU cache wrapper.
///
/// One `RwLock` guards the whole core, so every operation sees (and leaves)
/// both halves consistent. `get` requires the write lock because a hit
/// re-links the recency list; use [`peek`](Self::peek) /
/// [`peek_with`](Self::peek_with) for concurrent read-only lookups.
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    inner: Arc<RwLock<LruCache<K, V>>>,
}

// Not derived: cloning shares the Arc and must not require V: Clone.
#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Creates a thread-safe cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; use [`try_new`](Self::try_new) to
    /// handle the configuration error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Fallible constructor; see [`LruCache::try_new`].
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::try_new(capacity)?)),
        })
    }

    /// Fallible constructor with an explicit bucket count; see
    /// [`LruCache::try_with_buckets`].
    pub fn try_with_buckets(capacity: usize, bucket_count: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::try_with_buckets(
                capacity,
                bucket_count,
            )?)),
        })
    }

    /// Inserts a key-value pair, returning the previous value on update.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::new(100);
    /// assert!(cache.insert(1, "first".to_string()).is_none());
    /// assert_eq!(cache.insert(1, "updated".to_string()).as_deref(), Some("first"));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let mut cache = self.inner.write();
        cache.insert(key, value)
    }

    /// Gets a clone of the value, promoting the key to most recently used.
    ///
    /// Takes the write lock: a hit re-links the recency list.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.write();
        cache.get(key).cloned()
    }

    /// Runs `f` on the value while holding the lock, promoting the key.
    ///
    /// Avoids the `V: Clone` requirement of [`get`](Self::get) for values
    /// that are expensive or impossible to clone.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u64, Vec<u8>> = ConcurrentLruCache::new(10);
    /// cache.insert(1, vec![1, 2, 3]);
    /// assert_eq!(cache.get_with(&1, |bytes| bytes.len()), Some(3));
    /// ```
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.write();
        cache.get(key).map(f)
    }

    /// Gets a clone of the value without promoting the key.
    ///
    /// Only takes the read lock, allowing concurrent peeks.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek(key).cloned()
    }

    /// Runs `f` on the value under the read lock, without promoting the key.
    pub fn peek_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let cache = self.inner.read();
        cache.peek(key).map(f)
    }

    /// Removes an entry and returns its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        cache.remove(key)
    }

    /// Marks an entry as recently used without retrieving its value.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.write();
        cache.touch(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        let mut cache = self.inner.write();
        cache.pop_lru()
    }

    /// Returns a clone of the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(K, V)>
    where
        V: Clone,
    {
        let cache = self.inner.read();
        cache.peek_lru().map(|(k, v)| (k.clone(), v.clone()))
    }

    /// Returns `true` if the key exists; does not affect recency order.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.read();
        cache.contains(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.read();
        cache.len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.read();
        cache.is_empty()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.read();
        cache.capacity()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        let mut cache = self.inner.write();
        cache.clear()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        let cache = self.inner.read();
        cache.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize,
{
    /// Creates a concurrent LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Clone + Serialize + Send + Sync,
    V: Send + Sync,
{
}
