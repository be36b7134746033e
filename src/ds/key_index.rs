//! Hand-written chained hash table mapping keys to recency-list node ids.
//!
//! A fixed array of `B` buckets, each holding a chain of `(key, NodeId)`
//! pairs searched linearly on key equality. `B` is fixed at construction and
//! intentionally small by default so that chains actually get exercised;
//! this is the index that turns "find the node for this key" from an O(n)
//! list scan into an O(1)-average lookup.
//!
//! ```text
//!   buckets (B = 3)               chains of (key, NodeId)
//!   ┌───────────┐
//!   │ bucket 0  │ ─► (k3, id_7) ─► (k9, id_2)
//!   │ bucket 1  │ ─► (k1, id_4)
//!   │ bucket 2  │ ─► (k5, id_0) ─► (k2, id_6) ─► (k8, id_3)
//!   └───────────┘
//! ```
//!
//! The index never owns nodes: `NodeId`s are non-owning handles into the
//! recency list's arena, and the composed cache keeps both structures in
//! step so no stale pair outlives its node.

use serde::Serialize;

use crate::ds::key_hash::bucket_for;
use crate::ds::node_arena::NodeId;

/// Chained hash index from keys to [`NodeId`] handles.
#[derive(Debug)]
pub struct KeyIndex<K> {
    buckets: Vec<Vec<(K, NodeId)>>,
    len: usize,
}

impl<K> KeyIndex<K>
where
    K: Eq + Serialize,
{
    /// Creates an index with `bucket_count` buckets.
    ///
    /// The bucket count is validated by the composed cache's constructor;
    /// the index itself only debug-asserts it.
    pub fn new(bucket_count: usize) -> Self {
        debug_assert!(bucket_count > 0);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets, len: 0 }
    }

    /// Returns the fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of keys currently indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no keys are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the chain length of `bucket`.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.buckets.get(bucket).map_or(0, Vec::len)
    }

    /// Looks up the node id for `key`. No side effects; O(chain length).
    pub fn get(&self, key: &K) -> Option<NodeId> {
        let bucket = bucket_for(key, self.buckets.len());
        self.buckets[bucket]
            .iter()
            .find(|(chained, _)| chained == key)
            .map(|&(_, id)| id)
    }

    /// Returns `true` if `key` is indexed.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Points `key` at `id`.
    ///
    /// If the key is already chained its id is replaced in place (the chain
    /// position is kept) and the old id returned; otherwise the pair is
    /// appended at the chain tail. A key never appears twice in a bucket.
    pub fn insert(&mut self, key: K, id: NodeId) -> Option<NodeId> {
        let bucket = bucket_for(&key, self.buckets.len());
        let chain = &mut self.buckets[bucket];

        for (chained, chained_id) in chain.iter_mut() {
            if *chained == key {
                return Some(std::mem::replace(chained_id, id));
            }
        }

        chain.push((key, id));
        self.len += 1;
        None
    }

    /// Detaches `key`'s pair from its chain, returning the node id it held.
    ///
    /// A no-op returning `None` if the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<NodeId> {
        let bucket = bucket_for(key, self.buckets.len());
        let chain = &mut self.buckets[bucket];

        let pos = chain.iter().position(|(chained, _)| chained == key)?;
        let (_, id) = chain.remove(pos);
        self.len -= 1;
        Some(id)
    }

    /// Drops every chained pair; the bucket array keeps its size.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }

    /// Iterates all `(key, id)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, NodeId)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(key, id)| (key, *id)))
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut counted = 0usize;
        for (bucket, chain) in self.buckets.iter().enumerate() {
            for (i, (key, _)) in chain.iter().enumerate() {
                assert_eq!(
                    bucket_for(key, self.buckets.len()),
                    bucket,
                    "pair chained in the wrong bucket"
                );
                for (other, _) in &chain[i + 1..] {
                    assert!(key != other, "duplicate key within a bucket");
                }
            }
            counted += chain.len();
        }
        assert_eq!(counted, self.len);
    }
}
