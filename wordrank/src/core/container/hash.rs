// src/core/container/hash.rs
use crate::core::container::Container;
use std::hash::{BuildHasher, Hash, RandomState};
use std::{mem, slice};

const INITIAL_CAPACITY: usize = 16;

/// Resize once `len / capacity` exceeds `MAX_LOAD_NUMERATOR / MAX_LOAD_DENOMINATOR`.
const MAX_LOAD_NUMERATOR: usize = 3;
const MAX_LOAD_DENOMINATOR: usize = 4;

/// Hash table with separate chaining.
///
/// Each bucket holds a small vector of entries whose hashes share an index.
/// The bucket count is always a power of two and doubles once the load factor
/// passes 0.75; every entry is rehashed into the new buckets. Iteration walks
/// the buckets in index order, so it follows hash order rather than key
/// order.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V, RandomState> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V, RandomState> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            buckets: empty_buckets(INITIAL_CAPACITY),
            len: 0,
            hasher,
        }
    }

    /// Current number of buckets.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn bucket_index(&self, key: &K) -> usize {
        bucket_for(self.hasher.hash_one(key), self.buckets.len())
    }

    fn over_threshold(&self) -> bool {
        self.len.saturating_mul(MAX_LOAD_DENOMINATOR)
            > self.buckets.len().saturating_mul(MAX_LOAD_NUMERATOR)
    }

    fn grow(&mut self) {
        let capacity = self.buckets.len().saturating_mul(2);
        let old = mem::replace(&mut self.buckets, empty_buckets(capacity));
        for (key, value) in old.into_iter().flatten() {
            let index = bucket_for(self.hasher.hash_one(&key), capacity);
            self.buckets[index].push((key, value));
        }
        tracing::trace!(capacity, entries = self.len, "resized hash table");
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<(K, V)>> {
    (0..capacity).map(|_| Vec::new()).collect()
}

/// Maps a hash onto a power-of-two bucket count using its low bits.
const fn bucket_for(hash: u64, capacity: usize) -> usize {
    (hash as usize) & (capacity - 1)
}

impl<K: Hash + Eq, V, S: BuildHasher> Container<K, V> for ChainedHashMap<K, V, S> {
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        if let Some((_, slot)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(mem::replace(slot, value));
        }
        bucket.push((key, value));
        self.len = self.len.saturating_add(1);
        if self.over_threshold() {
            self.grow();
        }
        None
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: slice::Iter::default(),
        }
    }
}

/// Bucket-order traversal of a [`ChainedHashMap`].
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    buckets: slice::Iter<'a, Vec<(K, V)>>,
    chain: slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.chain.next() {
                return Some((key, value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}
