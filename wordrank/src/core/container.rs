// src/core/container.rs
pub mod avl;
pub mod bst;
pub mod hash;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub use avl::AvlTreeMap;
pub use bst::BstMap;
pub use hash::ChainedHashMap;

/// Common contract of the three word-count backends.
///
/// Keys are unique. A key that was never inserted has no entry at all, so
/// [`get`](Container::get) reports absence rather than a zero value.
pub trait Container<K, V> {
    /// One full pass over the entries, each exactly once.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Looks up the value stored for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts `key`, or overwrites its value. Returns the previous value.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Number of distinct keys.
    fn size(&self) -> usize;

    /// Walks every entry. Trees yield ascending key order; the hash table
    /// yields bucket order.
    fn iter(&self) -> Self::Iter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Which data structure holds the counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Plain binary search tree, `bst`.
    Bst,
    /// AVL tree, `avl`.
    Avl,
    /// Chained hash table, `hash`.
    Hash,
}

impl Backend {
    pub const ALL: [Self; 3] = [Self::Bst, Self::Avl, Self::Hash];

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bst => "bst",
            Self::Avl => "avl",
            Self::Hash => "hash",
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| Error::InvalidBackend(s.to_owned()))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word counts held in whichever backend was selected at startup.
#[derive(Debug)]
pub enum WordCounts {
    Bst(BstMap<String, u64>),
    Avl(AvlTreeMap<String, u64>),
    Hash(ChainedHashMap<String, u64>),
}

impl WordCounts {
    #[must_use]
    pub fn new(backend: Backend) -> Self {
        match backend {
            Backend::Bst => Self::Bst(BstMap::new()),
            Backend::Avl => Self::Avl(AvlTreeMap::new()),
            Backend::Hash => Self::Hash(ChainedHashMap::new()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn backend(&self) -> Backend {
        match self {
            Self::Bst(_) => Backend::Bst,
            Self::Avl(_) => Backend::Avl,
            Self::Hash(_) => Backend::Hash,
        }
    }
}

impl Container<String, u64> for WordCounts {
    type Iter<'a> = WordCountsIter<'a>;

    fn get(&self, key: &String) -> Option<&u64> {
        match self {
            Self::Bst(map) => map.get(key),
            Self::Avl(map) => map.get(key),
            Self::Hash(map) => map.get(key),
        }
    }

    fn put(&mut self, key: String, value: u64) -> Option<u64> {
        match self {
            Self::Bst(map) => map.put(key, value),
            Self::Avl(map) => map.put(key, value),
            Self::Hash(map) => map.put(key, value),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Bst(map) => map.size(),
            Self::Avl(map) => map.size(),
            Self::Hash(map) => map.size(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Self::Bst(map) => WordCountsIter::Bst(map.iter()),
            Self::Avl(map) => WordCountsIter::Avl(map.iter()),
            Self::Hash(map) => WordCountsIter::Hash(map.iter()),
        }
    }
}

#[derive(Debug)]
pub enum WordCountsIter<'a> {
    Bst(bst::Iter<'a, String, u64>),
    Avl(avl::Iter<'a, String, u64>),
    Hash(hash::Iter<'a, String, u64>),
}

impl<'a> Iterator for WordCountsIter<'a> {
    type Item = (&'a String, &'a u64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Bst(iter) => iter.next(),
            Self::Avl(iter) => iter.next(),
            Self::Hash(iter) => iter.next(),
        }
    }
}
