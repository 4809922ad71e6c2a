// src/models/entry.rs
use std::cmp::Ordering;

/// A word paired with the number of times it occurred.
///
/// Entries order by count descending, then by word ascending. Since words are
/// unique within a run, this is a strict total order over any ranked set and
/// agrees with the derived equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: String,
    pub value: u64,
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl Ord for Entry {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl PartialOrd for Entry {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
