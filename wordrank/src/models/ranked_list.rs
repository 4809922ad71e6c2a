// src/models/ranked_list.rs
use crate::models::Entry;
use std::ops::Deref;

/// The top entries of a run, in rank order. Built once by the ranker and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedList {
    entries: Vec<Entry>,
}

impl RankedList {
    /// Wraps entries that are already sorted and truncated.
    #[inline]
    #[must_use]
    pub(crate) const fn from_sorted(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Width of the longest word among the ranked rows.
    #[inline]
    #[must_use]
    pub fn word_width(&self) -> usize {
        self.entries.iter().map(|e| e.key.len()).max().unwrap_or(0)
    }
}

impl Deref for RankedList {
    type Target = [Entry];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
