// src/core/ranker.rs
use crate::core::container::Container;
use crate::models::{Entry, RankedList};

/// Drains `counts` and returns its `limit` most frequent words.
///
/// Words are ordered by count descending, ties alphabetically. A `limit`
/// larger than the number of distinct words returns all of them; an empty
/// container gives an empty list.
#[must_use]
pub fn rank<C: Container<String, u64>>(counts: &C, limit: usize) -> RankedList {
    let unique = counts.size();
    let mut entries: Vec<Entry> = Vec::with_capacity(unique);
    for (word, count) in counts.iter() {
        entries.push(Entry::new(word.as_str(), *count));
    }
    debug_assert_eq!(entries.len(), unique, "every entry must be yielded once");

    let limit = limit.min(entries.len());
    if limit == 0 {
        entries.clear();
    } else if limit < entries.len() {
        // Partition so only the kept rows need a full sort.
        entries.select_nth_unstable(limit - 1);
        entries.truncate(limit);
    }
    entries.sort_unstable();

    tracing::debug!(ranked = entries.len(), unique, "ranked words");
    RankedList::from_sorted(entries)
}
