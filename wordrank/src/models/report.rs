// src/models/report.rs
use crate::models::RankedList;

/// Everything the reporter needs: the distinct word total and the ranked rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub unique_words: usize,
    pub ranked: RankedList,
}

impl Report {
    #[inline]
    #[must_use]
    pub const fn new(unique_words: usize, ranked: RankedList) -> Self {
        Self {
            unique_words,
            ranked,
        }
    }
}
