// src/utils.rs
use crate::models::Report;
use std::fmt::Write as _;
use std::io::{self, Write as _};

/// Renders a report as the total line followed by one row per ranked word.
///
/// Rank numbers are right-aligned to the widest rank shown and words are
/// padded to the longest displayed word, so the counts line up:
///
/// ```text
/// Total unique words: 4
///  1. the   12
///  ...
/// 10. a      3
/// ```
#[must_use]
pub fn format_report(report: &Report) -> String {
    let mut out = format!("Total unique words: {}\n", report.unique_words);
    let rank_width = report.ranked.len().to_string().len();
    let word_width = report.ranked.word_width();
    for (index, entry) in report.ranked.iter().enumerate() {
        let rank = index.saturating_add(1);
        let word = &entry.key;
        let count = entry.value;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{rank:>rank_width$}. {word:<word_width$} {count}");
    }
    out
}

/// Writes [`format_report`] to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written, e.g. a closed pipe.
pub fn print_report(report: &Report) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(format_report(report).as_bytes())?;
    stdout.flush()
}
