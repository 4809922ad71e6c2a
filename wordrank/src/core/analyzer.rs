// src/core/analyzer.rs
use crate::core::accumulator::count_words;
use crate::core::container::{Backend, Container};
use crate::core::ranker::rank;
use crate::error::{Error, Result};
use crate::models::Report;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Tokenizes, counts and ranks one character source.
///
/// # Errors
///
/// Returns the read error if `source` fails part way through; the partial
/// counts are dropped.
pub fn analyze<R: Read>(source: R, backend: Backend, limit: usize) -> io::Result<Report> {
    let counts = count_words(source, backend)?;
    let ranked = rank(&counts, limit);
    Ok(Report::new(counts.size(), ranked))
}

/// Runs [`analyze`] over the file at `path`.
///
/// # Arguments
///
/// * `path` - The text document to read
/// * `backend` - The container used for counting
/// * `limit` - The maximum number of ranked rows
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened ([`Error::CannotOpen`])
/// * A read fails before the end of the file ([`Error::Read`])
pub fn analyze_file(path: &Path, backend: Backend, limit: usize) -> Result<Report> {
    let file = File::open(path).map_err(|source| Error::CannotOpen {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %backend, limit, "opened input");

    analyze(file, backend, limit).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
