// src/core/accumulator.rs
use crate::core::container::{Backend, Container, WordCounts};
use crate::core::tokenizer::Tokenizer;
use std::io::{self, Read};

/// Adds every token read from `source` to `counts`.
///
/// # Arguments
///
/// * `source` - The character source to tokenize
/// * `counts` - The container to update, keyed by normalized word
///
/// # Returns
///
/// * `Ok(u64)` - The number of tokens read
///
/// # Errors
///
/// Returns the underlying error if reading `source` fails. `counts` may then
/// hold a partial tally and should be discarded.
pub fn accumulate<R, C>(source: R, counts: &mut C) -> io::Result<u64>
where
    R: Read,
    C: Container<String, u64>,
{
    let mut tokens: u64 = 0;
    for token in Tokenizer::new(source) {
        let token = token?;
        let count = counts.get(&token).map_or(1, |n| n.saturating_add(1));
        counts.put(token, count);
        tokens = tokens.saturating_add(1);
    }
    Ok(tokens)
}

/// Counts the words of `source` in a fresh container of the given backend.
///
/// # Errors
///
/// Returns the underlying error if reading `source` fails. No partial counts
/// are returned.
pub fn count_words<R: Read>(source: R, backend: Backend) -> io::Result<WordCounts> {
    let mut counts = WordCounts::new(backend);
    let tokens = accumulate(source, &mut counts)?;
    let unique = counts.size();
    tracing::debug!(%backend, tokens, unique, "accumulated word counts");
    Ok(counts)
}
