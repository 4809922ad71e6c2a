// src/core/tokenizer.rs
use std::io::{self, BufReader, Bytes, Read};
use std::iter::FusedIterator;

/// Lazily splits a byte stream into normalized words.
///
/// Word characters are ASCII letters (folded to lowercase), apostrophes, and
/// hyphens that follow at least one other word character. Spaces, `\n` and
/// `\r` end a word. Every other byte, including each byte of a non-ASCII
/// character, is dropped without ending the word in progress.
///
/// A read error is yielded once and then the iterator is exhausted.
#[derive(Debug)]
pub struct Tokenizer<R> {
    bytes: Bytes<BufReader<R>>,
    word: String,
    done: bool,
}

impl<R: Read> Tokenizer<R> {
    #[inline]
    pub fn new(source: R) -> Self {
        Self {
            bytes: BufReader::new(source).bytes(),
            word: String::new(),
            done: false,
        }
    }

    /// Feeds one byte into the word under construction. Returns a finished
    /// word when `byte` is a delimiter closing a non-empty word.
    fn push(&mut self, byte: u8) -> Option<String> {
        match byte {
            b'a'..=b'z' | b'\'' => self.word.push(char::from(byte)),
            b'A'..=b'Z' => self.word.push(char::from(byte.to_ascii_lowercase())),
            b'-' if !self.word.is_empty() => self.word.push('-'),
            b' ' | b'\n' | b'\r' if !self.word.is_empty() => {
                return Some(std::mem::take(&mut self.word));
            }
            _ => {}
        }
        None
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.bytes.next() {
                Some(Ok(byte)) => {
                    if let Some(word) = self.push(byte) {
                        return Some(Ok(word));
                    }
                }
                Some(Err(err)) => {
                    self.done = true;
                    self.word.clear();
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    if self.word.is_empty() {
                        return None;
                    }
                    return Some(Ok(std::mem::take(&mut self.word)));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for Tokenizer<R> {}

/// Tokenizes an in-memory string. Reading from a slice cannot fail.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::new(text.as_bytes())
        .filter_map(Result::ok)
        .collect()
}
