// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a run. Every variant is fatal; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend selector is not one of `bst`, `avl` or `hash`.
    #[error("Invalid data structure '{0}' received.")]
    InvalidBackend(String),

    /// The limit is not a positive integer.
    #[error("Invalid limit '{0}' received.")]
    InvalidLimit(String),

    /// The input document could not be opened.
    #[error("Cannot open file '{}' for input.", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed part way through the document.
    #[error("An I/O error occurred reading '{}'.", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True for errors caused by the arguments rather than the file system.
    #[inline]
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidBackend(_) | Self::InvalidLimit(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
