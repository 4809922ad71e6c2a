// src/lib.rs
//! Finds the most common words in a text document.
//!
//! A document is tokenized into normalized words, counted in one of three
//! interchangeable containers (an unbalanced BST, an AVL tree or a chained
//! hash table) and ranked by count descending, ties alphabetically.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, DEFAULT_LIMIT, Settings, run};
pub use crate::core::accumulator::{accumulate, count_words};
pub use crate::core::analyzer::{analyze, analyze_file};
pub use crate::core::container::{
    AvlTreeMap, Backend, BstMap, ChainedHashMap, Container, WordCounts,
};
pub use crate::core::ranker::rank;
pub use crate::core::tokenizer::{Tokenizer, tokenize};
pub use crate::error::Error;
pub use crate::models::{Entry, RankedList, Report};
pub use crate::utils::{format_report, print_report};
