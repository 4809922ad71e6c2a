// src/core.rs
pub mod accumulator;
pub mod analyzer;
pub mod container;
pub mod ranker;
pub mod tokenizer;
