// src/models.rs
pub mod entry;
pub mod ranked_list;
pub mod report;

pub use entry::Entry;
pub use ranked_list::RankedList;
pub use report::Report;
