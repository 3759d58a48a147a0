//! Core pipeline stages.
//!
//! This module contains the pure stages of the word-count pipeline:
//! - Tokenization and the map stage
//! - Grouping pairs by word
//! - Reducing grouped counts to totals
//! - Filtering totals by a minimum count
//!
//! Nothing here performs I/O or fails. Input validation and file reading
//! live in [`crate::pipeline`].

mod filter;
mod group;
mod ordered;
mod reduce;
mod stage;
mod token;

pub use filter::{filter_totals, Threshold};
pub use group::{group_pairs, GroupedCounts};
pub use reduce::{reduce_counts, reduce_groups, WordTotals};
pub use stage::Stage;
pub use token::{map_corpus, tokenize, TokenCount, Tokens};
