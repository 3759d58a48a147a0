//! Wordtally: an in-memory word-count pipeline
//!
//! Wordtally counts word frequencies by composing four small stages:
//! map, group, reduce and filter. The stages are pure functions with no
//! side effects; reading files and validating untyped input happen in a
//! thin shell around them.
//!
//! # Core Concepts
//!
//! - **Map**: Each document becomes a sequence of `(word, 1)` pairs
//! - **Group**: Pairs are collected into one list of counts per word
//! - **Reduce**: Each word's counts are summed into a total
//! - **Filter**: Only words reaching a minimum total are kept
//!
//! Tokenization is deliberately simple: lowercase, then split on
//! whitespace. Punctuation stays attached to its word.
//!
//! # Example
//!
//! ```rust
//! use wordtally::{count_words, Threshold};
//!
//! let corpus = vec![
//!     "Lorem ipsum dolor sit amet, consetetur et sadipscing elitr.".to_string(),
//!     "At vero lorem et accusam et justo duo ipsum et ea rebum.".to_string(),
//! ];
//!
//! let totals = count_words(&corpus, None);
//! assert_eq!(totals.get("lorem"), Some(2));
//! assert_eq!(totals.get("et"), Some(4));
//!
//! let frequent = count_words(&corpus, Some(Threshold::new(3)));
//! assert_eq!(frequent.len(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Threshold, WordTotals};
pub use builder::{CountOptions, WordCounterBuilder};
pub use pipeline::{
    count_words, count_words_from_files, count_words_value, PipelineError, WordCounter,
};
pub use report::CountReport;
