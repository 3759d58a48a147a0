//! Configuration and builder API for word counters.
//!
//! [`CountOptions`] captures how a run treats unreadable files and which
//! words it keeps. [`WordCounterBuilder`] assembles options and a document
//! source into a [`crate::pipeline::WordCounter`].
//!
//! # Example
//!
//! ```rust
//! use std::io;
//! use std::path::Path;
//! use wordtally::pipeline::WordCounter;
//!
//! let counter = WordCounter::builder()
//!     .skip_corrupted(true)
//!     .min_count(2)
//!     .source(|_: &Path| -> io::Result<String> { Ok("et et lorem".to_string()) })
//!     .build();
//!
//! let outcome = counter.count_files(&["doc.txt"]).unwrap();
//! assert_eq!(outcome.totals.get("et"), Some(2));
//! assert!(!outcome.totals.contains("lorem"));
//! ```

pub mod counter;
pub mod options;

pub use counter::WordCounterBuilder;
pub use options::CountOptions;
