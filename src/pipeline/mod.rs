//! Pipeline orchestration around the pure stages.
//!
//! This module is the imperative shell: it validates untyped input, reads
//! corpus files through a [`TextSource`], and composes
//! `map -> group -> reduce -> filter` from [`crate::core`].
//!
//! # Error Handling
//!
//! - Bad input is rejected before any stage runs
//!   ([`PipelineError::InvalidInputKind`], [`PipelineError::InvalidThreshold`])
//! - A file that cannot be read aborts the batch with
//!   [`PipelineError::CorpusRead`], or is skipped with a [`SkipNotice`] when
//!   `skip_corrupted` is set
//! - Only I/O failures are downgraded; nothing else is swallowed

mod counter;
mod error;
mod input;
mod notice;
mod source;

pub use counter::{
    count_words, count_words_from_files, count_words_value, CountOutcome, RunStats, WordCounter,
};
pub use error::PipelineError;
pub use input::{parse_filter, Corpus};
pub use notice::SkipNotice;
pub use source::{FsSource, TextSource};
