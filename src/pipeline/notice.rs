//! Notices for documents dropped from a corpus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Record of a file that could not be read and was left out of the corpus.
///
/// Returned alongside the totals of a file run so callers decide how to
/// surface them. The pipeline also logs each one at WARN level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkipNotice {
    /// The file that was skipped
    pub path: PathBuf,
    /// The underlying read error, rendered as text
    pub reason: String,
    /// When the file was skipped
    pub timestamp: DateTime<Utc>,
}

impl SkipNotice {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }

    /// Human-readable warning for this skip.
    pub fn message(&self) -> String {
        format!(
            "The file {} cannot be read. Remove it from the corpus.",
            self.path.display()
        )
    }
}

impl fmt::Display for SkipNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.reason)
    }
}
