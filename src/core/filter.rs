//! The filter stage.

use super::reduce::WordTotals;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum total a word needs to survive filtering.
///
/// A threshold is a non-negative whole count by construction. Parsing one
/// from untyped input lives in [`crate::pipeline`], where bad values become
/// `PipelineError::InvalidThreshold`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Threshold(u64);

impl Threshold {
    pub const fn new(min_count: u64) -> Self {
        Self(min_count)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Whether a word with this `total` is kept.
    pub fn admits(self, total: u64) -> bool {
        total >= self.0
    }
}

impl From<u64> for Threshold {
    fn from(min_count: u64) -> Self {
        Self(min_count)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keep exactly the words whose total is at least `threshold`.
///
/// # Example
///
/// ```rust
/// use wordtally::core::{filter_totals, Threshold, WordTotals};
///
/// let totals: WordTotals = vec![("et".to_string(), 11), ("duo".to_string(), 3)].into();
/// let frequent = filter_totals(&totals, Threshold::new(4));
///
/// assert_eq!(frequent.get("et"), Some(11));
/// assert!(!frequent.contains("duo"));
/// ```
pub fn filter_totals(totals: &WordTotals, threshold: Threshold) -> WordTotals {
    totals
        .iter()
        .filter(|&(_, total)| threshold.admits(total))
        .map(|(word, total)| (word.to_string(), total))
        .collect()
}
