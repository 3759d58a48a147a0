//! The group stage.
//!
//! Collects every pair emitted by the map stage into one sequence of counts
//! per word.

use super::ordered::WordMap;
use super::token::TokenCount;

/// Mapping from word to the counts contributed by each of its occurrences.
///
/// Keys iterate in first-occurrence order. Nothing depends on that order;
/// it only keeps output stable between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedCounts {
    groups: WordMap<Vec<u64>>,
}

impl GroupedCounts {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` to the sequence for `word`, creating it on first sight.
    pub fn push(&mut self, word: String, count: u64) {
        self.groups.entry_or_insert_with(word, Vec::new).push(count);
    }

    /// Counts recorded for `word`, in emission order.
    pub fn get(&self, word: &str) -> Option<&[u64]> {
        self.groups.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of counts stored across all words.
    pub fn total_pairs(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterate over `(word, counts)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.groups.iter().map(|(word, counts)| (word, counts.as_slice()))
    }
}

/// Group pairs by word.
///
/// # Example
///
/// ```rust
/// use wordtally::core::{group_pairs, map_corpus};
///
/// let grouped = group_pairs(map_corpus(&["lorem ipsum lorem"]));
///
/// assert_eq!(grouped.get("lorem"), Some(&[1, 1][..]));
/// assert_eq!(grouped.get("ipsum"), Some(&[1][..]));
/// ```
pub fn group_pairs<I>(pairs: I) -> GroupedCounts
where
    I: IntoIterator<Item = TokenCount>,
{
    let mut grouped = GroupedCounts::new();
    for TokenCount { word, count } in pairs {
        grouped.push(word, count);
    }
    grouped
}
