//! The reduce stage and the `WordTotals` mapping it produces.

use super::group::GroupedCounts;
use super::ordered::WordMap;
use serde::{Deserialize, Serialize};

/// Mapping from word to its total count.
///
/// Entries keep the order they were inserted in, but equality is map
/// equality: two totals are equal when they hold the same words with the
/// same counts, in any order.
///
/// # Example
///
/// ```rust
/// use wordtally::core::WordTotals;
///
/// let totals: WordTotals = vec![("lorem".to_string(), 5), ("et".to_string(), 11)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(totals.get("et"), Some(11));
/// assert_eq!(totals.len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(String, u64)>", into = "Vec<(String, u64)>")]
pub struct WordTotals {
    entries: WordMap<u64>,
}

impl WordTotals {
    /// Create empty totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total for `word`, replacing any previous value.
    pub fn insert(&mut self, word: String, total: u64) {
        *self.entries.entry_or_insert_with(word, || total) = total;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all totals, i.e. the number of tokens counted.
    pub fn total_count(&self) -> u64 {
        self.entries.values().sum()
    }

    /// Iterate over `(word, total)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(word, total)| (word, *total))
    }

    /// Entries ordered by descending total, ties broken alphabetically.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }
}

impl PartialEq for WordTotals {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(word, total)| other.get(word) == Some(total))
    }
}

impl Eq for WordTotals {}

impl FromIterator<(String, u64)> for WordTotals {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut totals = WordTotals::new();
        for (word, total) in iter {
            totals.insert(word, total);
        }
        totals
    }
}

impl From<Vec<(String, u64)>> for WordTotals {
    fn from(entries: Vec<(String, u64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<WordTotals> for Vec<(String, u64)> {
    fn from(totals: WordTotals) -> Self {
        totals.entries.into_entries()
    }
}

/// Sum one word's counts.
///
/// Plain integer addition, so the order of `counts` does not matter.
pub fn reduce_counts(counts: &[u64]) -> u64 {
    counts.iter().sum()
}

/// Collapse every word's counts into a single total.
///
/// # Example
///
/// ```rust
/// use wordtally::core::{group_pairs, map_corpus, reduce_groups};
///
/// let totals = reduce_groups(&group_pairs(map_corpus(&["et et lorem"])));
///
/// assert_eq!(totals.get("et"), Some(2));
/// assert_eq!(totals.get("lorem"), Some(1));
/// ```
pub fn reduce_groups(grouped: &GroupedCounts) -> WordTotals {
    grouped
        .iter()
        .map(|(word, counts)| (word.to_string(), reduce_counts(counts)))
        .collect()
}
