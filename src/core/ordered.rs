//! Word-keyed map that remembers first-insertion order.

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WordMap<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for WordMap<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> WordMap<V> {
    /// Value slot for `word`, created with `init` on first sight.
    pub(crate) fn entry_or_insert_with(
        &mut self,
        word: String,
        init: impl FnOnce() -> V,
    ) -> &mut V {
        let slot = match self.index.get(&word) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(word.clone(), slot);
                self.entries.push((word, init()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub(crate) fn get(&self, word: &str) -> Option<&V> {
        self.index.get(word).map(|&slot| &self.entries[slot].1)
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(word, value)| (word.as_str(), value))
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}
