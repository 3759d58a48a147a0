//! Tokenization and the map stage.
//!
//! A document is lowercased and split on whitespace. Each token becomes a
//! `(word, 1)` pair. Punctuation is left attached to its token, so
//! `"amet,"` and `"amet"` are different words.
//!
//! Besides Unicode whitespace, the ASCII information separators
//! `U+001C..=U+001F` also split tokens.

use serde::{Deserialize, Serialize};

/// A single `(word, count)` pair emitted by the map stage.
///
/// Pairs are produced once per token occurrence with a count of 1 and are
/// never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use wordtally::core::TokenCount;
///
/// let pair = TokenCount::new("lorem");
/// assert_eq!(pair.word, "lorem");
/// assert_eq!(pair.count, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCount {
    /// The case-folded token
    pub word: String,
    /// Occurrences this pair stands for
    pub count: u64,
}

impl TokenCount {
    /// Create a pair for one occurrence of `word`.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            count: 1,
        }
    }
}

/// Lazy iterator over the pairs of one document.
///
/// Created by [`tokenize`]. Calling `tokenize` again on the same document
/// yields the same sequence.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a str,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Iterator for Tokens<'_> {
    type Item = TokenCount;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.trim_start_matches(is_separator);
        if start.is_empty() {
            self.rest = start;
            return None;
        }

        let end = start.find(is_separator).unwrap_or(start.len());
        let (word, rest) = start.split_at(end);
        self.rest = rest;
        Some(TokenCount::new(word.to_lowercase()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rest.len()))
    }
}

/// Split a document into `(word, 1)` pairs.
///
/// Lowercasing never creates or removes whitespace, so each token is folded
/// on its own.
///
/// # Example
///
/// ```rust
/// use wordtally::core::tokenize;
///
/// let words: Vec<String> = tokenize("Lorem ipsum, LOREM")
///     .map(|pair| pair.word)
///     .collect();
///
/// assert_eq!(words, vec!["lorem", "ipsum,", "lorem"]);
/// ```
pub fn tokenize(document: &str) -> Tokens<'_> {
    Tokens { rest: document }
}

/// Apply [`tokenize`] to every document in order and concatenate the pairs.
///
/// # Example
///
/// ```rust
/// use wordtally::core::map_corpus;
///
/// let pairs = map_corpus(&["a b", "b"]);
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs[2].word, "b");
/// ```
pub fn map_corpus<S: AsRef<str>>(documents: &[S]) -> Vec<TokenCount> {
    documents
        .iter()
        .flat_map(|document| tokenize(document.as_ref()))
        .collect()
}
