//! Builder for constructing word counters.

use crate::builder::options::CountOptions;
use crate::core::Threshold;
use crate::pipeline::{FsSource, TextSource, WordCounter};

/// Builder for constructing word counters with a fluent API.
///
/// Counters read from the filesystem unless another source is supplied.
pub struct WordCounterBuilder<Src = FsSource> {
    options: CountOptions,
    source: Src,
}

impl WordCounterBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: CountOptions::default(),
            source: FsSource,
        }
    }
}

impl Default for WordCounterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Src: TextSource> WordCounterBuilder<Src> {
    /// Leave unreadable files out instead of aborting.
    pub fn skip_corrupted(mut self, skip: bool) -> Self {
        self.options.skip_corrupted = skip;
        self
    }

    /// Keep only words that reach `threshold`.
    pub fn filter(mut self, threshold: Threshold) -> Self {
        self.options.filter = Some(threshold);
        self
    }

    /// Shorthand for `filter(Threshold::new(min_count))`.
    pub fn min_count(self, min_count: u64) -> Self {
        self.filter(Threshold::new(min_count))
    }

    /// Replace all options at once.
    pub fn options(mut self, options: CountOptions) -> Self {
        self.options = options;
        self
    }

    /// Read documents from `source` instead.
    pub fn source<T: TextSource>(self, source: T) -> WordCounterBuilder<T> {
        WordCounterBuilder {
            options: self.options,
            source,
        }
    }

    /// Build the counter.
    pub fn build(self) -> WordCounter<Src> {
        WordCounter::new(self.options, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn builder_defaults_match_default_options() {
        let counter = WordCounterBuilder::new().build();

        assert_eq!(counter.options(), &CountOptions::default());
    }

    #[test]
    fn builder_sets_options() {
        let counter = WordCounter::builder()
            .skip_corrupted(true)
            .min_count(4)
            .build();

        assert!(counter.options().skip_corrupted);
        assert_eq!(counter.options().filter, Some(Threshold::new(4)));
    }

    #[test]
    fn later_options_override_earlier_setters() {
        let counter = WordCounterBuilder::new()
            .min_count(9)
            .options(CountOptions::default())
            .build();

        assert_eq!(counter.options().filter, None);
    }

    #[test]
    fn builder_swaps_source_and_keeps_options() {
        let counter = WordCounterBuilder::new()
            .skip_corrupted(true)
            .source(|_: &Path| -> io::Result<String> { Ok("b a b".to_string()) })
            .build();

        let outcome = counter.count_files(&["any.txt"]).unwrap();

        assert!(counter.options().skip_corrupted);
        assert_eq!(outcome.totals.get("b"), Some(2));
    }
}
