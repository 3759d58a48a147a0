//! Pipeline orchestration: corpus assembly and stage composition.

use super::error::PipelineError;
use super::input::{parse_filter, Corpus};
use super::notice::SkipNotice;
use super::source::{FsSource, TextSource};
use crate::builder::{CountOptions, WordCounterBuilder};
use crate::core::{
    filter_totals, group_pairs, map_corpus, reduce_groups, Stage, Threshold, WordTotals,
};
use crate::report::CountReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};

/// Sizes observed during one run, taken before filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Documents that made it into the corpus
    pub documents: usize,
    /// Token occurrences emitted by the map stage
    pub tokens: usize,
    /// Distinct words after reduction
    pub distinct_words: usize,
}

/// Result of a file-based run.
#[derive(Clone, Debug, PartialEq)]
pub struct CountOutcome {
    /// Word totals, filtered when a threshold was configured
    pub totals: WordTotals,
    /// Files left out of the corpus, in input order
    pub skipped: Vec<SkipNotice>,
    pub stats: RunStats,
    /// Threshold the totals were filtered with
    pub filter: Option<Threshold>,
}

impl CountOutcome {
    /// Summarize this outcome as a serializable report.
    pub fn to_report(&self) -> CountReport {
        CountReport::new(self.clone())
    }
}

fn run_stages<S: AsRef<str>>(documents: &[S], filter: Option<Threshold>) -> (WordTotals, RunStats) {
    let pairs = map_corpus(documents);
    debug!(
        stage = %Stage::Map,
        documents = documents.len(),
        pairs = pairs.len(),
        "Mapped corpus"
    );

    let grouped = group_pairs(pairs);
    debug!(stage = %Stage::Group, words = grouped.len(), "Grouped pairs");

    let totals = reduce_groups(&grouped);
    debug!(stage = %Stage::Reduce, words = totals.len(), "Reduced counts");

    let stats = RunStats {
        documents: documents.len(),
        tokens: grouped.total_pairs(),
        distinct_words: totals.len(),
    };

    let totals = match filter {
        None => totals,
        Some(threshold) => {
            let kept = filter_totals(&totals, threshold);
            debug!(
                stage = %Stage::Filter,
                threshold = threshold.get(),
                kept = kept.len(),
                dropped = totals.len() - kept.len(),
                "Filtered totals"
            );
            kept
        }
    };

    (totals, stats)
}

/// Count all words in a corpus of documents.
///
/// With `filter` set to `None` every word is returned; otherwise only words
/// with at least that many occurrences.
///
/// # Example
///
/// ```rust
/// use wordtally::core::Threshold;
/// use wordtally::pipeline::count_words;
///
/// let corpus = ["At vero lorem et accusam et", "lorem"];
///
/// let totals = count_words(&corpus, None);
/// assert_eq!(totals.get("lorem"), Some(2));
///
/// let frequent = count_words(&corpus, Some(Threshold::new(2)));
/// assert_eq!(frequent.len(), 2);
/// ```
pub fn count_words<S: AsRef<str>>(corpus: &[S], filter: Option<Threshold>) -> WordTotals {
    run_stages(corpus, filter).0
}

/// Count words in an untyped corpus.
///
/// `corpus` must be a JSON list of strings and `filter`, when present and
/// not `null`, a non-negative integer. Both are checked before counting.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wordtally::pipeline::{count_words_value, PipelineError};
///
/// let totals = count_words_value(&json!(["a b a"]), None).unwrap();
/// assert_eq!(totals.get("a"), Some(2));
///
/// let error = count_words_value(&json!(["a b"]), Some(&json!(2.5))).unwrap_err();
/// assert!(matches!(error, PipelineError::InvalidThreshold { .. }));
/// ```
pub fn count_words_value(
    corpus: &Value,
    filter: Option<&Value>,
) -> Result<WordTotals, PipelineError> {
    let corpus = Corpus::from_value(corpus)?;
    let filter = parse_filter(filter)?;
    Ok(count_words(corpus.documents(), filter))
}

/// Count all words in a corpus of documents stored in files.
///
/// Files that cannot be read abort the run with
/// [`PipelineError::CorpusRead`], unless `skip_corrupted` is set, in which
/// case they are logged and left out.
pub fn count_words_from_files<P: AsRef<Path>>(
    paths: &[P],
    skip_corrupted: bool,
    filter: Option<Threshold>,
) -> Result<WordTotals, PipelineError> {
    let counter = WordCounter::new(
        CountOptions {
            skip_corrupted,
            filter,
        },
        FsSource,
    );
    counter.count_files(paths).map(|outcome| outcome.totals)
}

/// A configured word counter.
///
/// Holds no state between calls; every count is a fresh run through the
/// stages.
#[derive(Clone, Debug, Default)]
pub struct WordCounter<Src = FsSource> {
    options: CountOptions,
    source: Src,
}

impl WordCounter {
    /// Start building a counter that reads from the filesystem.
    pub fn builder() -> WordCounterBuilder {
        WordCounterBuilder::new()
    }
}

impl<Src: TextSource> WordCounter<Src> {
    pub fn new(options: CountOptions, source: Src) -> Self {
        Self { options, source }
    }

    pub fn options(&self) -> &CountOptions {
        &self.options
    }

    /// Count an in-memory corpus using the configured filter.
    pub fn count<S: AsRef<str>>(&self, corpus: &[S]) -> WordTotals {
        count_words(corpus, self.options.filter)
    }

    /// Read every path into a corpus.
    ///
    /// Only read failures are caught. With `skip_corrupted` off, the first
    /// one aborts the whole batch.
    pub fn load_corpus<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<(Corpus, Vec<SkipNotice>), PipelineError> {
        let mut documents = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match self.source.read_text(path) {
                Ok(text) => documents.push(text),
                Err(source) if self.options.skip_corrupted => {
                    let notice = SkipNotice::new(path, source.to_string());
                    warn!("{} ({})", notice.message(), source);
                    skipped.push(notice);
                }
                Err(source) => {
                    return Err(PipelineError::CorpusRead {
                        path: path.to_path_buf(),
                        source,
                    });
                }
            }
        }

        Ok((Corpus::new(documents), skipped))
    }

    /// Read the files and count their words.
    pub fn count_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<CountOutcome, PipelineError> {
        let (corpus, skipped) = self.load_corpus(paths)?;
        let (totals, stats) = run_stages(corpus.documents(), self.options.filter);

        info!(
            "Counted {} tokens across {} documents ({} skipped)",
            stats.tokens,
            stats.documents,
            skipped.len()
        );

        Ok(CountOutcome {
            totals,
            skipped,
            stats,
            filter: self.options.filter,
        })
    }
}
