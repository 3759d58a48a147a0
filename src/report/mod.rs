//! Serializable summaries of word-count runs.
//!
//! A report captures what one run produced: the totals, the files it had to
//! skip, and the sizes seen along the way. Reports encode to JSON for people
//! and to bincode for compact storage.

use crate::core::{Stage, Threshold, WordTotals};
use crate::pipeline::{CountOutcome, RunStats, SkipNotice};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{Encoding, ReportError};

/// Version identifier for report format
pub const REPORT_VERSION: u32 = 1;

/// Summary of one word-count run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountReport {
    /// Report format version
    pub version: u32,

    /// Unique report identifier
    pub id: String,

    /// When the report was created
    pub timestamp: DateTime<Utc>,

    /// Threshold applied to the totals, if any
    pub filter: Option<Threshold>,

    /// Stages the run went through
    pub stages: Vec<Stage>,

    /// Sizes observed before filtering
    pub stats: RunStats,

    /// Final word totals
    pub totals: WordTotals,

    /// Files left out of the corpus
    pub skipped: Vec<SkipNotice>,
}

impl CountReport {
    /// Build a report from a finished run.
    ///
    /// The filter and stage list come from the outcome itself.
    pub fn new(outcome: CountOutcome) -> Self {
        Self {
            version: REPORT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            filter: outcome.filter,
            stages: Stage::plan(outcome.filter.is_some()).to_vec(),
            stats: outcome.stats,
            totals: outcome.totals,
            skipped: outcome.skipped,
        }
    }

    /// The `n` most frequent words, most frequent first.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut sorted = self.totals.sorted_by_count();
        sorted.truncate(n);
        sorted
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::encode(Encoding::Json, e))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        let report: Self =
            serde_json::from_str(json).map_err(|e| ReportError::decode(Encoding::Json, e))?;
        report.check_version()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ReportError> {
        bincode::serialize(self).map_err(|e| ReportError::encode(Encoding::Bincode, e))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReportError> {
        let report: Self =
            bincode::deserialize(bytes).map_err(|e| ReportError::decode(Encoding::Bincode, e))?;
        report.check_version()
    }

    fn check_version(self) -> Result<Self, ReportError> {
        if self.version != REPORT_VERSION {
            return Err(ReportError::UnsupportedVersion {
                found: self.version,
                supported: REPORT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(filter: Option<Threshold>) -> CountOutcome {
        CountOutcome {
            totals: vec![
                ("ipsum".to_string(), 5),
                ("et".to_string(), 11),
                ("lorem".to_string(), 5),
            ]
            .into(),
            skipped: vec![SkipNotice::new("./data/corrupt.rtf", "invalid UTF-8")],
            stats: RunStats {
                documents: 4,
                tokens: 50,
                distinct_words: 19,
            },
            filter,
        }
    }

    #[test]
    fn new_report_records_run() {
        let report = CountReport::new(outcome(Some(Threshold::new(4))));

        assert_eq!(report.version, REPORT_VERSION);
        assert!(Uuid::parse_str(&report.id).is_ok());
        assert_eq!(report.stages.last(), Some(&Stage::Filter));
        assert_eq!(report.stats.documents, 4);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn unfiltered_report_has_no_filter_stage() {
        let report = CountReport::new(outcome(None));

        assert_eq!(report.stages, vec![Stage::Map, Stage::Group, Stage::Reduce]);
    }

    #[test]
    fn reports_get_distinct_ids() {
        let first = CountReport::new(outcome(None));
        let second = CountReport::new(outcome(None));

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn top_orders_by_count_then_word() {
        let report = CountReport::new(outcome(None));

        assert_eq!(report.top(2), vec![("et", 11), ("ipsum", 5)]);
        assert_eq!(report.top(10).len(), 3);
    }

    #[test]
    fn json_roundtrip() {
        let report = CountReport::new(outcome(Some(Threshold::new(4))));
        let json = report.to_json().unwrap();

        assert_eq!(CountReport::from_json(&json).unwrap(), report);
    }

    #[test]
    fn binary_roundtrip() {
        let report = CountReport::new(outcome(None));
        let bytes = report.to_bytes().unwrap();

        assert_eq!(CountReport::from_bytes(&bytes).unwrap(), report);
    }

    #[test]
    fn rejects_other_versions() {
        let mut report = CountReport::new(outcome(None));
        report.version = REPORT_VERSION + 1;
        let json = report.to_json().unwrap();

        assert!(matches!(
            CountReport::from_json(&json),
            Err(ReportError::UnsupportedVersion { found, supported })
                if found == REPORT_VERSION + 1 && supported == REPORT_VERSION
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            CountReport::from_json("{not json"),
            Err(ReportError::Decode {
                encoding: Encoding::Json,
                ..
            })
        ));
        assert!(matches!(
            CountReport::from_bytes(&[1, 2, 3]),
            Err(ReportError::Decode {
                encoding: Encoding::Bincode,
                ..
            })
        ));
    }
}
