//! Options controlling a word-count run.

use crate::core::Threshold;
use crate::pipeline::{parse_filter, PipelineError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a run treats unreadable files and which words it keeps.
///
/// The default reads every file strictly and keeps every word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOptions {
    /// Leave unreadable files out instead of aborting the run
    #[serde(default)]
    pub skip_corrupted: bool,

    /// Keep only words with at least this many occurrences
    #[serde(default)]
    pub filter: Option<Threshold>,
}

impl CountOptions {
    /// Parse options from JSON.
    ///
    /// Both fields are optional. The filter goes through the same checks as
    /// any other untyped threshold, so `2.5` or `"4"` fail with
    /// [`PipelineError::InvalidThreshold`] rather than a generic parse
    /// error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wordtally::builder::CountOptions;
    /// use wordtally::core::Threshold;
    ///
    /// let options = CountOptions::from_json(r#"{"skip_corrupted": true, "filter": 4}"#).unwrap();
    ///
    /// assert!(options.skip_corrupted);
    /// assert_eq!(options.filter, Some(Threshold::new(4)));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let mut raw: Value = serde_json::from_str(json)?;
        let filter = parse_filter(raw.get("filter"))?;

        // The filter is already validated; parse the rest without it.
        if let Value::Object(fields) = &mut raw {
            fields.remove("filter");
        }
        let mut options: CountOptions = serde_json::from_value(raw)?;
        options.filter = filter;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict_and_unfiltered() {
        let options = CountOptions::default();

        assert!(!options.skip_corrupted);
        assert_eq!(options.filter, None);
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(CountOptions::from_json("{}").unwrap(), CountOptions::default());
    }

    #[test]
    fn null_filter_means_unfiltered() {
        let options = CountOptions::from_json(r#"{"filter": null}"#).unwrap();
        assert_eq!(options.filter, None);
    }

    #[test]
    fn fractional_filter_is_invalid_threshold() {
        let result = CountOptions::from_json(r#"{"filter": 2.5}"#);
        assert!(matches!(result, Err(PipelineError::InvalidThreshold { .. })));
    }

    #[test]
    fn string_filter_is_invalid_threshold() {
        let result = CountOptions::from_json(r#"{"filter": "4"}"#);
        assert!(matches!(result, Err(PipelineError::InvalidThreshold { .. })));
    }

    #[test]
    fn malformed_json_is_invalid_options() {
        assert!(matches!(
            CountOptions::from_json("{skip_corrupted: yes"),
            Err(PipelineError::InvalidOptions(_))
        ));
        assert!(matches!(
            CountOptions::from_json(r#"{"skip_corrupted": "yes"}"#),
            Err(PipelineError::InvalidOptions(_))
        ));
    }

    #[test]
    fn options_roundtrip_through_json() {
        let options = CountOptions {
            skip_corrupted: true,
            filter: Some(Threshold::new(3)),
        };
        let json = serde_json::to_string(&options).unwrap();

        assert_eq!(json, r#"{"skip_corrupted":true,"filter":3}"#);
        assert_eq!(CountOptions::from_json(&json).unwrap(), options);
    }
}
