//! Validation of untyped pipeline input.
//!
//! Typed callers pass `&[impl AsRef<str>]` and [`Threshold`] and cannot get
//! these wrong. Callers holding JSON values (configuration, bindings, test
//! fixtures) go through the checks here, which run before any pipeline work.

use super::error::PipelineError;
use crate::core::Threshold;
use serde_json::Value;
use std::str::FromStr;
use stillwater::Validation;

/// A validated list of documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    pub fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }

    /// Validate a JSON value as a list of strings.
    ///
    /// Every non-string element is reported, not just the first one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wordtally::pipeline::{Corpus, PipelineError};
    ///
    /// let corpus = Corpus::from_value(&json!(["a b", "c"])).unwrap();
    /// assert_eq!(corpus.len(), 2);
    ///
    /// let error = Corpus::from_value(&json!("not a list")).unwrap_err();
    /// assert!(matches!(error, PipelineError::InvalidInputKind { .. }));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, PipelineError> {
        let Value::Array(items) = value else {
            return Err(PipelineError::InvalidInputKind {
                found: kind_of(value).to_string(),
            });
        };

        match validate_documents(items) {
            Validation::Success(documents) => Ok(Self { documents }),
            Validation::Failure(problems) => Err(PipelineError::InvalidInputKind {
                found: format!("a list containing {}", problems.join(", ")),
            }),
        }
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn into_documents(self) -> Vec<String> {
        self.documents
    }
}

impl From<Vec<String>> for Corpus {
    fn from(documents: Vec<String>) -> Self {
        Self::new(documents)
    }
}

fn validate_documents(items: &[Value]) -> Validation<Vec<String>, Vec<String>> {
    let mut documents = Vec::with_capacity(items.len());
    let mut problems = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(text) => documents.push(text.clone()),
            other => problems.push(format!("{} at index {}", kind_of(other), index)),
        }
    }

    if problems.is_empty() {
        Validation::Success(documents)
    } else {
        Validation::Failure(problems)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl Threshold {
    /// Validate a JSON value as a threshold.
    ///
    /// Only non-negative integers are accepted: `2.5`, `4.0`, `"4"`, `-1`
    /// and `true` are all rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use wordtally::core::Threshold;
    ///
    /// assert_eq!(Threshold::from_value(&json!(4)).unwrap(), Threshold::new(4));
    /// assert!(Threshold::from_value(&json!(2.5)).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, PipelineError> {
        value
            .as_u64()
            .map(Threshold::new)
            .ok_or_else(|| PipelineError::InvalidThreshold {
                found: value.to_string(),
            })
    }
}

/// Validate an optional JSON filter; `None` and `null` mean no filtering.
pub fn parse_filter(filter: Option<&Value>) -> Result<Option<Threshold>, PipelineError> {
    match filter {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Threshold::from_value(value).map(Some),
    }
}

impl TryFrom<i64> for Threshold {
    type Error = PipelineError;

    fn try_from(min_count: i64) -> Result<Self, Self::Error> {
        u64::try_from(min_count)
            .map(Threshold::new)
            .map_err(|_| PipelineError::InvalidThreshold {
                found: min_count.to_string(),
            })
    }
}

impl FromStr for Threshold {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Threshold::new)
            .map_err(|_| PipelineError::InvalidThreshold {
                found: format!("{s:?}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_list_of_strings() {
        let corpus = Corpus::from_value(&json!(["Lorem ipsum", "", "et"])).unwrap();

        assert_eq!(corpus.documents(), ["Lorem ipsum", "", "et"]);
    }

    #[test]
    fn accepts_empty_list() {
        assert!(Corpus::from_value(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn rejects_bare_string() {
        let result = Corpus::from_value(&json!("not a list"));

        match result {
            Err(PipelineError::InvalidInputKind { found }) => assert_eq!(found, "a string"),
            other => panic!("Expected InvalidInputKind, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_string_elements() {
        let result = Corpus::from_value(&json!([123]));

        assert!(matches!(result, Err(PipelineError::InvalidInputKind { .. })));
    }

    #[test]
    fn reports_every_bad_element() {
        let result = Corpus::from_value(&json!(["ok", 1, null, "fine", {"a": 1}]));

        let Err(PipelineError::InvalidInputKind { found }) = result else {
            panic!("Expected InvalidInputKind");
        };
        assert!(found.contains("a number at index 1"));
        assert!(found.contains("null at index 2"));
        assert!(found.contains("an object at index 4"));
    }

    #[test]
    fn rejects_objects_and_null_as_corpus() {
        assert!(Corpus::from_value(&json!({"docs": ["a"]})).is_err());
        assert!(Corpus::from_value(&Value::Null).is_err());
    }

    #[test]
    fn threshold_accepts_non_negative_integers() {
        assert_eq!(Threshold::from_value(&json!(0)).unwrap(), Threshold::new(0));
        assert_eq!(Threshold::from_value(&json!(4)).unwrap(), Threshold::new(4));
    }

    #[test]
    fn threshold_rejects_fractions_strings_and_negatives() {
        for bad in [json!(2.5), json!(4.0), json!("4"), json!(-1), json!(true), json!([4])] {
            let result = Threshold::from_value(&bad);
            assert!(
                matches!(result, Err(PipelineError::InvalidThreshold { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn parse_filter_treats_null_as_absent() {
        assert_eq!(parse_filter(None).unwrap(), None);
        assert_eq!(parse_filter(Some(&Value::Null)).unwrap(), None);
        assert_eq!(
            parse_filter(Some(&json!(3))).unwrap(),
            Some(Threshold::new(3))
        );
    }

    #[test]
    fn threshold_from_signed_integer() {
        assert_eq!(Threshold::try_from(4i64).unwrap(), Threshold::new(4));
        assert!(matches!(
            Threshold::try_from(-2i64),
            Err(PipelineError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn threshold_from_text() {
        assert_eq!(" 7 ".parse::<Threshold>().unwrap(), Threshold::new(7));
        assert!("2.5".parse::<Threshold>().is_err());
        assert!("four".parse::<Threshold>().is_err());
    }
}
