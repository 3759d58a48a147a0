//! Pipeline error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the pipeline boundary.
///
/// The stages themselves never fail; every variant here is detected before
/// the map stage starts.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus is not a list of strings
    #[error("The corpus to analyse needs to be a list of strings, found {found}")]
    InvalidInputKind { found: String },

    /// The filter threshold is not a non-negative integer
    #[error("The filter threshold needs to be a non-negative integer, found {found}")]
    InvalidThreshold { found: String },

    /// A corpus file could not be read and skipping was not allowed
    #[error("The file {} cannot be read: {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Count options could not be parsed
    #[error("Invalid count options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
