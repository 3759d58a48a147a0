//! Report encoding errors.

use std::fmt;
use thiserror::Error;

/// Wire format a report is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Bincode,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => write!(f, "JSON"),
            Encoding::Bincode => write!(f, "bincode"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not write report as {encoding}: {reason}")]
    Encode { encoding: Encoding, reason: String },

    /// Input was not a report in the given encoding
    #[error("Could not read {encoding} report: {reason}")]
    Decode { encoding: Encoding, reason: String },

    /// Report was written by a build with a different report layout
    #[error("Report version {found} cannot be read; expected version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl ReportError {
    pub(crate) fn encode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        Self::Encode {
            encoding,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(encoding: Encoding, reason: impl fmt::Display) -> Self {
        Self::Decode {
            encoding,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_encoding() {
        let error = ReportError::decode(Encoding::Bincode, "unexpected end of input");

        assert_eq!(
            error.to_string(),
            "Could not read bincode report: unexpected end of input"
        );
        assert_eq!(
            ReportError::encode(Encoding::Json, "key must be a string").to_string(),
            "Could not write report as JSON: key must be a string"
        );
    }

    #[test]
    fn version_message_names_both_versions() {
        let error = ReportError::UnsupportedVersion {
            found: 3,
            supported: 1,
        };

        assert_eq!(
            error.to_string(),
            "Report version 3 cannot be read; expected version 1"
        );
    }
}
