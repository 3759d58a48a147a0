//! Names for the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stage of the word-count pipeline.
///
/// Data moves strictly forward: `Map -> Group -> Reduce -> Filter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Map,
    Group,
    Reduce,
    Filter,
}

impl Stage {
    /// Get the stage's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Map => "map",
            Self::Group => "group",
            Self::Reduce => "reduce",
            Self::Filter => "filter",
        }
    }

    /// The stages a run goes through, with or without a filter.
    pub fn plan(filtered: bool) -> &'static [Stage] {
        if filtered {
            &[Self::Map, Self::Group, Self::Reduce, Self::Filter]
        } else {
            &[Self::Map, Self::Group, Self::Reduce]
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
