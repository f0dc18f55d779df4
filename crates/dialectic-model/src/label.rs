//! Acceptability labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of an argument relative to a semantics or a chosen extension
///
/// The legacy spellings `undefeated`, `defeated` and `blocking` are accepted
/// when reading hand-authored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Accepted
    #[serde(alias = "undefeated")]
    In,
    /// Rejected: attacked by an accepted argument
    #[serde(alias = "defeated")]
    Out,
    /// Neither accepted nor rejected
    #[serde(alias = "blocking")]
    Undecided,
}

impl Label {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Undecided => "undecided",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
