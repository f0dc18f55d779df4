//! Extensions and extension selection

use dialectic_model::ArgumentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A set of jointly acceptable arguments, in framework input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extension {
    members: Vec<ArgumentId>,
}

impl Extension {
    /// Wrap ids already in framework order
    #[inline]
    #[must_use]
    pub fn new(members: Vec<ArgumentId>) -> Self {
        Self { members }
    }

    /// Member ids
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[ArgumentId] {
        &self.members
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|member| member.as_str() == id)
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the extension is the empty set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate member ids
    pub fn iter(&self) -> std::slice::Iter<'_, ArgumentId> {
        self.members.iter()
    }

    /// Every member of `self` is in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.members.iter().all(|id| other.contains(id.as_str()))
    }

    /// Strict subset
    #[must_use]
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

impl<'a> IntoIterator for &'a Extension {
    type Item = &'a ArgumentId;
    type IntoIter = std::slice::Iter<'a, ArgumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, id) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(id.as_str())?;
        }
        f.write_str("}")
    }
}

/// Which extension a membership or status query is relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionSelection {
    /// The grounded extension
    Grounded,
    /// The n-th preferred extension (zero-based)
    Preferred(usize),
}

impl fmt::Display for ExtensionSelection {
    /// `grounded` or one-based `preferred-N`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grounded => f.write_str("grounded"),
            Self::Preferred(index) => write!(f, "preferred-{}", index + 1),
        }
    }
}

/// Unparseable selection text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid extension selection '{0}': expected 'grounded' or 'preferred-N' with N >= 1")]
pub struct SelectionParseError(String);

impl FromStr for ExtensionSelection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "grounded" {
            return Ok(Self::Grounded);
        }
        s.strip_prefix("preferred-")
            .and_then(|n| n.parse::<usize>().ok())
            .filter(|n| *n >= 1)
            .map(|n| Self::Preferred(n - 1))
            .ok_or_else(|| SelectionParseError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_test_utils::ids;

    #[test]
    fn subset_checks() {
        let small = Extension::new(ids(&["A"]));
        let big = Extension::new(ids(&["A", "C"]));
        assert!(small.is_strict_subset(&big));
        assert!(!big.is_strict_subset(&big));
        assert!(Extension::default().is_subset(&small));
    }

    #[test]
    fn display_lists_members() {
        assert_eq!(Extension::new(ids(&["A4", "A6"])).to_string(), "{A4, A6}");
        assert_eq!(Extension::default().to_string(), "{}");
    }

    #[test]
    fn selection_parses_one_based() {
        assert_eq!("grounded".parse::<ExtensionSelection>(), Ok(ExtensionSelection::Grounded));
        assert_eq!(
            "preferred-1".parse::<ExtensionSelection>(),
            Ok(ExtensionSelection::Preferred(0))
        );
        assert_eq!(ExtensionSelection::Preferred(1).to_string(), "preferred-2");
        assert!("preferred-0".parse::<ExtensionSelection>().is_err());
        assert!("stable".parse::<ExtensionSelection>().is_err());
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_string(&Extension::new(ids(&["B3", "B4"]))).unwrap();
        assert_eq!(json, r#"["B3","B4"]"#);
    }
}
