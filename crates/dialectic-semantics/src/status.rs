//! Argument status relative to extensions

use crate::extension::Extension;
use crate::preferred::PreferredOutcome;
use dialectic_model::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued status relative to a single extension: `in` iff a member
#[inline]
#[must_use]
pub fn status_of(id: &str, extension: &Extension) -> Label {
    if extension.contains(id) {
        Label::In
    } else {
        Label::Out
    }
}

/// Standing of an argument across all preferred extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acceptance {
    /// Member of every preferred extension
    Skeptical,
    /// Member of some but not all
    Credulous,
    /// Member of none
    Rejected,
}

impl Acceptance {
    /// Lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skeptical => "skeptical",
            Self::Credulous => "credulous",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `id` against the preferred extensions in `outcome`
///
/// With no extensions at all (only possible after an exhausted search that
/// found nothing) every argument is rejected.
#[must_use]
pub fn acceptance_of(outcome: &PreferredOutcome, id: &str) -> Acceptance {
    let hits = outcome
        .extensions()
        .iter()
        .filter(|ext| ext.contains(id))
        .count();
    if hits == 0 {
        Acceptance::Rejected
    } else if hits == outcome.len() {
        Acceptance::Skeptical
    } else {
        Acceptance::Credulous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchBudget;
    use crate::preferred::compute_preferred;
    use dialectic_store::Framework;
    use dialectic_test_utils::{ids, mutual_attack, simple_defeat};

    #[test]
    fn membership_decides_status() {
        let ext = Extension::new(ids(&["A", "C"]));
        assert_eq!(status_of("A", &ext), Label::In);
        assert_eq!(status_of("B", &ext), Label::Out);
    }

    #[test]
    fn acceptance_across_camps() {
        let fw = Framework::load(mutual_attack()).unwrap();
        let outcome = compute_preferred(&fw, &SearchBudget::default());
        assert_eq!(acceptance_of(&outcome, "A"), Acceptance::Credulous);
        assert_eq!(acceptance_of(&outcome, "B"), Acceptance::Credulous);

        let fw = Framework::load(simple_defeat()).unwrap();
        let outcome = compute_preferred(&fw, &SearchBudget::default());
        assert_eq!(acceptance_of(&outcome, "A"), Acceptance::Skeptical);
        assert_eq!(acceptance_of(&outcome, "B"), Acceptance::Rejected);
    }

    #[test]
    fn acceptance_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Acceptance::Skeptical).unwrap(),
            r#""skeptical""#
        );
        assert_eq!(Acceptance::Credulous.to_string(), "credulous");
    }
}
