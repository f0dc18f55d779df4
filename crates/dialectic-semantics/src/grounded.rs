//! Grounded semantics
//!
//! The characteristic function of a framework is
//! `F(S) = { a : every attacker of a is attacked by some member of S }`.
//! F is monotonic, so iterating it from the empty set climbs to its least
//! fixpoint, the grounded extension, in at most |arguments| strict steps.
//!
//! Labels follow from the fixpoint: members are `in`, arguments attacked by
//! a member are `out`, everything else is `undecided`.

use crate::extension::Extension;
use crate::members::Members;
use dialectic_model::{ArgumentId, Label};
use dialectic_store::{Framework, StoreResult};
use serde::Serialize;

pub(crate) fn apply(framework: &Framework, set: &Members) -> Members {
    let defeated = set.attacked_by(framework);
    Members::from_fn(framework.len(), |candidate| {
        framework
            .attacker_indices(candidate)
            .all(|attacker| defeated.contains(attacker))
    })
}

/// One application of the characteristic function
///
/// # Errors
/// `ArgumentNotFound` for ids outside the framework.
pub fn characteristic(framework: &Framework, ids: &[ArgumentId]) -> StoreResult<Extension> {
    let set = crate::predicates::resolve(framework, ids)?;
    Ok(apply(framework, &set).to_extension(framework))
}

/// Successive iterates `F(∅), F(F(∅)), …`, ending at the fixpoint
///
/// Each yielded set strictly contains the previous one; the last one yielded
/// is the grounded extension. Nothing is yielded when `F(∅)` is empty.
#[derive(Debug)]
pub struct CharacteristicIter<'a> {
    steps: Steps<'a>,
}

impl<'a> CharacteristicIter<'a> {
    /// Start from the empty set
    #[must_use]
    pub fn new(framework: &'a Framework) -> Self {
        Self {
            steps: Steps::new(framework),
        }
    }
}

impl Iterator for CharacteristicIter<'_> {
    type Item = Extension;

    fn next(&mut self) -> Option<Self::Item> {
        let framework = self.steps.framework;
        self.steps.next().map(|set| set.to_extension(framework))
    }
}

#[derive(Debug)]
struct Steps<'a> {
    framework: &'a Framework,
    current: Members,
    applications: usize,
    done: bool,
}

impl<'a> Steps<'a> {
    fn new(framework: &'a Framework) -> Self {
        Self {
            framework,
            current: Members::empty(framework.len()),
            applications: 0,
            done: false,
        }
    }
}

impl Iterator for Steps<'_> {
    type Item = Members;

    fn next(&mut self) -> Option<Members> {
        if self.done {
            return None;
        }
        let next = apply(self.framework, &self.current);
        self.applications += 1;
        if next == self.current {
            self.done = true;
            return None;
        }
        self.current = next;
        Some(self.current.clone())
    }
}

/// Three-valued grounded labelling of a framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroundedLabelling {
    #[serde(rename = "in")]
    accepted: Extension,
    #[serde(rename = "out")]
    rejected: Vec<ArgumentId>,
    undecided: Vec<ArgumentId>,
    iterations: usize,
    #[serde(skip)]
    labels: Vec<Label>,
    #[serde(skip)]
    members: Members,
}

impl GroundedLabelling {
    /// The grounded extension (`in` arguments)
    #[inline]
    #[must_use]
    pub fn in_set(&self) -> &Extension {
        &self.accepted
    }

    /// Arguments attacked by an `in` argument
    #[inline]
    #[must_use]
    pub fn out_set(&self) -> &[ArgumentId] {
        &self.rejected
    }

    /// Arguments neither `in` nor `out`
    #[inline]
    #[must_use]
    pub fn undecided_set(&self) -> &[ArgumentId] {
        &self.undecided
    }

    /// Applications of the characteristic function, the confirming one included
    #[inline]
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Label of the argument at `index`
    #[inline]
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    /// All labels in framework order
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub(crate) fn members(&self) -> &Members {
        &self.members
    }
}

/// Compute the grounded labelling
#[must_use]
pub fn compute_grounded(framework: &Framework) -> GroundedLabelling {
    let mut steps = Steps::new(framework);
    let mut fixpoint = Members::empty(framework.len());
    for set in steps.by_ref() {
        fixpoint = set;
    }

    let defeated = fixpoint.attacked_by(framework);
    let labels: Vec<Label> = (0..framework.len())
        .map(|index| {
            if fixpoint.contains(index) {
                Label::In
            } else if defeated.contains(index) {
                Label::Out
            } else {
                Label::Undecided
            }
        })
        .collect();

    let with_label = |wanted: Label| -> Vec<ArgumentId> {
        framework
            .ids()
            .zip(&labels)
            .filter(|(_, label)| **label == wanted)
            .map(|(id, _)| id.clone())
            .collect()
    };
    let rejected = with_label(Label::Out);
    let undecided = with_label(Label::Undecided);

    tracing::debug!(
        arguments = framework.len(),
        iterations = steps.applications,
        accepted = fixpoint.len(),
        rejected = rejected.len(),
        undecided = undecided.len(),
        "grounded fixpoint reached"
    );

    GroundedLabelling {
        accepted: fixpoint.to_extension(framework),
        rejected,
        undecided,
        iterations: steps.applications,
        labels,
        members: fixpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_test_utils::{
        framework_spec, ids, reinstatement_chain, simple_defeat, three_cycle,
    };
    use pretty_assertions::assert_eq;

    fn load(spec: dialectic_model::FrameworkSpec) -> Framework {
        Framework::load(spec).unwrap()
    }

    #[test]
    fn simple_defeat_labels() {
        let fw = load(simple_defeat());
        let grounded = compute_grounded(&fw);
        assert_eq!(grounded.in_set().ids(), ids(&["A", "C"]).as_slice());
        assert_eq!(grounded.out_set(), ids(&["B"]).as_slice());
        assert!(grounded.undecided_set().is_empty());
    }

    #[test]
    fn three_cycle_is_undecided() {
        let fw = load(three_cycle());
        let grounded = compute_grounded(&fw);
        assert!(grounded.in_set().is_empty());
        assert!(grounded.out_set().is_empty());
        assert_eq!(grounded.undecided_set(), ids(&["A", "B", "C"]).as_slice());
        assert_eq!(grounded.iterations(), 1);
    }

    #[test]
    fn reinstatement_takes_two_steps() {
        let fw = load(reinstatement_chain());
        let iterates: Vec<Extension> = CharacteristicIter::new(&fw).collect();
        assert_eq!(
            iterates,
            vec![Extension::new(ids(&["A"])), Extension::new(ids(&["A", "C"]))]
        );
        assert_eq!(compute_grounded(&fw).iterations(), 3);
    }

    #[test]
    fn odd_cycle_contaminates_downstream() {
        // D is attacked only by the cycle, E only by D
        let fw = load(framework_spec(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("D", "E")],
        ));
        let grounded = compute_grounded(&fw);
        assert_eq!(grounded.undecided_set().len(), 5);
    }

    #[test]
    fn characteristic_of_explicit_set() {
        let fw = load(reinstatement_chain());
        let image = characteristic(&fw, &ids(&["A"])).unwrap();
        assert_eq!(image, Extension::new(ids(&["A", "C"])));
        assert!(characteristic(&fw, &ids(&["nope"])).is_err());
    }

    #[test]
    fn empty_framework() {
        let fw = load(framework_spec(&[], &[]));
        let grounded = compute_grounded(&fw);
        assert!(grounded.in_set().is_empty());
        assert!(grounded.labels().is_empty());
    }

    #[test]
    fn label_lookup_by_index() {
        let fw = load(simple_defeat());
        let grounded = compute_grounded(&fw);
        assert_eq!(grounded.label_at(1), Some(Label::Out));
        assert_eq!(grounded.label_at(7), None);
    }
}
