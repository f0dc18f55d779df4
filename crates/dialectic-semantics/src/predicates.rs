//! Conflict-freeness and admissibility
//!
//! - A set is *conflict-free* when no member attacks a member (itself
//!   included).
//! - A set is *admissible* when it is conflict-free and defends itself:
//!   every attacker of a member is attacked by some member.

use crate::members::Members;
use dialectic_model::ArgumentId;
use dialectic_store::{Framework, StoreResult};

pub(crate) fn conflict_free(framework: &Framework, set: &Members) -> bool {
    set.indices()
        .all(|member| framework.target_indices(member).all(|target| !set.contains(target)))
}

pub(crate) fn defends_itself(framework: &Framework, set: &Members) -> bool {
    let counter_attacked = set.attacked_by(framework);
    set.indices().all(|member| {
        framework
            .attacker_indices(member)
            .all(|attacker| counter_attacked.contains(attacker))
    })
}

pub(crate) fn admissible(framework: &Framework, set: &Members) -> bool {
    conflict_free(framework, set) && defends_itself(framework, set)
}

pub(crate) fn resolve(framework: &Framework, ids: &[ArgumentId]) -> StoreResult<Members> {
    let indices = framework.indices_of(ids)?;
    Ok(Members::from_indices(framework.len(), indices))
}

/// Whether no member of `ids` attacks a member of `ids`
///
/// # Errors
/// `ArgumentNotFound` for ids outside the framework.
pub fn is_conflict_free(framework: &Framework, ids: &[ArgumentId]) -> StoreResult<bool> {
    Ok(conflict_free(framework, &resolve(framework, ids)?))
}

/// Whether `ids` is conflict-free and counter-attacks all its attackers
///
/// # Errors
/// `ArgumentNotFound` for ids outside the framework.
pub fn is_admissible(framework: &Framework, ids: &[ArgumentId]) -> StoreResult<bool> {
    Ok(admissible(framework, &resolve(framework, ids)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_test_utils::{framework_spec, ids, mutual_attack, simple_defeat, three_cycle};

    fn load(spec: dialectic_model::FrameworkSpec) -> Framework {
        Framework::load(spec).unwrap()
    }

    #[test]
    fn empty_set_is_admissible() {
        let fw = load(three_cycle());
        assert!(is_conflict_free(&fw, &[]).unwrap());
        assert!(is_admissible(&fw, &[]).unwrap());
    }

    #[test]
    fn attacking_pair_is_not_conflict_free() {
        let fw = load(simple_defeat());
        assert!(!is_conflict_free(&fw, &ids(&["A", "B"])).unwrap());
        assert!(is_conflict_free(&fw, &ids(&["A", "C"])).unwrap());
    }

    #[test]
    fn self_attacker_is_never_conflict_free() {
        let fw = load(framework_spec(&["L"], &[("L", "L")]));
        assert!(!is_conflict_free(&fw, &ids(&["L"])).unwrap());
    }

    #[test]
    fn defence_makes_the_difference() {
        let fw = load(mutual_attack());
        // A counter-attacks its only attacker
        assert!(is_admissible(&fw, &ids(&["A"])).unwrap());

        let cycle = load(three_cycle());
        // A is attacked by C and does not attack C
        assert!(is_conflict_free(&cycle, &ids(&["A"])).unwrap());
        assert!(!is_admissible(&cycle, &ids(&["A"])).unwrap());
    }

    #[test]
    fn unknown_id_is_reported() {
        let fw = load(simple_defeat());
        let err = is_admissible(&fw, &ids(&["A", "Z"])).unwrap_err();
        assert!(err.is_not_found());
    }
}
