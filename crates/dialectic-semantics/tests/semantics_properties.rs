use dialectic_model::ArgumentId;
use dialectic_semantics::{
    characteristic, compute_grounded, compute_preferred, is_admissible, is_conflict_free,
    CharacteristicIter, Extension, SearchBudget,
};
use dialectic_store::Framework;
use dialectic_test_utils::arb_framework;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn as_set(extension: &Extension) -> BTreeSet<ArgumentId> {
    extension.iter().cloned().collect()
}

/// Every maximal admissible set, by exhaustive subset enumeration
fn brute_force_preferred(framework: &Framework) -> BTreeSet<BTreeSet<ArgumentId>> {
    let ids: Vec<ArgumentId> = framework.ids().cloned().collect();
    let admissible: Vec<BTreeSet<ArgumentId>> = (0u32..(1 << ids.len()))
        .map(|mask| {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << *i) != 0)
                .map(|(_, id)| id.clone())
                .collect::<Vec<_>>()
        })
        .filter(|subset| is_admissible(framework, subset).unwrap())
        .map(|subset| subset.into_iter().collect())
        .collect();

    admissible
        .iter()
        .filter(|set| {
            !admissible
                .iter()
                .any(|other| other.len() > set.len() && set.is_subset(other))
        })
        .cloned()
        .collect()
}

proptest! {
    #[test]
    fn prop_grounded_is_deterministic_and_admissible(spec in arb_framework(10, 20)) {
        let fw = Framework::load(spec).unwrap();
        let first = compute_grounded(&fw);
        let second = compute_grounded(&fw);
        prop_assert_eq!(&first, &second);

        let members = first.in_set().ids();
        prop_assert!(is_conflict_free(&fw, members).unwrap());
        prop_assert!(is_admissible(&fw, members).unwrap());

        // Least fixpoint of F
        prop_assert_eq!(&characteristic(&fw, members).unwrap(), first.in_set());

        let total = first.in_set().len() + first.out_set().len() + first.undecided_set().len();
        prop_assert_eq!(total, fw.len());
    }

    #[test]
    fn prop_iterates_climb_to_grounded(spec in arb_framework(10, 20)) {
        let fw = Framework::load(spec).unwrap();
        let iterates: Vec<Extension> = CharacteristicIter::new(&fw).collect();

        prop_assert!(iterates.len() <= fw.len());
        for pair in iterates.windows(2) {
            prop_assert!(pair[0].is_strict_subset(&pair[1]));
        }

        let grounded = compute_grounded(&fw);
        let last = iterates.last().cloned().unwrap_or_default();
        prop_assert_eq!(&last, grounded.in_set());
        prop_assert!(grounded.iterations() <= fw.len() + 1);
    }

    #[test]
    fn prop_preferred_are_maximal_admissible(spec in arb_framework(8, 16)) {
        let fw = Framework::load(spec).unwrap();
        let grounded = compute_grounded(&fw);
        let outcome = compute_preferred(&fw, &SearchBudget::unbounded());

        prop_assert!(outcome.is_complete());
        prop_assert!(!outcome.is_empty());

        for ext in outcome.extensions() {
            prop_assert!(is_conflict_free(&fw, ext.ids()).unwrap());
            prop_assert!(is_admissible(&fw, ext.ids()).unwrap());
            prop_assert!(grounded.in_set().is_subset(ext));
            for other in outcome.extensions() {
                prop_assert!(!ext.is_strict_subset(other));
            }
        }
    }

    #[test]
    fn prop_preferred_matches_exhaustive_search(spec in arb_framework(6, 12)) {
        let fw = Framework::load(spec).unwrap();
        let outcome = compute_preferred(&fw, &SearchBudget::unbounded());
        let computed: BTreeSet<BTreeSet<ArgumentId>> =
            outcome.extensions().iter().map(as_set).collect();

        prop_assert_eq!(computed.len(), outcome.len());
        prop_assert_eq!(computed, brute_force_preferred(&fw));
    }

    #[test]
    fn prop_budgeted_results_stay_admissible(spec in arb_framework(8, 16), steps in 1u64..20) {
        let fw = Framework::load(spec).unwrap();
        let outcome = compute_preferred(&fw, &SearchBudget::unbounded().with_max_steps(steps));
        for ext in outcome.extensions() {
            prop_assert!(is_admissible(&fw, ext.ids()).unwrap());
        }
    }
}
