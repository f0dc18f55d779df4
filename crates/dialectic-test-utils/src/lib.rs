//! Testing utilities for the dialectic workspace
//!
//! Shared fixtures, shorthand constructors and proptest strategies.

#![allow(missing_docs)]

use dialectic_model::{
    Argument, ArgumentId, Attack, AttackType, Catalog, Claims, FrameworkSpec, Label, Strength,
};
use proptest::prelude::*;

/// Defeasible argument whose agent and claim are derived from its id
pub fn arg(id: &str) -> Argument {
    Argument::new(id, "tester", format!("claim {id}"))
}

/// Rebut from `attacker` to `target`
pub fn rebut(id: &str, attacker: &str, target: &str) -> Attack {
    Attack::new(id, attacker, target, AttackType::Rebut)
}

/// Framework from bare ids and `(attacker, target)` pairs; attack ids are `"{attacker}>{target}"`
pub fn framework_spec(arguments: &[&str], attacks: &[(&str, &str)]) -> FrameworkSpec {
    let spec = arguments
        .iter()
        .fold(FrameworkSpec::new("fixture"), |spec, id| spec.argument(arg(id)));
    attacks.iter().fold(spec, |spec, (from, to)| {
        spec.attack(rebut(&format!("{from}>{to}"), from, to))
    })
}

pub fn ids(values: &[&str]) -> Vec<ArgumentId> {
    values.iter().map(|v| ArgumentId::from(*v)).collect()
}

/// A attacks B, B attacks C, C attacks A
pub fn three_cycle() -> FrameworkSpec {
    framework_spec(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")])
}

/// A and B attack each other
pub fn mutual_attack() -> FrameworkSpec {
    framework_spec(&["A", "B"], &[("A", "B"), ("B", "A")])
}

/// A attacks B; C stands alone
pub fn simple_defeat() -> FrameworkSpec {
    framework_spec(&["A", "B", "C"], &[("A", "B")])
}

/// A attacks B, B attacks C: C is reinstated
pub fn reinstatement_chain() -> FrameworkSpec {
    framework_spec(&["A", "B", "C"], &[("A", "B"), ("B", "C")])
}

/// "Does the Wavefunction Collapse?", with the extensions its authors wrote by hand
pub fn collapse_debate() -> FrameworkSpec {
    FrameworkSpec::new("Does the Wavefunction Collapse?")
        .argument(
            Argument::new("A1", "everett", "The universal wavefunction never collapses")
                .with_premise("The Schrodinger equation is universal and linear")
                .with_premise("Linearity implies superposition persists at all scales")
                .with_premise("Decoherence explains apparent collapse without modifying QM")
                .with_conclusion("Collapse is not a physical process; apparent collapse = \
                    decoherence + branching")
                .with_strength(Strength::Strict),
        )
        .argument(
            Argument::new("A2", "penrose", "Superpositions collapse at gravitational threshold")
                .with_premise("General relativity requires definite spacetime geometry")
                .with_premise("Superposition of masses = superposition of spacetimes (ill-defined)")
                .with_premise("Gravitational self-energy E_G provides natural threshold")
                .with_premise("Collapse timescale t ~ hbar/E_G is testable")
                .with_conclusion("Objective reduction occurs when E_G exceeds hbar/t"),
        )
        .argument(
            Argument::new("A3", "everett", "Parsimony favors Many-Worlds")
                .with_premise("Many-Worlds requires exactly one postulate (Schrodinger equation)")
                .with_premise("Collapse theories add a new physical mechanism")
                .with_premise("Occam's razor: prefer fewer postulates")
                .with_conclusion("Many-Worlds is more parsimonious than any collapse theory"),
        )
        .argument(
            Argument::new("A4", "penrose", "Many-Worlds has the probability problem")
                .with_premise("In Many-Worlds, all outcomes occur with certainty")
                .with_premise("Born rule probabilities require preferred branch measure")
                .with_premise("Deutsch-Wallace derivation assumes controversial rationality axioms")
                .with_conclusion("Many-Worlds cannot derive the Born rule without circular \
                    assumptions"),
        )
        .argument(
            Argument::new("A5", "everett", "Decoherence solves the preferred basis problem")
                .with_premise("Environment-induced superselection (einselection) selects pointer \
                    states")
                .with_premise("Decoherence timescale for macroscopic objects ~ 1e-20 s")
                .with_premise("Pointer basis is determined by H_int, not observer")
                .with_conclusion("The preferred basis is physically determined, not subjective")
                .with_strength(Strength::Strict),
        )
        .argument(
            Argument::new("A6", "penrose", "Decoherence yields improper mixtures")
                .with_premise("Tracing over environment gives diagonal density matrix")
                .with_premise("Diagonal density matrix is not a classical mixture (improper vs \
                    proper)")
                .with_premise("Improper mixture still represents AND (superposition), not OR \
                    (definite outcome)")
                .with_conclusion("Decoherence alone does not explain definite outcomes")
                .with_strength(Strength::Strict),
        )
        .attack(
            Attack::new("att1", "A4", "A3", AttackType::Rebut)
                .with_reason("If Born rule cannot be derived, parsimony argument fails"),
        )
        .attack(
            Attack::new("att2", "A5", "A4", AttackType::Undercut)
                .with_reason("Decoherence + decision theory may suffice"),
        )
        .attack(
            Attack::new("att3", "A6", "A5", AttackType::Undermine)
                .with_reason("Decoherence solves interference suppression but not the AND to OR \
                    transition")
                .on_premise(0),
        )
        .attack(
            Attack::new("att4", "A1", "A2", AttackType::Rebut)
                .with_reason("No independent evidence for gravitational collapse; standard QM \
                    suffices"),
        )
        .attack(
            Attack::new("att5", "A2", "A1", AttackType::Rebut)
                .with_reason("Superposition of spacetimes is physically ill-defined without \
                    collapse"),
        )
        .with_claims(Claims {
            status: [
                ("A1", Label::In),
                ("A2", Label::In),
                ("A3", Label::Undecided),
                ("A4", Label::In),
                ("A5", Label::In),
                ("A6", Label::In),
            ]
            .into_iter()
            .map(|(id, label)| (ArgumentId::from(id), label))
            .collect(),
            grounded: Some(ids(&["A1", "A5", "A6"])),
            preferred: Some(vec![ids(&["A1", "A3", "A5"]), ids(&["A2", "A4", "A6"])]),
        })
}

/// "Mathematical Existence: Construction vs Discovery", with authored extensions
pub fn constructivism_debate() -> FrameworkSpec {
    FrameworkSpec::new("Mathematical Existence: Construction vs Discovery")
        .argument(
            Argument::new("B1", "goedel", "Mathematical truths exist independently")
                .with_premise("Godel's first incompleteness theorem: true but unprovable \
                    sentences exist")
                .with_premise("Truth is independent of provability")
                .with_premise("Therefore mathematical reality transcends formal systems")
                .with_conclusion("Mathematical Platonism: objects exist in an abstract realm we \
                    discover"),
        )
        .argument(
            Argument::new("B2", "bishop", "Only constructive proofs are valid")
                .with_premise("Existence claims without witnesses are epistemically empty")
                .with_premise("LEM fails computationally")
                .with_premise("Constructive proofs are programs (Curry-Howard)")
                .with_conclusion("Mathematics is construction, not discovery; proofs must compute")
                .with_strength(Strength::Strict),
        )
        .argument(
            Argument::new("B3", "goedel", "Constructivism is unnecessarily restrictive")
                .with_premise("Classical mathematics proves strictly more theorems")
                .with_premise("Many physically useful results require AC or LEM")
                .with_premise("Restriction without physical motivation is arbitrary")
                .with_conclusion("Constructivism impoverishes mathematics without justification"),
        )
        .argument(
            Argument::new("B4", "bishop", "Godel's proof is itself constructive")
                .with_premise("The Godel sentence G is explicitly constructed via diagonalization")
                .with_premise("The incompleteness proof provides an algorithm")
                .with_premise("Platonism is not needed to state or prove incompleteness")
                .with_conclusion("Incompleteness does not require Platonism; it is a constructive \
                    result")
                .with_strength(Strength::Strict),
        )
        .attack(
            Attack::new("att-b1", "B2", "B1", AttackType::Undermine)
                .with_reason("The premise 'truth independent of provability' assumes Platonism")
                .on_premise(1),
        )
        .attack(
            Attack::new("att-b2", "B4", "B1", AttackType::Undercut)
                .with_reason("The example used to support Platonism is itself constructive"),
        )
        .attack(
            Attack::new("att-b3", "B3", "B2", AttackType::Rebut)
                .with_reason("Practicality outweighs philosophical purity"),
        )
        .with_claims(Claims {
            status: [
                ("B1", Label::In),
                ("B2", Label::In),
                ("B3", Label::Undecided),
                ("B4", Label::In),
            ]
            .into_iter()
            .map(|(id, label)| (ArgumentId::from(id), label))
            .collect(),
            grounded: Some(ids(&["B2", "B4"])),
            preferred: Some(vec![ids(&["B1", "B3"]), ids(&["B2", "B4"])]),
        })
}

/// Both sample debates under their catalog keys
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert("collapse-debate".into(), collapse_debate());
    catalog.insert("constructivism-debate".into(), constructivism_debate());
    catalog
}

/// Random frameworks: up to `max_arguments` arguments named `a0..`, any attack
/// pattern including self-attacks and parallel attacks
pub fn arb_framework(
    max_arguments: usize,
    max_attacks: usize,
) -> impl Strategy<Value = FrameworkSpec> {
    (0..=max_arguments).prop_flat_map(move |count| {
        let pairs = if count == 0 {
            Just(Vec::new()).boxed()
        } else {
            proptest::collection::vec((0..count, 0..count), 0..=max_attacks).boxed()
        };
        pairs.prop_map(move |pairs| {
            let names: Vec<String> = (0..count).map(|i| format!("a{i}")).collect();
            let spec = names
                .iter()
                .fold(FrameworkSpec::new("generated"), |spec, name| spec.argument(arg(name)));
            pairs
                .into_iter()
                .enumerate()
                .fold(spec, |spec, (n, (from, to))| {
                    spec.attack(rebut(&format!("k{n}"), &names[from], &names[to]))
                })
        })
    })
}
