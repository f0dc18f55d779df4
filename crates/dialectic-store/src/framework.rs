//! Validated framework
//!
//! A [`Framework`] can only be obtained through [`FrameworkBuilder::build`]
//! or [`Framework::load`], so every framework reaching the semantics engine
//! has unique ids and no dangling attack endpoints.
//!
//! The attack relation is held as a petgraph `DiGraph`: node `i` is the
//! `i`-th argument in input order and every edge carries the position of its
//! attack. Cycles, including self-loops, are expected.
//!
//! [`FrameworkBuilder::build`]: crate::FrameworkBuilder::build

use crate::builder::FrameworkBuilder;
use crate::error::{StoreError, StoreResult, ValidationError};
use dialectic_model::{Argument, ArgumentId, Attack, AttackId, Claims, Fingerprint, FrameworkSpec};
use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Immutable, indexed argumentation framework
#[derive(Debug, Clone)]
pub struct Framework {
    title: String,
    arguments: IndexMap<ArgumentId, Argument>,
    attacks: IndexMap<AttackId, Attack>,
    graph: DiGraph<ArgumentId, usize>,
    claims: Claims,
    fingerprint: Fingerprint,
}

impl Framework {
    /// Validate and index a framework literal
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found; nothing is kept on failure.
    pub fn load(spec: FrameworkSpec) -> Result<Self, ValidationError> {
        FrameworkBuilder::from_spec(spec).build()
    }

    /// Assemble from already-validated parts (builder only)
    pub(crate) fn from_parts(
        title: String,
        arguments: IndexMap<ArgumentId, Argument>,
        attacks: IndexMap<AttackId, Attack>,
        claims: Claims,
        fingerprint: Fingerprint,
    ) -> Self {
        let mut graph = DiGraph::with_capacity(arguments.len(), attacks.len());
        for id in arguments.keys() {
            graph.add_node(id.clone());
        }
        for (position, attack) in attacks.values().enumerate() {
            // Endpoints were checked by the builder
            if let (Some(from), Some(to)) = (
                arguments.get_index_of(&attack.attacker_id),
                arguments.get_index_of(&attack.target_id),
            ) {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), position);
            }
        }

        Self {
            title,
            arguments,
            attacks,
            graph,
            claims,
            fingerprint,
        }
    }

    /// Debate topic
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Content digest of arguments and attacks
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Authored claims carried along for auditing
    #[inline]
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Number of arguments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Whether the framework has no arguments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Number of attacks
    #[inline]
    #[must_use]
    pub fn attack_count(&self) -> usize {
        self.attacks.len()
    }

    /// Arguments in input order
    pub fn arguments(&self) -> impl ExactSizeIterator<Item = &Argument> + '_ {
        self.arguments.values()
    }

    /// Attacks in input order
    pub fn attacks(&self) -> impl ExactSizeIterator<Item = &Attack> + '_ {
        self.attacks.values()
    }

    /// Argument ids in input order
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &ArgumentId> + '_ {
        self.arguments.keys()
    }

    /// Whether an argument exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.arguments.contains_key(id)
    }

    /// Look up an argument
    ///
    /// # Errors
    /// [`StoreError::ArgumentNotFound`] for unknown ids.
    pub fn argument(&self, id: &str) -> StoreResult<&Argument> {
        self.arguments
            .get(id)
            .ok_or_else(|| StoreError::ArgumentNotFound(id.into()))
    }

    /// Look up an attack
    #[must_use]
    pub fn attack(&self, id: &str) -> Option<&Attack> {
        self.attacks.get(id)
    }

    /// Position of an argument in input order
    #[inline]
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.arguments.get_index_of(id)
    }

    /// Argument id at a position
    #[inline]
    #[must_use]
    pub fn id_at(&self, index: usize) -> Option<&ArgumentId> {
        self.arguments.get_index(index).map(|(id, _)| id)
    }

    /// Resolve ids to positions
    ///
    /// # Errors
    /// [`StoreError::ArgumentNotFound`] for the first unknown id.
    pub fn indices_of<'a, I>(&self, ids: I) -> StoreResult<Vec<usize>>
    where
        I: IntoIterator<Item = &'a ArgumentId>,
    {
        ids.into_iter()
            .map(|id| {
                self.index_of(id.as_str())
                    .ok_or_else(|| StoreError::ArgumentNotFound(id.clone()))
            })
            .collect()
    }

    /// All attacks whose target is `id`, in input order
    ///
    /// # Errors
    /// [`StoreError::ArgumentNotFound`] for unknown ids.
    pub fn attackers_of(&self, id: &str) -> StoreResult<Vec<&Attack>> {
        let index = self.require_index(id)?;
        Ok(self.edges(index, Direction::Incoming))
    }

    /// All attacks whose attacker is `id`, in input order
    ///
    /// # Errors
    /// [`StoreError::ArgumentNotFound`] for unknown ids.
    pub fn attacks_from(&self, id: &str) -> StoreResult<Vec<&Attack>> {
        let index = self.require_index(id)?;
        Ok(self.edges(index, Direction::Outgoing))
    }

    /// Positions of the arguments attacking position `index`
    pub fn attacker_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(index), Direction::Incoming)
            .map(NodeIndex::index)
    }

    /// Positions of the arguments attacked by position `index`
    pub fn target_indices(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(index), Direction::Outgoing)
            .map(NodeIndex::index)
    }

    /// Whether position `from` attacks position `to`
    #[inline]
    #[must_use]
    pub fn attacks_between(&self, from: usize, to: usize) -> bool {
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .is_some()
    }

    /// Whether position `index` attacks itself
    #[inline]
    #[must_use]
    pub fn is_self_attacking(&self, index: usize) -> bool {
        self.attacks_between(index, index)
    }

    /// Minimal durable representation (arguments, attacks, claims)
    #[must_use]
    pub fn to_spec(&self) -> FrameworkSpec {
        FrameworkSpec {
            title: self.title.clone(),
            arguments: self.arguments.values().cloned().collect(),
            attacks: self.attacks.values().cloned().collect(),
            claims: self.claims.clone(),
        }
    }

    fn require_index(&self, id: &str) -> StoreResult<usize> {
        self.index_of(id)
            .ok_or_else(|| StoreError::ArgumentNotFound(id.into()))
    }

    fn edges(&self, index: usize, direction: Direction) -> Vec<&Attack> {
        let mut positions: Vec<usize> = self
            .graph
            .edges_directed(NodeIndex::new(index), direction)
            .map(|edge| *edge.weight())
            .collect();
        positions.sort_unstable();
        positions
            .into_iter()
            .filter_map(|position| self.attacks.get_index(position).map(|(_, attack)| attack))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialectic_model::AttackType;
    use pretty_assertions::assert_eq;

    fn collapse_fragment() -> Framework {
        let spec = FrameworkSpec::new("collapse")
            .argument(Argument::new("A1", "everett", "no collapse"))
            .argument(Argument::new("A2", "penrose", "objective reduction"))
            .argument(Argument::new("A3", "everett", "parsimony"))
            .attack(Attack::new("att4", "A1", "A2", AttackType::Rebut))
            .attack(Attack::new("att5", "A2", "A1", AttackType::Rebut))
            .attack(Attack::new("att6", "A2", "A3", AttackType::Undercut));
        Framework::load(spec).unwrap()
    }

    #[test]
    fn neighbourhoods_follow_input_order() {
        let fw = collapse_fragment();

        let from_a2: Vec<_> = fw
            .attacks_from("A2")
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(from_a2, ["att5", "att6"]);

        let on_a1: Vec<_> = fw.attackers_of("A1").unwrap().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(on_a1, ["att5"]);

        assert!(fw.attackers_of("A3").unwrap().len() == 1);
    }

    #[test]
    fn unknown_argument_is_not_found() {
        let fw = collapse_fragment();
        assert_eq!(
            fw.attackers_of("Z").unwrap_err(),
            StoreError::ArgumentNotFound("Z".into())
        );
        assert!(fw.argument("Z").unwrap_err().is_not_found());
    }

    #[test]
    fn index_accessors_agree() {
        let fw = collapse_fragment();
        let a2 = fw.index_of("A2").unwrap();
        assert_eq!(fw.id_at(a2).map(ArgumentId::as_str), Some("A2"));

        let mut attackers: Vec<_> = fw.attacker_indices(a2).collect();
        attackers.sort_unstable();
        assert_eq!(attackers, vec![fw.index_of("A1").unwrap()]);

        let mut targets: Vec<_> = fw.target_indices(a2).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec![0, 2]);

        assert!(fw.attacks_between(0, 1));
        assert!(!fw.attacks_between(2, 0));
        assert!(!fw.is_self_attacking(0));
    }

    #[test]
    fn spec_roundtrip_keeps_fingerprint() {
        let fw = collapse_fragment();
        let again = Framework::load(fw.to_spec()).unwrap();
        assert_eq!(again.fingerprint(), fw.fingerprint());
        assert_eq!(again.len(), 3);
        assert_eq!(again.attack_count(), 3);
    }

    #[test]
    fn self_attack_is_kept() {
        let spec = FrameworkSpec::new("liar")
            .argument(Argument::new("L", "x", "this argument is defeated"))
            .attack(Attack::new("s", "L", "L", AttackType::Rebut));
        let fw = Framework::load(spec).unwrap();
        assert!(fw.is_self_attacking(0));
        assert_eq!(fw.attackers_of("L").unwrap().len(), 1);
    }

    #[test]
    fn empty_framework_is_valid() {
        let fw = Framework::load(FrameworkSpec::new("nothing")).unwrap();
        assert!(fw.is_empty());
        assert_eq!(fw.ids().count(), 0);
    }
}
