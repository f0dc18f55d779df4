//! Framework literals
//!
//! A [`FrameworkSpec`] is the raw, unvalidated definition of one debate: a
//! title plus ordered collections of arguments and attacks. Validation and
//! indexing happen when a `FrameworkSpec` is loaded into the store.

use crate::argument::Argument;
use crate::attack::Attack;
use crate::ids::{ArgumentId, FrameworkKey};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named frameworks, as read from a catalog file
pub type Catalog = BTreeMap<FrameworkKey, FrameworkSpec>;

/// Unvalidated framework definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkSpec {
    /// Debate topic
    pub title: String,
    /// Arguments in presentation order
    #[serde(default)]
    pub arguments: Vec<Argument>,
    /// Attacks in presentation order
    #[serde(default)]
    pub attacks: Vec<Attack>,
    /// Hand-authored expectations, checked by an audit but never trusted
    #[serde(default, skip_serializing_if = "Claims::is_empty")]
    pub claims: Claims,
}

impl FrameworkSpec {
    /// Empty framework with a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append an argument
    #[must_use]
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Append an attack
    #[must_use]
    pub fn attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    /// Attach authored claims
    #[must_use]
    pub fn with_claims(mut self, claims: Claims) -> Self {
        self.claims = claims;
        self
    }
}

/// Authored statuses and extensions accompanying a framework
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Per-argument status as written by the author
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub status: BTreeMap<ArgumentId, Label>,
    /// Authored grounded extension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounded: Option<Vec<ArgumentId>>,
    /// Authored preferred extensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<Vec<Vec<ArgumentId>>>,
}

impl Claims {
    /// Whether nothing was claimed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty() && self.grounded.is_none() && self.preferred.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::AttackType;

    #[test]
    fn builder_preserves_order() {
        let spec = FrameworkSpec::new("t")
            .argument(Argument::new("B", "x", "b"))
            .argument(Argument::new("A", "x", "a"))
            .attack(Attack::new("k", "A", "B", AttackType::Rebut));

        let ids: Vec<_> = spec.arguments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert!(spec.claims.is_empty());
    }

    #[test]
    fn catalog_from_yaml() {
        let yaml = r#"
constructivism-debate:
  title: "Mathematical Existence"
  arguments:
    - { id: B1, agentId: goedel, claim: "Platonism" }
    - { id: B2, agentId: bishop, claim: "Constructivism" }
  attacks:
    - { id: att-b1, attackerId: B2, targetId: B1, type: undermine, reason: "circular" }
  claims:
    status: { B1: defeated, B2: undefeated }
    grounded: [B2]
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        let spec = &catalog[&FrameworkKey::from("constructivism-debate")];
        assert_eq!(spec.arguments.len(), 2);
        assert_eq!(spec.attacks[0].attack_type, AttackType::Undermine);
        assert_eq!(spec.claims.status[&ArgumentId::from("B1")], Label::Out);
        assert_eq!(spec.claims.grounded.as_deref(), Some(&[ArgumentId::from("B2")][..]));
        assert!(spec.claims.preferred.is_none());
    }

    #[test]
    fn empty_claims_are_not_serialized() {
        let json = serde_json::to_value(FrameworkSpec::new("t")).unwrap();
        assert!(json.get("claims").is_none());
    }
}
