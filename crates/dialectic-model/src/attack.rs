//! Attacks between arguments

use crate::ids::{ArgumentId, AttackId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What part of the target an attack aims at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    /// Contradicts the target's conclusion
    Rebut,
    /// Denies the inference from premises to conclusion
    Undercut,
    /// Contests one of the target's premises
    Undermine,
}

impl AttackType {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rebut => "rebut",
            Self::Undercut => "undercut",
            Self::Undermine => "undermine",
        }
    }
}

impl fmt::Display for AttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed conflict from one argument onto another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    /// Unique id within the framework
    pub id: AttackId,
    /// Attacking argument
    pub attacker_id: ArgumentId,
    /// Attacked argument
    pub target_id: ArgumentId,
    /// Rebut, undercut or undermine
    #[serde(rename = "type")]
    pub attack_type: AttackType,
    /// Human-readable justification
    #[serde(default)]
    pub reason: String,
    /// Zero-based premise of the target contested by an undermine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_premise: Option<usize>,
}

impl Attack {
    /// Create an attack with an empty reason
    #[must_use]
    pub fn new(
        id: impl Into<AttackId>,
        attacker_id: impl Into<ArgumentId>,
        target_id: impl Into<ArgumentId>,
        attack_type: AttackType,
    ) -> Self {
        Self {
            id: id.into(),
            attacker_id: attacker_id.into(),
            target_id: target_id.into(),
            attack_type,
            reason: String::new(),
            target_premise: None,
        }
    }

    /// Set the justification
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Point an undermine at a specific premise
    #[must_use]
    pub fn on_premise(mut self, index: usize) -> Self {
        self.target_premise = Some(index);
        self
    }

    /// Whether attacker and target coincide
    #[inline]
    #[must_use]
    pub fn is_self_attack(&self) -> bool {
        self.attacker_id == self.target_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_is_renamed() {
        let attack = Attack::new("att1", "A4", "A3", AttackType::Rebut).with_reason("Born rule");
        let json = serde_json::to_value(&attack).unwrap();
        assert_eq!(json["type"], "rebut");
        assert_eq!(json["attackerId"], "A4");
        assert!(json.get("targetPremise").is_none());
    }

    #[test]
    fn premise_index_roundtrips_through_yaml() {
        let yaml = "id: u1\nattackerId: A6\ntargetId: A5\n\
                    type: undermine\nreason: r\ntargetPremise: 2\n";
        let attack: Attack = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(attack.attack_type, AttackType::Undermine);
        assert_eq!(attack.target_premise, Some(2));
    }

    #[test]
    fn self_attack_detection() {
        assert!(Attack::new("s", "X", "X", AttackType::Undercut).is_self_attack());
        assert!(!Attack::new("s", "X", "Y", AttackType::Undercut).is_self_attack());
    }
}
