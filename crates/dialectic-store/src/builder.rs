//! Framework builder
//!
//! The construction phase for frameworks: collect arguments and attacks,
//! then [`FrameworkBuilder::build`] validates everything at once and produces
//! an immutable [`Framework`].
//!
//! Usage:
//! ```rust
//! use dialectic_model::{Argument, Attack, AttackType};
//! use dialectic_store::FrameworkBuilder;
//!
//! let mut builder = FrameworkBuilder::new("constructivism");
//! builder
//!     .add_argument(Argument::new("B1", "goedel", "Platonism"))
//!     .add_argument(Argument::new("B2", "bishop", "Constructivism"))
//!     .add_attack(Attack::new("att-b1", "B2", "B1", AttackType::Undermine));
//! let framework = builder.build().unwrap();
//! assert_eq!(framework.attack_count(), 1);
//! ```

use crate::error::ValidationError;
use crate::framework::Framework;
use dialectic_model::{
    Argument, ArgumentId, Attack, AttackId, AttackType, Claims, Fingerprint, FrameworkSpec,
};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Builder for validated frameworks
#[derive(Debug, Clone, Default)]
pub struct FrameworkBuilder {
    title: String,
    arguments: Vec<Argument>,
    attacks: Vec<Attack>,
    claims: Claims,
}

impl FrameworkBuilder {
    /// Start an empty framework
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Start from a framework literal
    #[must_use]
    pub fn from_spec(spec: FrameworkSpec) -> Self {
        Self {
            title: spec.title,
            arguments: spec.arguments,
            attacks: spec.attacks,
            claims: spec.claims,
        }
    }

    /// Add an argument
    pub fn add_argument(&mut self, argument: Argument) -> &mut Self {
        self.arguments.push(argument);
        self
    }

    /// Add an attack
    pub fn add_attack(&mut self, attack: Attack) -> &mut Self {
        self.attacks.push(attack);
        self
    }

    /// Attach authored claims
    pub fn set_claims(&mut self, claims: Claims) -> &mut Self {
        self.claims = claims;
        self
    }

    /// Number of arguments added so far
    #[inline]
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Number of attacks added so far
    #[inline]
    #[must_use]
    pub fn attack_count(&self) -> usize {
        self.attacks.len()
    }

    /// Validate and freeze
    ///
    /// Checks, in order:
    /// - argument ids are unique
    /// - attack ids are unique
    /// - every attacker and target names an argument
    /// - a target premise is only given on undermines and is in range
    ///
    /// # Errors
    /// The first violation, in input order.
    pub fn build(self) -> Result<Framework, ValidationError> {
        let fingerprint = Fingerprint::of(&self.arguments, &self.attacks);

        let mut arguments: IndexMap<ArgumentId, Argument> =
            IndexMap::with_capacity(self.arguments.len());
        for argument in self.arguments {
            match arguments.entry(argument.id.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ValidationError::DuplicateArgument(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(argument);
                }
            }
        }

        let mut attacks: IndexMap<AttackId, Attack> = IndexMap::with_capacity(self.attacks.len());
        for attack in self.attacks {
            match attacks.entry(attack.id.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ValidationError::DuplicateAttack(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(attack);
                }
            }
        }

        for attack in attacks.values() {
            validate_attack(attack, &arguments)?;
        }

        tracing::debug!(
            title = %self.title,
            arguments = arguments.len(),
            attacks = attacks.len(),
            fingerprint = %fingerprint.short(),
            "framework validated"
        );

        Ok(Framework::from_parts(
            self.title,
            arguments,
            attacks,
            self.claims,
            fingerprint,
        ))
    }
}

fn validate_attack(
    attack: &Attack,
    arguments: &IndexMap<ArgumentId, Argument>,
) -> Result<(), ValidationError> {
    if !arguments.contains_key(&attack.attacker_id) {
        return Err(ValidationError::UnknownAttacker {
            attack: attack.id.clone(),
            argument: attack.attacker_id.clone(),
        });
    }

    let Some(target) = arguments.get(&attack.target_id) else {
        return Err(ValidationError::UnknownTarget {
            attack: attack.id.clone(),
            argument: attack.target_id.clone(),
        });
    };

    if let Some(index) = attack.target_premise {
        if attack.attack_type != AttackType::Undermine {
            return Err(ValidationError::PremiseOnNonUndermine {
                attack: attack.id.clone(),
                attack_type: attack.attack_type,
            });
        }
        if index >= target.premises.len() {
            return Err(ValidationError::PremiseOutOfRange {
                attack: attack.id.clone(),
                target: target.id.clone(),
                index,
                premise_count: target.premises.len(),
            });
        }
    }

    Ok(())
}
