//! Error types for the argumentation store
//!
//! Two families:
//! - [`ValidationError`]: a framework literal is malformed and is rejected
//!   wholesale at load time
//! - [`StoreError`]: lookups of unknown frameworks or arguments, plus
//!   validation failures tagged with the framework key

use dialectic_model::{ArgumentId, AttackId, AttackType, FrameworkKey};

/// Reasons a framework literal is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two arguments share an id
    #[error("duplicate argument id: '{0}'")]
    DuplicateArgument(ArgumentId),

    /// Two attacks share an id
    #[error("duplicate attack id: '{0}'")]
    DuplicateAttack(AttackId),

    /// Attack source is not an argument of the framework
    #[error("attack '{attack}' has unknown attacker '{argument}'")]
    UnknownAttacker {
        /// Offending attack
        attack: AttackId,
        /// Missing argument id
        argument: ArgumentId,
    },

    /// Attack target is not an argument of the framework
    #[error("attack '{attack}' has unknown target '{argument}'")]
    UnknownTarget {
        /// Offending attack
        attack: AttackId,
        /// Missing argument id
        argument: ArgumentId,
    },

    /// Undermine points past the target's premises
    #[error(
        "attack '{attack}' undermines premise {index} of '{target}', \
         which has {premise_count} premises"
    )]
    PremiseOutOfRange {
        /// Offending attack
        attack: AttackId,
        /// Attacked argument
        target: ArgumentId,
        /// Requested premise index
        index: usize,
        /// Premises the target actually has
        premise_count: usize,
    },

    /// Only undermines aim at a premise
    #[error("attack '{attack}' is a {attack_type} but names a target premise")]
    PremiseOnNonUndermine {
        /// Offending attack
        attack: AttackId,
        /// Its declared type
        attack_type: AttackType,
    },
}

/// Store lookup and load errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No framework registered under this key
    #[error("framework not found: '{0}'")]
    FrameworkNotFound(FrameworkKey),

    /// No argument with this id in the framework
    #[error("argument not found: '{0}'")]
    ArgumentNotFound(ArgumentId),

    /// Framework literal rejected
    #[error("framework '{key}' rejected: {source}")]
    Validation {
        /// Key the framework was loaded under
        key: FrameworkKey,
        /// First violation found
        #[source]
        source: ValidationError,
    },
}

impl StoreError {
    /// Whether the caller asked for something that does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FrameworkNotFound(_) | Self::ArgumentNotFound(_))
    }

    /// Tag a validation error with its framework key
    #[inline]
    pub fn validation(key: impl Into<FrameworkKey>, source: ValidationError) -> Self {
        Self::Validation {
            key: key.into(),
            source,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::UnknownTarget {
            attack: AttackId::from("att9"),
            argument: ArgumentId::from("Z"),
        };
        assert_eq!(err.to_string(), "attack 'att9' has unknown target 'Z'");
    }

    #[test]
    fn store_error_wraps_validation_with_key() {
        let err = StoreError::validation("debate", ValidationError::DuplicateArgument("A".into()));
        assert_eq!(
            err.to_string(),
            "framework 'debate' rejected: duplicate argument id: 'A'"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_classification() {
        assert!(StoreError::FrameworkNotFound("x".into()).is_not_found());
        assert!(StoreError::ArgumentNotFound("A".into()).is_not_found());
    }
}
