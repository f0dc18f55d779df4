//! Arguments
//!
//! An [`Argument`] is a claim backed by ordered premises and a conclusion,
//! attributed to the agent that put it forward. It carries no acceptability
//! status: whether an argument stands is derived from the attack graph.

use crate::ids::{AgentId, ArgumentId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the inference from premises to conclusion is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// Logically necessary, treated as non-defeasible by its proponent
    Strict,

    /// Presumptive, open to rebuttal
    #[default]
    Defeasible,
}

impl Strength {
    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Defeasible => "defeasible",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    /// Unique id within the framework
    pub id: ArgumentId,
    /// Proponent
    pub agent_id: AgentId,
    /// Short claim label
    pub claim: String,
    /// Ordered premise statements
    #[serde(default)]
    pub premises: Vec<String>,
    /// Conclusion statement
    #[serde(default)]
    pub conclusion: String,
    /// Strict or defeasible inference
    #[serde(default)]
    pub strength: Strength,
}

impl Argument {
    /// Create a defeasible argument with no premises
    #[must_use]
    pub fn new(
        id: impl Into<ArgumentId>,
        agent_id: impl Into<AgentId>,
        claim: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            agent_id: agent_id.into(),
            claim: claim.into(),
            premises: Vec::new(),
            conclusion: String::new(),
            strength: Strength::Defeasible,
        }
    }

    /// Append a premise
    #[must_use]
    pub fn with_premise(mut self, premise: impl Into<String>) -> Self {
        self.premises.push(premise.into());
        self
    }

    /// Set the conclusion
    #[must_use]
    pub fn with_conclusion(mut self, conclusion: impl Into<String>) -> Self {
        self.conclusion = conclusion.into();
        self
    }

    /// Set the strength
    #[must_use]
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self
    }

    /// Whether the inference is strict
    #[inline]
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strength == Strength::Strict
    }
}
