//! Audit of authored claims against computed semantics
//!
//! Framework files may carry hand-written statuses and extensions. They
//! are never fed into the computation; this module only reports where they
//! disagree with it. Extensions are compared as sets, so authored order
//! does not matter.

use crate::extension::Extension;
use crate::grounded::GroundedLabelling;
use crate::preferred::PreferredOutcome;
use dialectic_model::{ArgumentId, Label};
use dialectic_store::Framework;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// One disagreement between the authored claims and the computed results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Claims mention an argument the framework does not contain
    UnknownArgument {
        /// The absent id
        argument: ArgumentId,
    },
    /// Authored status differs from the grounded label
    Status {
        /// Argument concerned
        argument: ArgumentId,
        /// Authored label
        claimed: Label,
        /// Grounded label
        computed: Label,
    },
    /// Authored grounded extension differs from the computed one
    Grounded {
        /// Authored set
        claimed: Extension,
        /// Computed set
        computed: Extension,
    },
    /// Authored preferred extensions differ from the computed ones
    Preferred {
        /// Authored sets with no computed counterpart
        missing: Vec<Extension>,
        /// Computed sets nobody authored
        unexpected: Vec<Extension>,
    },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument { argument } => {
                write!(f, "claims mention unknown argument '{argument}'")
            }
            Self::Status {
                argument,
                claimed,
                computed,
            } => write!(f, "{argument}: claimed {claimed}, computed {computed}"),
            Self::Grounded { claimed, computed } => {
                write!(f, "grounded: claimed {claimed}, computed {computed}")
            }
            Self::Preferred {
                missing,
                unexpected,
            } => {
                f.write_str("preferred:")?;
                if !missing.is_empty() {
                    write!(f, " missing {}", join(missing))?;
                }
                if !unexpected.is_empty() {
                    write!(f, " unexpected {}", join(unexpected))?;
                }
                Ok(())
            }
        }
    }
}

fn join(extensions: &[Extension]) -> String {
    extensions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn as_set(ids: &[ArgumentId]) -> BTreeSet<&ArgumentId> {
    ids.iter().collect()
}

/// Compare the framework's claims with its computed semantics
///
/// Preferred claims are only checked against a complete search; a search
/// cut short by its budget cannot prove an authored set missing.
#[must_use]
pub fn audit(
    framework: &Framework,
    grounded: &GroundedLabelling,
    preferred: &PreferredOutcome,
) -> Vec<Discrepancy> {
    let claims = framework.claims();
    let mut found = Vec::new();

    let mut unknown: BTreeSet<&ArgumentId> = BTreeSet::new();
    let mentioned = claims
        .status
        .keys()
        .chain(claims.grounded.iter().flatten())
        .chain(claims.preferred.iter().flatten().flatten());
    for id in mentioned {
        if !framework.contains(id.as_str()) && unknown.insert(id) {
            found.push(Discrepancy::UnknownArgument {
                argument: id.clone(),
            });
        }
    }

    // Framework order, not claim order
    for (index, id) in framework.ids().enumerate() {
        let (Some(claimed), Some(computed)) = (claims.status.get(id), grounded.label_at(index))
        else {
            continue;
        };
        if *claimed != computed {
            found.push(Discrepancy::Status {
                argument: id.clone(),
                claimed: *claimed,
                computed,
            });
        }
    }

    if let Some(claimed) = &claims.grounded {
        if as_set(claimed) != as_set(grounded.in_set().ids()) {
            found.push(Discrepancy::Grounded {
                claimed: Extension::new(claimed.clone()),
                computed: grounded.in_set().clone(),
            });
        }
    }

    if let Some(claimed) = &claims.preferred {
        if preferred.is_complete() {
            let computed: Vec<BTreeSet<&ArgumentId>> = preferred
                .extensions()
                .iter()
                .map(|ext| as_set(ext.ids()))
                .collect();
            let authored: Vec<BTreeSet<&ArgumentId>> =
                claimed.iter().map(|ext| as_set(ext)).collect();

            let missing: Vec<Extension> = claimed
                .iter()
                .zip(&authored)
                .filter(|(_, set)| !computed.contains(set))
                .map(|(ids, _)| Extension::new(ids.clone()))
                .collect();
            let unexpected: Vec<Extension> = preferred
                .extensions()
                .iter()
                .zip(&computed)
                .filter(|(_, set)| !authored.contains(set))
                .map(|(ext, _)| ext.clone())
                .collect();

            if !missing.is_empty() || !unexpected.is_empty() {
                found.push(Discrepancy::Preferred {
                    missing,
                    unexpected,
                });
            }
        } else {
            tracing::debug!("preferred claims not audited: search incomplete");
        }
    }

    found
}
