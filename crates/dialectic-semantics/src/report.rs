//! Serializable analysis reports

use crate::extension::Extension;
use crate::grounded::GroundedLabelling;
use crate::preferred::PreferredOutcome;
use crate::status::{acceptance_of, Acceptance};
use dialectic_model::{AgentId, ArgumentId, Fingerprint, FrameworkKey, Label};
use dialectic_store::Framework;
use serde::Serialize;
use std::fmt::Write as _;

/// One argument's line in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentRow {
    /// Argument id
    pub id: ArgumentId,
    /// Proponent
    pub agent: AgentId,
    /// Claim text
    pub claim: String,
    /// Grounded label
    pub grounded: Label,
    /// Standing across preferred extensions
    pub acceptance: Acceptance,
    /// Ids of arguments attacking this one, in attack order
    pub attackers: Vec<ArgumentId>,
}

/// Complete analysis of one framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkReport {
    /// Registry key
    pub key: FrameworkKey,
    /// Debate title
    pub title: String,
    /// Content fingerprint of the analysed snapshot
    pub fingerprint: Fingerprint,
    /// Snapshot version
    pub version: u64,
    /// Per-argument rows in framework order
    pub arguments: Vec<ArgumentRow>,
    /// Grounded partition
    pub grounded: GroundedLabelling,
    /// Preferred extensions
    pub preferred: Vec<Extension>,
    /// False when the preferred search hit its budget
    pub complete: bool,
}

impl FrameworkReport {
    /// Assemble a report from computed results
    #[must_use]
    pub fn new(
        key: FrameworkKey,
        version: u64,
        framework: &Framework,
        grounded: &GroundedLabelling,
        preferred: &PreferredOutcome,
    ) -> Self {
        let arguments = framework
            .arguments()
            .zip(grounded.labels())
            .map(|(argument, label)| ArgumentRow {
                id: argument.id.clone(),
                agent: argument.agent_id.clone(),
                claim: argument.claim.clone(),
                grounded: *label,
                acceptance: acceptance_of(preferred, argument.id.as_str()),
                attackers: framework
                    .attackers_of(argument.id.as_str())
                    .map(|attacks| attacks.iter().map(|a| a.attacker_id.clone()).collect())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            key,
            title: framework.title().to_owned(),
            fingerprint: framework.fingerprint(),
            version,
            arguments,
            grounded: grounded.clone(),
            preferred: preferred.extensions().to_vec(),
            complete: preferred.is_complete(),
        }
    }

    /// Plain-text rendering for terminals
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} ({})", self.title, self.key);
        let _ = writeln!(
            out,
            "  fingerprint {}  version {}",
            self.fingerprint.short(),
            self.version
        );
        let _ = writeln!(out);

        let id_width = self
            .arguments
            .iter()
            .map(|row| row.id.as_str().len())
            .max()
            .unwrap_or(2)
            .max(2);
        for row in &self.arguments {
            let _ = write!(
                out,
                "  {:<id_width$}  {:<9}  {:<9}  {}",
                row.id.as_str(),
                row.grounded.as_str(),
                row.acceptance.as_str(),
                row.claim,
            );
            if !row.attackers.is_empty() {
                let attackers: Vec<&str> = row.attackers.iter().map(ArgumentId::as_str).collect();
                let _ = write!(out, "  <- {}", attackers.join(", "));
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "  grounded   {}", self.grounded.in_set());
        let _ = writeln!(out, "  out        {}", Extension::new(self.grounded.out_set().to_vec()));
        let _ = writeln!(
            out,
            "  undecided  {}",
            Extension::new(self.grounded.undecided_set().to_vec())
        );
        for (index, extension) in self.preferred.iter().enumerate() {
            let _ = writeln!(out, "  preferred-{:<2} {}", index + 1, extension);
        }
        if !self.complete {
            let _ = writeln!(out, "  (preferred search incomplete: budget exhausted)");
        }
        out
    }
}
