//! Preferred semantics
//!
//! Preferred extensions are the maximal admissible sets. Every one of them
//! contains the grounded extension and therefore excludes everything the
//! grounded extension attacks, so the search only has to decide the
//! grounded-undecided arguments:
//!
//! 1. seed with the grounded extension
//! 2. walk the undecided arguments, branching include-first while the set
//!    stays conflict-free
//! 3. at each leaf keep the set if it is admissible
//! 4. drop every candidate strictly contained in another
//!
//! The walk is exponential in the number of undecided arguments. A
//! [`SearchBudget`] caps it; an exhausted budget yields the maximal sets
//! found so far with `complete = false`.

use crate::config::SearchBudget;
use crate::extension::Extension;
use crate::grounded::{compute_grounded, GroundedLabelling};
use crate::members::Members;
use crate::predicates;
use dialectic_model::{ArgumentId, Label};
use dialectic_store::Framework;
use serde::Serialize;
use std::time::Instant;

/// How often the wall clock is consulted
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Preferred extensions of a framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferredOutcome {
    extensions: Vec<Extension>,
    complete: bool,
    steps: u64,
}

impl PreferredOutcome {
    /// Maximal admissible sets, in discovery order
    #[inline]
    #[must_use]
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// The n-th extension (zero-based)
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Extension> {
        self.extensions.get(index)
    }

    /// Number of extensions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether no extension was found (never the case for a finished search)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// False when the search budget ran out before the space was covered
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Search nodes visited
    #[inline]
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Arguments in every preferred extension
    #[must_use]
    pub fn skeptical(&self) -> Vec<ArgumentId> {
        let Some((first, rest)) = self.extensions.split_first() else {
            return Vec::new();
        };
        first
            .iter()
            .filter(|id| rest.iter().all(|ext| ext.contains(id.as_str())))
            .cloned()
            .collect()
    }

    /// Arguments in at least one preferred extension
    #[must_use]
    pub fn credulous(&self) -> Vec<ArgumentId> {
        let mut seen: Vec<ArgumentId> = Vec::new();
        for id in self.extensions.iter().flat_map(Extension::iter) {
            if !seen.contains(id) {
                seen.push(id.clone());
            }
        }
        seen
    }
}

/// Compute the preferred extensions within `budget`
#[must_use]
pub fn compute_preferred(framework: &Framework, budget: &SearchBudget) -> PreferredOutcome {
    let grounded = compute_grounded(framework);
    compute_preferred_from(framework, &grounded, budget)
}

/// Compute the preferred extensions reusing an existing grounded labelling
#[must_use]
pub fn compute_preferred_from(
    framework: &Framework,
    grounded: &GroundedLabelling,
    budget: &SearchBudget,
) -> PreferredOutcome {
    // Self-attackers can never join a conflict-free set
    let open: Vec<usize> = grounded
        .labels()
        .iter()
        .enumerate()
        .filter(|(index, label)| {
            **label == Label::Undecided && !framework.is_self_attacking(*index)
        })
        .map(|(index, _)| index)
        .collect();

    let mut search = Search {
        framework,
        open: &open,
        base_len: grounded.members().len(),
        chosen: grounded.members().clone(),
        candidates: vec![grounded.members().clone()],
        budget,
        started: Instant::now(),
        steps: 0,
        exhausted: false,
    };
    search.run();

    let Search {
        candidates,
        steps,
        exhausted,
        ..
    } = search;
    let maximal = keep_maximal(candidates);

    if exhausted {
        tracing::warn!(
            steps,
            undecided = open.len(),
            found = maximal.len(),
            "preferred search budget exhausted; result is partial"
        );
    } else {
        tracing::debug!(
            steps,
            undecided = open.len(),
            extensions = maximal.len(),
            "preferred search finished"
        );
    }

    PreferredOutcome {
        extensions: maximal
            .iter()
            .map(|set| set.to_extension(framework))
            .collect(),
        complete: !exhausted,
        steps,
    }
}

struct Search<'a> {
    framework: &'a Framework,
    open: &'a [usize],
    base_len: usize,
    chosen: Members,
    candidates: Vec<Members>,
    budget: &'a SearchBudget,
    started: Instant,
    steps: u64,
    exhausted: bool,
}

/// Pending work on the explicit search stack
enum Frame {
    /// Decide `open[depth]`
    Visit(usize),
    /// Drop an included argument again once its branch is done
    Restore(usize),
    /// Explore the branch that leaves `open[depth]` out
    Skip(usize),
}

impl Search<'_> {
    /// Include-first depth-first walk; the stack lives on the heap so the
    /// step budget is the only bound on depth
    fn run(&mut self) {
        let mut stack = vec![Frame::Visit(0)];
        while let Some(frame) = stack.pop() {
            let depth = match frame {
                Frame::Restore(index) => {
                    self.chosen.remove(index);
                    continue;
                }
                Frame::Skip(depth) => {
                    stack.push(Frame::Visit(depth + 1));
                    continue;
                }
                Frame::Visit(depth) => depth,
            };

            if self.over_budget() {
                self.exhausted = true;
                return;
            }
            self.steps += 1;

            let Some(&next) = self.open.get(depth) else {
                // The grounded seed itself is already a candidate
                if self.chosen.len() > self.base_len
                    && predicates::admissible(self.framework, &self.chosen)
                {
                    self.candidates.push(self.chosen.clone());
                }
                continue;
            };

            stack.push(Frame::Skip(depth));
            if self.compatible(next) {
                self.chosen.insert(next);
                stack.push(Frame::Restore(next));
                stack.push(Frame::Visit(depth + 1));
            }
        }
    }

    fn compatible(&self, candidate: usize) -> bool {
        self.framework
            .target_indices(candidate)
            .all(|target| !self.chosen.contains(target))
            && self
                .framework
                .attacker_indices(candidate)
                .all(|attacker| !self.chosen.contains(attacker))
    }

    fn over_budget(&self) -> bool {
        if let Some(max_steps) = self.budget.max_steps {
            if self.steps >= max_steps {
                return true;
            }
        }
        if let Some(limit) = self.budget.max_duration() {
            if self.steps % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() >= limit {
                return true;
            }
        }
        false
    }
}

fn keep_maximal(candidates: Vec<Members>) -> Vec<Members> {
    let mut kept: Vec<Members> = Vec::with_capacity(candidates.len());
    for (position, candidate) in candidates.iter().enumerate() {
        let dominated = candidates
            .iter()
            .any(|other| other.len() > candidate.len() && candidate.is_subset(other));
        if !dominated && !candidates[..position].contains(candidate) {
            kept.push(candidate.clone());
        }
    }
    kept
}
