//! Index-level argument sets
//!
//! The engine works on argument positions rather than ids. A [`Members`]
//! value is a membership vector over one framework's positions.

use crate::extension::Extension;
use dialectic_store::Framework;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Members {
    bits: Vec<bool>,
    count: usize,
}

impl Members {
    pub(crate) fn empty(len: usize) -> Self {
        Self {
            bits: vec![false; len],
            count: 0,
        }
    }

    pub(crate) fn from_fn(len: usize, mut predicate: impl FnMut(usize) -> bool) -> Self {
        let bits: Vec<bool> = (0..len).map(&mut predicate).collect();
        let count = bits.iter().filter(|b| **b).count();
        Self { bits, count }
    }

    pub(crate) fn from_indices(len: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut members = Self::empty(len);
        for index in indices {
            members.insert(index);
        }
        members
    }

    #[inline]
    pub(crate) fn contains(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn insert(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            if !*bit {
                *bit = true;
                self.count += 1;
            }
        }
    }

    pub(crate) fn remove(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            if *bit {
                *bit = false;
                self.count -= 1;
            }
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(index, bit)| bit.then_some(index))
    }

    /// Every member of `self` is a member of `other`
    pub(crate) fn is_subset(&self, other: &Self) -> bool {
        self.indices().all(|index| other.contains(index))
    }

    /// Positions attacked by at least one member
    pub(crate) fn attacked_by(&self, framework: &Framework) -> Self {
        let mut attacked = Self::empty(self.bits.len());
        for index in self.indices() {
            for target in framework.target_indices(index) {
                attacked.insert(target);
            }
        }
        attacked
    }

    pub(crate) fn to_extension(&self, framework: &Framework) -> Extension {
        Extension::new(
            self.indices()
                .filter_map(|index| framework.id_at(index).cloned())
                .collect(),
        )
    }
}
