//! Query facade over the registry and the semantics engine
//!
//! [`Dialectic`] is what a rendering layer talks to. Every query resolves
//! the current snapshot of a framework once and answers entirely from it,
//! so a concurrent reload can never mix two versions in one answer.

use crate::audit::{audit, Discrepancy};
use crate::cache::{CacheStats, ExtensionCache};
use crate::config::EngineConfig;
use crate::error::{DialecticError, DialecticResult};
use crate::extension::{Extension, ExtensionSelection};
use crate::grounded::{compute_grounded, GroundedLabelling};
use crate::preferred::{compute_preferred_from, PreferredOutcome};
use crate::report::FrameworkReport;
use crate::status::{acceptance_of, status_of, Acceptance};
use dialectic_model::{Attack, Catalog, FrameworkKey, FrameworkSpec, Label};
use dialectic_store::{Framework, FrameworkRegistry, Publication, Snapshot, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Argumentation engine: named frameworks plus memoized semantics
#[derive(Debug)]
pub struct Dialectic {
    registry: FrameworkRegistry,
    cache: ExtensionCache,
    config: EngineConfig,
}

impl Dialectic {
    /// Create an engine with `config`
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let cache = match config.cache_ttl_secs {
            Some(secs) => {
                ExtensionCache::with_ttl(config.cache_capacity, Duration::from_secs(secs))
            }
            None => ExtensionCache::new(config.cache_capacity),
        };
        Self {
            registry: FrameworkRegistry::new(),
            cache,
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and publish one framework, replacing any previous version
    ///
    /// # Errors
    /// [`StoreError::Validation`] when the literal is rejected.
    #[instrument(skip_all, fields(key = %key))]
    pub fn load_framework(
        &self,
        key: FrameworkKey,
        spec: FrameworkSpec,
    ) -> DialecticResult<Arc<Snapshot>> {
        let publication = self.registry.load(key, spec)?;
        Ok(self.retire(publication))
    }

    /// Validate and publish a whole catalog; nothing is published on failure
    ///
    /// # Errors
    /// [`StoreError::Validation`] for the first rejected entry.
    #[instrument(skip_all, fields(frameworks = catalog.len()))]
    pub fn load_catalog(&self, catalog: Catalog) -> DialecticResult<Vec<Arc<Snapshot>>> {
        let publications = self.registry.load_catalog(catalog)?;
        Ok(publications
            .into_iter()
            .map(|publication| self.retire(publication))
            .collect())
    }

    fn retire(&self, publication: Publication) -> Arc<Snapshot> {
        if let Some(previous) = &publication.previous {
            self.cache.invalidate(previous.key(), previous.version());
        }
        publication.current
    }

    /// Unregister a framework; returns whether it existed
    #[instrument(skip_all, fields(key = %key))]
    pub fn remove(&self, key: &FrameworkKey) -> bool {
        match self.registry.remove(key) {
            Some(snapshot) => {
                self.cache.invalidate(snapshot.key(), snapshot.version());
                true
            }
            None => false,
        }
    }

    /// Registered keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<FrameworkKey> {
        self.registry.keys()
    }

    /// Current snapshot of `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    pub fn snapshot(&self, key: &FrameworkKey) -> DialecticResult<Arc<Snapshot>> {
        Ok(self.registry.snapshot(key)?)
    }

    /// Current framework of `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    pub fn framework(&self, key: &FrameworkKey) -> DialecticResult<Arc<Framework>> {
        Ok(self.registry.framework(key)?)
    }

    /// Attacks targeting `argument`, in input order
    ///
    /// # Errors
    /// Not-found for an unknown key or argument.
    pub fn attacks_on(&self, key: &FrameworkKey, argument: &str) -> DialecticResult<Vec<Attack>> {
        let framework = self.framework(key)?;
        let attacks = framework.attackers_of(argument)?;
        Ok(attacks.into_iter().cloned().collect())
    }

    /// Attacks launched by `argument`, in input order
    ///
    /// # Errors
    /// Not-found for an unknown key or argument.
    pub fn attacks_from(&self, key: &FrameworkKey, argument: &str) -> DialecticResult<Vec<Attack>> {
        let framework = self.framework(key)?;
        let attacks = framework.attacks_from(argument)?;
        Ok(attacks.into_iter().cloned().collect())
    }

    /// Grounded labelling of `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    #[instrument(skip_all, fields(key = %key))]
    pub fn grounded(&self, key: &FrameworkKey) -> DialecticResult<Arc<GroundedLabelling>> {
        let snapshot = self.snapshot(key)?;
        Ok(self.grounded_of(&snapshot))
    }

    /// Preferred extensions of `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    #[instrument(skip_all, fields(key = %key))]
    pub fn preferred(&self, key: &FrameworkKey) -> DialecticResult<Arc<PreferredOutcome>> {
        let snapshot = self.snapshot(key)?;
        Ok(self.preferred_of(&snapshot))
    }

    /// The extension named by `selection`
    ///
    /// # Errors
    /// Not-found for an unknown key, and
    /// [`DialecticError::ExtensionNotFound`] for a preferred index past the end.
    pub fn extension(
        &self,
        key: &FrameworkKey,
        selection: ExtensionSelection,
    ) -> DialecticResult<Extension> {
        let snapshot = self.snapshot(key)?;
        self.selected(&snapshot, selection)
    }

    /// Whether `argument` belongs to the selected extension
    ///
    /// # Errors
    /// Not-found for an unknown key, argument or preferred index.
    pub fn is_member(
        &self,
        key: &FrameworkKey,
        argument: &str,
        selection: ExtensionSelection,
    ) -> DialecticResult<bool> {
        let snapshot = self.snapshot(key)?;
        snapshot.framework().argument(argument)?;
        Ok(self.selected(&snapshot, selection)?.contains(argument))
    }

    /// Status of `argument` under `selection`
    ///
    /// The grounded selection reports the three-valued grounded label; a
    /// preferred selection reports `in` or `out`.
    ///
    /// # Errors
    /// Not-found for an unknown key, argument or preferred index.
    pub fn status_of(
        &self,
        key: &FrameworkKey,
        argument: &str,
        selection: ExtensionSelection,
    ) -> DialecticResult<Label> {
        let snapshot = self.snapshot(key)?;
        let framework = snapshot.framework();
        let index = framework
            .index_of(argument)
            .ok_or_else(|| StoreError::ArgumentNotFound(argument.into()))?;

        match selection {
            ExtensionSelection::Grounded => {
                let grounded = self.grounded_of(&snapshot);
                Ok(grounded.label_at(index).unwrap_or(Label::Undecided))
            }
            ExtensionSelection::Preferred(_) => {
                let extension = self.selected(&snapshot, selection)?;
                Ok(status_of(argument, &extension))
            }
        }
    }

    /// Standing of `argument` across all preferred extensions
    ///
    /// # Errors
    /// Not-found for an unknown key or argument.
    pub fn acceptance(&self, key: &FrameworkKey, argument: &str) -> DialecticResult<Acceptance> {
        let snapshot = self.snapshot(key)?;
        snapshot.framework().argument(argument)?;
        Ok(acceptance_of(&self.preferred_of(&snapshot), argument))
    }

    /// Disagreements between the framework's authored claims and its semantics
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    #[instrument(skip_all, fields(key = %key))]
    pub fn audit(&self, key: &FrameworkKey) -> DialecticResult<Vec<Discrepancy>> {
        let snapshot = self.snapshot(key)?;
        let grounded = self.grounded_of(&snapshot);
        let preferred = self.preferred_of(&snapshot);
        let findings = audit(snapshot.framework(), &grounded, &preferred);
        tracing::debug!(findings = findings.len(), "audit finished");
        Ok(findings)
    }

    /// Full analysis report of `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unknown keys.
    #[instrument(skip_all, fields(key = %key))]
    pub fn report(&self, key: &FrameworkKey) -> DialecticResult<FrameworkReport> {
        let snapshot = self.snapshot(key)?;
        let grounded = self.grounded_of(&snapshot);
        let preferred = self.preferred_of(&snapshot);
        Ok(FrameworkReport::new(
            snapshot.key().clone(),
            snapshot.version(),
            snapshot.framework(),
            &grounded,
            &preferred,
        ))
    }

    /// Cache occupancy
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn grounded_of(&self, snapshot: &Snapshot) -> Arc<GroundedLabelling> {
        let labelling = self
            .cache
            .grounded_with(snapshot.key(), snapshot.version(), || {
                compute_grounded(snapshot.framework())
            });
        self.release_if_retired(snapshot);
        labelling
    }

    fn preferred_of(&self, snapshot: &Snapshot) -> Arc<PreferredOutcome> {
        let grounded = self.grounded_of(snapshot);
        let outcome = self
            .cache
            .preferred_with(snapshot.key(), snapshot.version(), || {
                compute_preferred_from(snapshot.framework(), &grounded, &self.config.search)
            });
        self.release_if_retired(snapshot);
        outcome
    }

    /// A reload may retire `snapshot` between lookup and insert; nothing will
    /// read that slot again, so drop it. Publication happens before
    /// retirement, so either this check or `retire` sees the entry.
    fn release_if_retired(&self, snapshot: &Snapshot) {
        if !self.registry.is_current(snapshot) {
            self.cache.invalidate(snapshot.key(), snapshot.version());
        }
    }

    fn selected(
        &self,
        snapshot: &Snapshot,
        selection: ExtensionSelection,
    ) -> DialecticResult<Extension> {
        match selection {
            ExtensionSelection::Grounded => Ok(self.grounded_of(snapshot).in_set().clone()),
            ExtensionSelection::Preferred(index) => {
                let preferred = self.preferred_of(snapshot);
                preferred
                    .get(index)
                    .cloned()
                    .ok_or(DialecticError::ExtensionNotFound {
                        index,
                        available: preferred.len(),
                    })
            }
        }
    }
}

impl Default for Dialectic {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
