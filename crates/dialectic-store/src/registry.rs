//! Registry of named framework snapshots
//!
//! Each debate topic is registered under a [`FrameworkKey`]. Loading a
//! framework publishes a new immutable [`Snapshot`]; readers that already
//! hold an `Arc<Snapshot>` keep seeing the old one, coherent and complete,
//! while new lookups see the replacement.
//!
//! Reads go straight to a concurrent map. Writes pass through a single
//! write gate, which also hands out versions, so versions of a key strictly
//! increase with every publication.

use crate::error::{StoreError, StoreResult};
use crate::framework::Framework;
use dashmap::DashMap;
use dialectic_model::{Catalog, FrameworkKey, FrameworkSpec};
use parking_lot::Mutex;
use std::sync::Arc;

/// One published version of a framework
#[derive(Debug)]
pub struct Snapshot {
    key: FrameworkKey,
    version: u64,
    framework: Arc<Framework>,
}

impl Snapshot {
    /// Key the snapshot is registered under
    #[inline]
    #[must_use]
    pub fn key(&self) -> &FrameworkKey {
        &self.key
    }

    /// Publication version, unique across the registry
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The framework itself
    #[inline]
    #[must_use]
    pub fn framework(&self) -> &Arc<Framework> {
        &self.framework
    }
}

/// Result of publishing a framework
#[derive(Debug, Clone)]
pub struct Publication {
    /// Newly visible snapshot
    pub current: Arc<Snapshot>,
    /// Snapshot it replaced, if the key was already registered
    pub previous: Option<Arc<Snapshot>>,
}

/// Concurrent registry of framework snapshots
#[derive(Debug, Default)]
pub struct FrameworkRegistry {
    snapshots: DashMap<FrameworkKey, Arc<Snapshot>>,
    /// Single-writer gate; holds the last version handed out
    write_gate: Mutex<u64>,
}

impl FrameworkRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and publish a framework under `key`
    ///
    /// # Errors
    /// [`StoreError::Validation`] if the literal is malformed; the registry
    /// is left untouched.
    pub fn load(
        &self,
        key: impl Into<FrameworkKey>,
        spec: FrameworkSpec,
    ) -> StoreResult<Publication> {
        let key = key.into();
        let framework =
            Framework::load(spec).map_err(|source| StoreError::validation(key.clone(), source))?;

        let mut last_version = self.write_gate.lock();
        Ok(self.publish(&mut last_version, key, framework))
    }

    /// Validate every entry, then publish all of them
    ///
    /// Nothing is published unless the whole catalog is valid.
    ///
    /// # Errors
    /// The first [`StoreError::Validation`] in key order.
    pub fn load_catalog(&self, catalog: Catalog) -> StoreResult<Vec<Publication>> {
        let validated = catalog
            .into_iter()
            .map(|(key, spec)| match Framework::load(spec) {
                Ok(framework) => Ok((key, framework)),
                Err(source) => Err(StoreError::validation(key, source)),
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let mut last_version = self.write_gate.lock();
        Ok(validated
            .into_iter()
            .map(|(key, framework)| self.publish(&mut last_version, key, framework))
            .collect())
    }

    fn publish(
        &self,
        last_version: &mut u64,
        key: FrameworkKey,
        framework: Framework,
    ) -> Publication {
        *last_version += 1;
        let snapshot = Arc::new(Snapshot {
            key: key.clone(),
            version: *last_version,
            framework: Arc::new(framework),
        });

        tracing::info!(
            key = %key,
            version = snapshot.version,
            arguments = snapshot.framework.len(),
            attacks = snapshot.framework.attack_count(),
            fingerprint = %snapshot.framework.fingerprint().short(),
            "published framework"
        );

        let previous = self.snapshots.insert(key, Arc::clone(&snapshot));
        Publication {
            current: snapshot,
            previous,
        }
    }

    /// Current snapshot for `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unregistered keys.
    pub fn snapshot(&self, key: &FrameworkKey) -> StoreResult<Arc<Snapshot>> {
        self.snapshots
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StoreError::FrameworkNotFound(key.clone()))
    }

    /// Current framework for `key`
    ///
    /// # Errors
    /// [`StoreError::FrameworkNotFound`] for unregistered keys.
    pub fn framework(&self, key: &FrameworkKey) -> StoreResult<Arc<Framework>> {
        self.snapshot(key).map(|snapshot| Arc::clone(snapshot.framework()))
    }

    /// Unregister `key`, returning its last snapshot
    pub fn remove(&self, key: &FrameworkKey) -> Option<Arc<Snapshot>> {
        let _gate = self.write_gate.lock();
        let removed = self.snapshots.remove(key).map(|(_, snapshot)| snapshot);
        if removed.is_some() {
            tracing::info!(key = %key, "removed framework");
        }
        removed
    }

    /// Whether `snapshot` is still the published version of its key
    #[must_use]
    pub fn is_current(&self, snapshot: &Snapshot) -> bool {
        self.snapshots
            .get(&snapshot.key)
            .is_some_and(|entry| entry.version == snapshot.version)
    }

    /// Whether `key` is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &FrameworkKey) -> bool {
        self.snapshots.contains_key(key)
    }

    /// Registered keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<FrameworkKey> {
        let mut keys: Vec<_> = self.snapshots.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Number of registered frameworks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
