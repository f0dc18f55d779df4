//! Memoized semantics results using moka
//!
//! Entries are keyed by framework key and snapshot version, so a result can
//! never be served for a framework other than the one it was computed on.
//! Reloads and removals still invalidate eagerly to release memory.

use crate::grounded::GroundedLabelling;
use crate::preferred::PreferredOutcome;
use dialectic_model::FrameworkKey;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

type Slot = (FrameworkKey, u64);

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Cached grounded labellings
    pub grounded_entries: u64,
    /// Cached preferred outcomes
    pub preferred_entries: u64,
}

/// Per-snapshot cache of grounded and preferred results
#[derive(Debug, Clone)]
pub struct ExtensionCache {
    grounded: Cache<Slot, Arc<GroundedLabelling>>,
    preferred: Cache<Slot, Arc<PreferredOutcome>>,
}

impl ExtensionCache {
    /// Create a cache holding up to `max_capacity` results per semantics
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            grounded: Cache::new(max_capacity),
            preferred: Cache::new(max_capacity),
        }
    }

    /// Create a cache whose entries also expire after `ttl`
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            grounded: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
            preferred: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Cached grounded labelling, computing it on a miss
    ///
    /// Concurrent misses for the same slot run `compute` once.
    pub fn grounded_with(
        &self,
        key: &FrameworkKey,
        version: u64,
        compute: impl FnOnce() -> GroundedLabelling,
    ) -> Arc<GroundedLabelling> {
        self.grounded
            .get_with((key.clone(), version), || Arc::new(compute()))
    }

    /// Cached preferred outcome, computing it on a miss
    pub fn preferred_with(
        &self,
        key: &FrameworkKey,
        version: u64,
        compute: impl FnOnce() -> PreferredOutcome,
    ) -> Arc<PreferredOutcome> {
        self.preferred
            .get_with((key.clone(), version), || Arc::new(compute()))
    }

    /// Drop both results for one snapshot
    pub fn invalidate(&self, key: &FrameworkKey, version: u64) {
        let slot = (key.clone(), version);
        self.grounded.invalidate(&slot);
        self.preferred.invalidate(&slot);
    }

    /// Entry counts after flushing pending maintenance
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.grounded.run_pending_tasks();
        self.preferred.run_pending_tasks();
        CacheStats {
            grounded_entries: self.grounded.entry_count(),
            preferred_entries: self.preferred.entry_count(),
        }
    }
}

impl Default for ExtensionCache {
    fn default() -> Self {
        Self::new(1_024)
    }
}
