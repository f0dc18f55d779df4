//! Engine configuration
//!
//! Loaded from TOML, for example:
//!
//! ```toml
//! cache_capacity = 256
//! cache_ttl_secs = 600
//!
//! [search]
//! max_steps = 50000
//! max_duration_ms = 250
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Bounds on the preferred-extension search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBudget {
    /// Maximum search nodes visited
    pub max_steps: Option<u64>,
    /// Wall-clock limit in milliseconds
    pub max_duration_ms: Option<u64>,
}

impl SearchBudget {
    /// No limits at all
    #[inline]
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_steps: None,
            max_duration_ms: None,
        }
    }

    /// With a step limit
    #[inline]
    #[must_use]
    pub const fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// With a wall-clock limit
    #[inline]
    #[must_use]
    pub const fn with_max_duration_ms(mut self, millis: u64) -> Self {
        self.max_duration_ms = Some(millis);
        self
    }

    /// Wall-clock limit as a `Duration`
    #[inline]
    #[must_use]
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration_ms.map(Duration::from_millis)
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self {
            max_steps: Some(1_000_000),
            max_duration_ms: None,
        }
    }
}

/// Configuration of a [`Dialectic`](crate::Dialectic) instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum cached results per semantics
    pub cache_capacity: u64,
    /// Optional time-to-live for cached results
    pub cache_ttl_secs: Option<u64>,
    /// Preferred search bounds
    pub search: SearchBudget,
}

impl EngineConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With cache capacity
    #[inline]
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// With cache time-to-live
    #[inline]
    #[must_use]
    pub fn with_cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = Some(secs);
        self
    }

    /// With search budget
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: SearchBudget) -> Self {
        self.search = search;
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if unreadable, [`ConfigError::Parse`] if malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 1_024,
            cache_ttl_secs: None,
            search: SearchBudget::default(),
        }
    }
}
