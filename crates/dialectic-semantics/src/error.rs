//! Error types for the semantics layer

use dialectic_store::StoreError;
use std::path::PathBuf;

/// Query errors raised by [`Dialectic`](crate::Dialectic)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialecticError {
    /// Framework or argument lookup failed, or a load was rejected
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Selected preferred extension does not exist
    #[error("preferred extension {} not found: {available} available", .index + 1)]
    ExtensionNotFound {
        /// Zero-based index requested
        index: usize,
        /// Number of preferred extensions computed
        available: usize,
    },
}

impl DialecticError {
    /// Whether the caller asked for something that does not exist
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Store(err) => err.is_not_found(),
            Self::ExtensionNotFound { .. } => true,
        }
    }
}

/// Result type alias for facade queries
pub type DialecticResult<T> = Result<T, DialecticError>;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("io error reading {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_not_found_display_is_one_based() {
        let err = DialecticError::ExtensionNotFound {
            index: 1,
            available: 1,
        };
        assert_eq!(err.to_string(), "preferred extension 2 not found: 1 available");
        assert!(err.is_not_found());
    }

    #[test]
    fn store_errors_pass_through() {
        let err: DialecticError = StoreError::FrameworkNotFound("k".into()).into();
        assert_eq!(err.to_string(), "framework not found: 'k'");
        assert!(err.is_not_found());
    }
}
