//! Dialectic Store
//!
//! Holds argumentation frameworks in validated, immutable, indexed form.
//!
//! # Overview
//!
//! - [`FrameworkBuilder`] / [`Framework::load`]: reject duplicate ids and
//!   dangling attack endpoints, then index the attack graph
//! - [`Framework`]: O(1) lookup by id, O(degree) attackers-of / attacks-from
//! - [`FrameworkRegistry`]: named, versioned snapshots with a single writer
//!
//! # Example
//!
//! ```rust
//! use dialectic_model::{Argument, Attack, AttackType, FrameworkSpec};
//! use dialectic_store::FrameworkRegistry;
//!
//! let registry = FrameworkRegistry::new();
//! let spec = FrameworkSpec::new("t")
//!     .argument(Argument::new("A", "x", "a"))
//!     .argument(Argument::new("B", "y", "b"))
//!     .attack(Attack::new("k", "A", "B", AttackType::Rebut));
//! registry.load("debate", spec).unwrap();
//!
//! let framework = registry.framework(&"debate".into()).unwrap();
//! assert_eq!(framework.attackers_of("B").unwrap()[0].id.as_str(), "k");
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod framework;
pub mod registry;

// Re-exports
pub use builder::FrameworkBuilder;
pub use error::{StoreError, StoreResult, ValidationError};
pub use framework::Framework;
pub use registry::{FrameworkRegistry, Publication, Snapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
