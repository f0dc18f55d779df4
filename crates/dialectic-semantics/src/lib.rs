//! Dialectic Semantics
//!
//! Computes which arguments of a validated framework survive mutual attack.
//!
//! # Overview
//!
//! - [`is_conflict_free`] / [`is_admissible`]: set predicates
//! - [`characteristic`] / [`CharacteristicIter`]: the characteristic
//!   function and its iterates from the empty set
//! - [`compute_grounded`]: least fixpoint, as an in/out/undecided labelling
//! - [`compute_preferred`]: maximal admissible sets, bounded by a
//!   [`SearchBudget`]
//! - [`status_of`] / [`acceptance_of`]: per-argument verdicts
//! - [`audit`]: authored claims versus computed results
//! - [`Dialectic`]: registry-backed query facade with an [`ExtensionCache`]
//!
//! # Example
//!
//! ```rust
//! use dialectic_model::{Argument, Attack, AttackType, FrameworkSpec, Label};
//! use dialectic_semantics::{Dialectic, ExtensionSelection};
//!
//! let engine = Dialectic::default();
//! let spec = FrameworkSpec::new("t")
//!     .argument(Argument::new("A", "x", "a"))
//!     .argument(Argument::new("B", "y", "b"))
//!     .argument(Argument::new("C", "z", "c"))
//!     .attack(Attack::new("k", "A", "B", AttackType::Rebut));
//! engine.load_framework("debate".into(), spec).unwrap();
//!
//! let grounded = engine.grounded(&"debate".into()).unwrap();
//! assert_eq!(grounded.in_set().to_string(), "{A, C}");
//! assert_eq!(
//!     engine.status_of(&"debate".into(), "B", ExtensionSelection::Grounded).unwrap(),
//!     Label::Out
//! );
//! ```

#![warn(missing_docs)]

pub mod audit;
pub mod cache;
pub mod config;
pub mod error;
pub mod extension;
pub mod grounded;
mod members;
pub mod predicates;
pub mod preferred;
pub mod report;
pub mod service;
pub mod status;

// Re-exports
pub use audit::{audit, Discrepancy};
pub use cache::{CacheStats, ExtensionCache};
pub use config::{EngineConfig, SearchBudget};
pub use error::{ConfigError, DialecticError, DialecticResult};
pub use extension::{Extension, ExtensionSelection, SelectionParseError};
pub use grounded::{characteristic, compute_grounded, CharacteristicIter, GroundedLabelling};
pub use predicates::{is_admissible, is_conflict_free};
pub use preferred::{compute_preferred, compute_preferred_from, PreferredOutcome};
pub use report::{ArgumentRow, FrameworkReport};
pub use service::Dialectic;
pub use status::{acceptance_of, status_of, Acceptance};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
