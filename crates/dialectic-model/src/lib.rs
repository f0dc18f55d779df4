//! Dialectic Model
//!
//! Plain data for structured argumentation: arguments, typed attacks between
//! them, and the framework literal that groups them under a debate topic.
//!
//! # Core Concepts
//!
//! - [`Argument`]: premises, conclusion and strength, attributed to an agent
//! - [`Attack`]: directed rebut / undercut / undermine between two arguments
//! - [`FrameworkSpec`]: unvalidated framework definition, optionally with
//!   hand-authored [`Claims`]
//! - [`Label`]: in / out / undecided, always derived, never stored
//! - [`Fingerprint`]: BLAKE3 digest identifying framework content
//!
//! # Example
//!
//! ```rust
//! use dialectic_model::{Argument, Attack, AttackType, FrameworkSpec, Strength};
//!
//! let spec = FrameworkSpec::new("Does the wavefunction collapse?")
//!     .argument(Argument::new("A1", "everett", "No collapse").with_strength(Strength::Strict))
//!     .argument(Argument::new("A2", "penrose", "Gravitational collapse"))
//!     .attack(Attack::new("att4", "A1", "A2", AttackType::Rebut));
//!
//! assert_eq!(spec.arguments.len(), 2);
//! ```

#![warn(missing_docs)]

mod argument;
mod attack;
mod fingerprint;
mod ids;
mod label;
mod spec;

pub use argument::{Argument, Strength};
pub use attack::{Attack, AttackType};
pub use fingerprint::{Fingerprint, FingerprintError};
pub use ids::{AgentId, ArgumentId, AttackId, FrameworkKey};
pub use label::Label;
pub use spec::{Catalog, Claims, FrameworkSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
