//! Dialectic CLI
//!
//! Library half of the `dialectic` binary: catalog loading and the
//! subcommands, kept separate from argument parsing so they can be tested
//! against in-memory engines.

#![warn(missing_docs)]

pub mod catalog;
pub mod commands;

pub use catalog::{parse_catalog, read_catalog, CatalogFormat};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
