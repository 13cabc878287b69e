//! Network topology generation.
//!
//! This module contains the topology spec types and the deterministic
//! generators that turn a spec into a [`crate::graph::Graph`].

pub mod generators;
pub mod types;

// Re-export key types and functions for easier access
pub use generators::generate;
pub use types::{SizePreset, TopologyKind, TopologySpec};
