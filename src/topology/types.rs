//! Topology spec type definitions.
//!
//! This file contains the topology families supported by the engine
//! (Star, Ring, Mesh, Tree, Spine-Leaf, Bus, Hybrid), the size presets,
//! and the parameter bundles handed to the generators.

use serde::{Deserialize, Serialize};

/// Default connections per node for partial mesh generation
pub const DEFAULT_MESH_DEGREE: usize = 3;

/// Default branching factor for tree generation
pub const DEFAULT_TREE_BRANCHING: usize = 2;

/// Named size presets mapping to fixed node counts.
///
/// The counts are configuration, not invariants the analysis depends on:
/// small = 5, medium = 15, large = 30 nodes. Spine-leaf presets are split
/// into tiers: small = 2 spines / 3 leaves, medium = 5 / 10, large = 10 / 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    /// Total node count for this preset
    pub fn node_count(&self) -> usize {
        match self {
            SizePreset::Small => 5,
            SizePreset::Medium => 15,
            SizePreset::Large => 30,
        }
    }

    /// Spine and leaf counts for spine-leaf topologies
    pub fn spine_leaf_counts(&self) -> (usize, usize) {
        match self {
            SizePreset::Small => (2, 3),
            SizePreset::Medium => (5, 10),
            SizePreset::Large => (10, 20),
        }
    }
}

/// Topology family, used to key preset construction and CLI dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    Star,
    Ring,
    FullMesh,
    PartialMesh,
    Tree,
    SpineLeaf,
    Bus,
    Hybrid,
}

impl std::fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TopologyKind::Star => "star",
            TopologyKind::Ring => "ring",
            TopologyKind::FullMesh => "full_mesh",
            TopologyKind::PartialMesh => "partial_mesh",
            TopologyKind::Tree => "tree",
            TopologyKind::SpineLeaf => "spine_leaf",
            TopologyKind::Bus => "bus",
            TopologyKind::Hybrid => "hybrid",
        };
        write!(f, "{label}")
    }
}

/// Full parameter bundle for one topology.
///
/// Specs serialize as tagged YAML/JSON documents, e.g.:
///
/// ```yaml
/// type: partial_mesh
/// nodes: 15
/// degree: 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TopologySpec {
    /// One hub connected to every other node
    Star { nodes: usize },
    /// A single cycle, each node linked to its two circular neighbors
    Ring { nodes: usize },
    /// Every pair of nodes connected
    FullMesh { nodes: usize },
    /// Each node linked to its `degree` nearest index neighbors (mod n)
    PartialMesh { nodes: usize, degree: usize },
    /// Level-ordered tree with a fixed branching factor
    Tree { nodes: usize, branching: usize },
    /// Two tiers, every spine connected to every leaf
    SpineLeaf { spines: usize, leaves: usize },
    /// Linear chain without wraparound
    Bus { nodes: usize },
    /// Sub-topologies on disjoint node sets, bridged in generation order
    Hybrid { segments: Vec<TopologySpec> },
}

impl TopologySpec {
    /// Build a spec for a topology family from a size preset.
    ///
    /// The hybrid preset composes a ring core with a star access segment,
    /// each of the preset's node count.
    pub fn preset(kind: TopologyKind, size: SizePreset) -> Self {
        let nodes = size.node_count();
        match kind {
            TopologyKind::Star => TopologySpec::Star { nodes },
            TopologyKind::Ring => TopologySpec::Ring { nodes },
            TopologyKind::FullMesh => TopologySpec::FullMesh { nodes },
            TopologyKind::PartialMesh => TopologySpec::PartialMesh {
                nodes,
                degree: DEFAULT_MESH_DEGREE.min(nodes.saturating_sub(1)).max(1),
            },
            TopologyKind::Tree => TopologySpec::Tree {
                nodes,
                branching: DEFAULT_TREE_BRANCHING,
            },
            TopologyKind::SpineLeaf => {
                let (spines, leaves) = size.spine_leaf_counts();
                TopologySpec::SpineLeaf { spines, leaves }
            }
            TopologyKind::Bus => TopologySpec::Bus { nodes },
            TopologyKind::Hybrid => TopologySpec::Hybrid {
                segments: vec![
                    TopologySpec::Ring { nodes },
                    TopologySpec::Star { nodes },
                ],
            },
        }
    }

    /// The family this spec belongs to
    pub fn kind(&self) -> TopologyKind {
        match self {
            TopologySpec::Star { .. } => TopologyKind::Star,
            TopologySpec::Ring { .. } => TopologyKind::Ring,
            TopologySpec::FullMesh { .. } => TopologyKind::FullMesh,
            TopologySpec::PartialMesh { .. } => TopologyKind::PartialMesh,
            TopologySpec::Tree { .. } => TopologyKind::Tree,
            TopologySpec::SpineLeaf { .. } => TopologyKind::SpineLeaf,
            TopologySpec::Bus { .. } => TopologyKind::Bus,
            TopologySpec::Hybrid { .. } => TopologyKind::Hybrid,
        }
    }
}
