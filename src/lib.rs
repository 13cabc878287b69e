//! # NetSimPro - Network topology modeling and resilience analysis
//!
//! This library models computer-network topologies as undirected graphs,
//! generates the common topology families, computes structural metrics,
//! and simulates node failure to assess resilience.
//!
//! ## Overview
//!
//! NetSimPro lets you study how a network's shape affects its behavior
//! without deploying real infrastructure. Generators produce each
//! topology family deterministically, so re-running a scenario always
//! reproduces identical structure.
//!
//! ## Key Features
//!
//! - **Topology Generators**: star, ring, full/partial mesh, tree,
//!   spine-leaf, bus, and hybrid compositions
//! - **Structural Metrics**: connectivity, diameter, clustering
//!   coefficients, degree statistics via explicit BFS and combinatorial
//!   counting
//! - **Failure Simulation**: remove a node from a copy of a topology and
//!   measure the fragmentation
//! - **Comparison**: side-by-side metrics and a deterministic resilience
//!   ranking across topologies
//! - **Reproducible**: no randomness anywhere in the engine
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `graph`: node/edge storage and the adjacency mapping
//! - `topology`: topology specs, size presets, and generators
//! - `analysis`: metrics, failure simulation, comparison, and reports
//! - `registry`: named `label -> Graph` store with JSON persistence
//! - `render`: text rendering of a topology
//! - `error`: the engine's typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use netsimpro::analysis::{analyze, simulate_node_failure};
//! use netsimpro::topology::{generate, TopologySpec};
//!
//! let graph = generate(&TopologySpec::Star { nodes: 6 })?;
//!
//! let report = analyze(&graph);
//! assert_eq!(report.diameter, Some(2));
//!
//! // Losing the hub isolates every spoke
//! let failure = simulate_node_failure(&graph, "node1")?;
//! assert_eq!(failure.components_after, 5);
//! # Ok::<(), netsimpro::error::EngineError>(())
//! ```
//!
//! ## Topology Spec Format
//!
//! Specs serialize as tagged YAML documents:
//!
//! ```yaml
//! type: hybrid
//! segments:
//!   - type: ring
//!     nodes: 5
//!   - type: star
//!     nodes: 5
//! ```

pub mod analysis;
pub mod error;
pub mod graph;
pub mod registry;
pub mod render;
pub mod topology;

pub use analysis::{analyze, compare, simulate_node_failure, MetricsReport};
pub use error::EngineError;
pub use graph::{Graph, Node, NodeRole};
pub use registry::TopologyRegistry;
pub use topology::{generate, SizePreset, TopologyKind, TopologySpec};
