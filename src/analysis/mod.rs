//! Topology analysis.
//!
//! This module provides the structural metrics computed over a topology
//! graph (connectivity, diameter, clustering, degree statistics), node
//! failure simulation, and side-by-side topology comparison.

pub mod comparison;
pub mod metrics;
pub mod report;
pub mod resilience;

pub use comparison::{compare, ComparisonEntry, ComparisonReport, RankingCriterion};
pub use metrics::{
    analyze, bfs_distances, connected_components, degree_summary, DegreeSummary, MetricsReport,
};
pub use resilience::{simulate_node_failure, FailureReport};
