//! Node failure simulation.
//!
//! Simulates the loss of a single node by removing it from a deep copy of
//! the topology and re-running the analyzer. The input graph is never
//! mutated, so repeated simulations against the same base topology are
//! independent and order-insensitive.

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::metrics::{analyze, connected_components, MetricsReport};
use crate::error::EngineError;
use crate::graph::Graph;

/// Outcome of a single-node failure simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    /// The node that was removed
    pub failed_node: String,
    /// Metrics of the intact topology
    pub before: MetricsReport,
    /// Metrics after the node and its edges were removed
    pub after: MetricsReport,
    /// Connected components remaining after removal
    pub components_after: usize,
}

/// Remove `node_id` from a clone of `graph` and report the impact.
///
/// Fails with [`EngineError::UnknownNode`] if the node is not present in
/// the original.
pub fn simulate_node_failure(graph: &Graph, node_id: &str) -> Result<FailureReport, EngineError> {
    if !graph.contains(node_id) {
        return Err(EngineError::UnknownNode(node_id.to_string()));
    }

    let before = analyze(graph);

    let mut failed = graph.clone();
    failed.remove_node(node_id)?;

    let after = analyze(&failed);
    let components_after = connected_components(&failed).len();

    info!(
        "Simulated failure of '{}': {} -> {} edges, {} components remain",
        node_id,
        before.edge_count,
        after.edge_count,
        components_after
    );

    Ok(FailureReport {
        failed_node: node_id.to_string(),
        before,
        after,
        components_after,
    })
}
