//! Text rendering of a topology.
//!
//! Produces the node / connection / adjacency-list view used by the CLI
//! and exported alongside summaries. Output is sorted, so identical
//! graphs always render identically.

use crate::graph::Graph;

/// Render the node list, connection list, and adjacency list of a graph
pub fn adjacency_view(graph: &Graph) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Network Topology ===".to_string());
    lines.push(String::new());

    lines.push("NODES:".to_string());
    for id in graph.node_ids() {
        let role = graph
            .node(&id)
            .and_then(|n| n.role)
            .map(|r| format!(" (role: {r})"))
            .unwrap_or_default();
        lines.push(format!("  {id}{role}"));
    }

    lines.push(String::new());
    lines.push(format!("CONNECTIONS ({} total):", graph.edge_count()));
    for (a, b) in graph.edges() {
        lines.push(format!("  {a} <---> {b}"));
    }

    lines.push(String::new());
    lines.push("ADJACENCY LIST:".to_string());
    for id in graph.node_ids() {
        let mut peers: Vec<String> = graph
            .neighbors(&id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        peers.sort();
        if peers.is_empty() {
            lines.push(format!("  {id}: isolated"));
        } else {
            lines.push(format!("  {id}: {}", peers.join(", ")));
        }
    }

    lines.join("\n")
}
