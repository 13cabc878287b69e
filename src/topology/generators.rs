//! Deterministic topology generators.
//!
//! Each generator turns a [`TopologySpec`] into a fully built
//! [`Graph`]. Generators are pure functions of their spec: identical
//! inputs always reproduce identical structure, which regression tests
//! and the comparator rely on.
//!
//! Generic families name their nodes `node1..nodeN` with the first node
//! acting as hub/root where the family has one. Spine-leaf names its
//! tiers `spine1..` and `leaf1..`. Hybrid prefixes each segment's ids
//! with `s{index}-` so the segments stay disjoint.

use log::debug;

use crate::error::EngineError;
use crate::graph::{Graph, NodeRole};
use crate::topology::types::TopologySpec;

/// Generate a topology graph from a spec
pub fn generate(spec: &TopologySpec) -> Result<Graph, EngineError> {
    let mut graph = Graph::new();
    build(spec, "", &mut graph)?;
    debug!(
        "Generated {} topology: {} nodes, {} edges",
        spec.kind(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn build(spec: &TopologySpec, prefix: &str, graph: &mut Graph) -> Result<(), EngineError> {
    match spec {
        TopologySpec::Star { nodes } => build_star(*nodes, prefix, graph),
        TopologySpec::Ring { nodes } => build_ring(*nodes, prefix, graph),
        TopologySpec::FullMesh { nodes } => build_full_mesh(*nodes, prefix, graph),
        TopologySpec::PartialMesh { nodes, degree } => {
            build_partial_mesh(*nodes, *degree, prefix, graph)
        }
        TopologySpec::Tree { nodes, branching } => build_tree(*nodes, *branching, prefix, graph),
        TopologySpec::SpineLeaf { spines, leaves } => {
            build_spine_leaf(*spines, *leaves, prefix, graph)
        }
        TopologySpec::Bus { nodes } => build_bus(*nodes, prefix, graph),
        TopologySpec::Hybrid { segments } => build_hybrid(segments, prefix, graph),
    }
}

fn node_id(prefix: &str, index: usize) -> String {
    format!("{prefix}node{index}")
}

fn build_star(nodes: usize, prefix: &str, graph: &mut Graph) -> Result<(), EngineError> {
    if nodes < 2 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "star topology requires at least 2 nodes, got {nodes}"
        )));
    }
    let hub = node_id(prefix, 1);
    graph.add_node(&hub, Some(NodeRole::Hub))?;
    for i in 2..=nodes {
        let spoke = node_id(prefix, i);
        graph.add_node(&spoke, Some(NodeRole::Endpoint))?;
        graph.add_edge(&hub, &spoke)?;
    }
    Ok(())
}

fn build_ring(nodes: usize, prefix: &str, graph: &mut Graph) -> Result<(), EngineError> {
    if nodes < 3 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "ring topology requires at least 3 nodes, got {nodes}"
        )));
    }
    for i in 1..=nodes {
        graph.add_node(&node_id(prefix, i), None)?;
    }
    for i in 0..nodes {
        let next = (i + 1) % nodes;
        graph.add_edge(&node_id(prefix, i + 1), &node_id(prefix, next + 1))?;
    }
    Ok(())
}

fn build_full_mesh(nodes: usize, prefix: &str, graph: &mut Graph) -> Result<(), EngineError> {
    if nodes < 2 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "full mesh requires at least 2 nodes, got {nodes}"
        )));
    }
    for i in 1..=nodes {
        graph.add_node(&node_id(prefix, i), None)?;
    }
    for i in 1..=nodes {
        for j in (i + 1)..=nodes {
            graph.add_edge(&node_id(prefix, i), &node_id(prefix, j))?;
        }
    }
    Ok(())
}

/// Partial mesh: node i links to its `degree` nearest index successors
/// (mod n). The rule is deterministic so identical specs reproduce the
/// same structure.
fn build_partial_mesh(
    nodes: usize,
    degree: usize,
    prefix: &str,
    graph: &mut Graph,
) -> Result<(), EngineError> {
    if nodes < 2 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "partial mesh requires at least 2 nodes, got {nodes}"
        )));
    }
    if degree == 0 || degree >= nodes {
        return Err(EngineError::InvalidTopologyParams(format!(
            "partial mesh degree must be between 1 and {}, got {degree}",
            nodes - 1
        )));
    }
    for i in 1..=nodes {
        graph.add_node(&node_id(prefix, i), None)?;
    }
    for i in 0..nodes {
        for step in 1..=degree {
            let peer = (i + step) % nodes;
            // add_edge is idempotent, so symmetric offsets are harmless
            graph.add_edge(&node_id(prefix, i + 1), &node_id(prefix, peer + 1))?;
        }
    }
    Ok(())
}

fn build_tree(
    nodes: usize,
    branching: usize,
    prefix: &str,
    graph: &mut Graph,
) -> Result<(), EngineError> {
    if nodes == 0 {
        return Err(EngineError::InvalidTopologyParams(
            "tree topology requires at least 1 node".to_string(),
        ));
    }
    if branching == 0 {
        return Err(EngineError::InvalidTopologyParams(
            "tree branching factor must be at least 1".to_string(),
        ));
    }
    let root = node_id(prefix, 1);
    graph.add_node(&root, Some(NodeRole::Root))?;

    // Fill levels left to right: each parent takes up to `branching`
    // children from the remaining pool.
    let mut current_level = vec![root];
    let mut next_index = 2;
    while next_index <= nodes && !current_level.is_empty() {
        let mut next_level = Vec::new();
        for parent in &current_level {
            for _ in 0..branching {
                if next_index > nodes {
                    break;
                }
                let child = node_id(prefix, next_index);
                graph.add_node(&child, Some(NodeRole::Branch))?;
                graph.add_edge(parent, &child)?;
                next_level.push(child);
                next_index += 1;
            }
        }
        current_level = next_level;
    }
    Ok(())
}

fn build_spine_leaf(
    spines: usize,
    leaves: usize,
    prefix: &str,
    graph: &mut Graph,
) -> Result<(), EngineError> {
    if spines == 0 || leaves == 0 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "spine-leaf requires at least 1 spine and 1 leaf, got {spines} spines / {leaves} leaves"
        )));
    }
    for i in 1..=spines {
        graph.add_node(&format!("{prefix}spine{i}"), Some(NodeRole::Spine))?;
    }
    for i in 1..=leaves {
        graph.add_node(&format!("{prefix}leaf{i}"), Some(NodeRole::Leaf))?;
    }
    // Complete bipartite: every spine to every leaf, no intra-tier links
    for s in 1..=spines {
        for l in 1..=leaves {
            graph.add_edge(&format!("{prefix}spine{s}"), &format!("{prefix}leaf{l}"))?;
        }
    }
    Ok(())
}

fn build_bus(nodes: usize, prefix: &str, graph: &mut Graph) -> Result<(), EngineError> {
    if nodes < 2 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "bus topology requires at least 2 nodes, got {nodes}"
        )));
    }
    for i in 1..=nodes {
        graph.add_node(&node_id(prefix, i), None)?;
    }
    for i in 1..nodes {
        graph.add_edge(&node_id(prefix, i), &node_id(prefix, i + 1))?;
    }
    Ok(())
}

fn build_hybrid(
    segments: &[TopologySpec],
    prefix: &str,
    graph: &mut Graph,
) -> Result<(), EngineError> {
    if segments.len() < 2 {
        return Err(EngineError::InvalidTopologyParams(format!(
            "hybrid topology requires at least 2 segments, got {}",
            segments.len()
        )));
    }
    for (i, segment) in segments.iter().enumerate() {
        let segment_prefix = format!("{prefix}s{}-", i + 1);
        build(segment, &segment_prefix, graph)?;
    }
    // Bridge each segment's anchor to the next segment's anchor, in
    // generation order, so the composite is connected.
    for i in 0..segments.len() - 1 {
        let a = anchor(&segments[i], &format!("{prefix}s{}-", i + 1));
        let b = anchor(&segments[i + 1], &format!("{prefix}s{}-", i + 2));
        graph.add_edge(&a, &b)?;
    }
    Ok(())
}

/// Designated bridging node of a segment: its first generated node
fn anchor(spec: &TopologySpec, prefix: &str) -> String {
    match spec {
        TopologySpec::SpineLeaf { .. } => format!("{prefix}spine1"),
        TopologySpec::Hybrid { segments } => anchor(&segments[0], &format!("{prefix}s1-")),
        _ => node_id(prefix, 1),
    }
}
