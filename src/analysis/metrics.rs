//! Structural metrics for topology graphs.
//!
//! All graph algorithms here are explicit breadth-first traversals and
//! combinatorial counting over the adjacency mapping: connectivity and
//! components by BFS sweep, diameter by all-pairs BFS, clustering by
//! neighbor-pair counting. Disconnected and degenerate (0- or 1-node)
//! graphs are valid inputs and never raise; they produce explicit report
//! states instead (undefined diameter, zero averages).

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Snapshot of a graph's structural metrics.
///
/// This is the engine's read interface: exporters serialize exactly these
/// fields, nothing more. `diameter` is `None` when the graph is
/// disconnected — an explicit "not applicable" state rather than zero or
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub average_degree: f64,
    pub is_connected: bool,
    pub diameter: Option<usize>,
    pub average_clustering_coefficient: f64,
    pub per_node_clustering_coefficient: HashMap<String, f64>,
}

/// Degree statistics, computed separately from [`MetricsReport`] so the
/// report's wire form stays fixed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Highest-degree node, ties broken by smallest id
    pub most_connected: Option<String>,
}

/// Compute the full metrics report for a graph
pub fn analyze(graph: &Graph) -> MetricsReport {
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();

    let average_degree = if node_count == 0 {
        0.0
    } else {
        (edge_count * 2) as f64 / node_count as f64
    };

    let is_connected = is_connected(graph);
    let diameter = diameter(graph, is_connected);

    let per_node_clustering_coefficient = clustering_coefficients(graph);
    let average_clustering_coefficient = if node_count == 0 {
        0.0
    } else {
        per_node_clustering_coefficient.values().sum::<f64>() / node_count as f64
    };

    MetricsReport {
        node_count,
        edge_count,
        average_degree,
        is_connected,
        diameter,
        average_clustering_coefficient,
        per_node_clustering_coefficient,
    }
}

/// Shortest-path edge counts from `start` to every reachable node.
///
/// Returns an empty map if `start` is not in the graph.
pub fn bfs_distances(graph: &Graph, start: &str) -> HashMap<String, usize> {
    let mut distances: HashMap<String, usize> = HashMap::new();
    if !graph.contains(start) {
        return distances;
    }
    let mut queue: VecDeque<String> = VecDeque::new();
    distances.insert(start.to_string(), 0);
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        let depth = distances[&current];
        if let Ok(peers) = graph.neighbors(&current) {
            for peer in peers {
                if !distances.contains_key(peer) {
                    distances.insert(peer.clone(), depth + 1);
                    queue.push_back(peer.clone());
                }
            }
        }
    }
    distances
}

/// Whether every node is reachable from every other.
///
/// Zero- and one-node graphs are trivially connected.
fn is_connected(graph: &Graph) -> bool {
    let ids = graph.node_ids();
    match ids.first() {
        None => true,
        Some(start) => bfs_distances(graph, start).len() == ids.len(),
    }
}

/// Greatest shortest-path distance over all node pairs.
///
/// Defined only for connected graphs; 0- and 1-node graphs have no pairs
/// and report 0.
fn diameter(graph: &Graph, is_connected: bool) -> Option<usize> {
    if !is_connected {
        return None;
    }
    if graph.node_count() <= 1 {
        return Some(0);
    }
    let mut max_distance = 0usize;
    for id in graph.node_ids() {
        let distances = bfs_distances(graph, &id);
        if let Some(farthest) = distances.values().max() {
            max_distance = max_distance.max(*farthest);
        }
    }
    Some(max_distance)
}

/// Local clustering coefficient per node.
///
/// For a node of degree k >= 2 this is the number of links among its
/// neighbors divided by k-choose-2; degree < 2 is 0 by convention.
fn clustering_coefficients(graph: &Graph) -> HashMap<String, f64> {
    let mut coefficients = HashMap::with_capacity(graph.node_count());
    for id in graph.node_ids() {
        let peers: Vec<&String> = match graph.neighbors(&id) {
            Ok(peers) => peers.iter().collect(),
            Err(_) => continue,
        };
        let k = peers.len();
        if k < 2 {
            coefficients.insert(id, 0.0);
            continue;
        }
        let mut links = 0usize;
        for i in 0..k {
            for j in (i + 1)..k {
                if graph.has_edge(peers[i], peers[j]) {
                    links += 1;
                }
            }
        }
        let possible = k * (k - 1) / 2;
        coefficients.insert(id, links as f64 / possible as f64);
    }
    coefficients
}

/// Connected components via repeated BFS over unvisited nodes.
///
/// Each component is sorted by node id and components are ordered by
/// their first member, so the output is deterministic.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut components: Vec<Vec<String>> = Vec::new();

    for start in graph.node_ids() {
        if visited.contains(&start) {
            continue;
        }
        let mut component: Vec<String> = bfs_distances(graph, &start).into_keys().collect();
        component.sort();
        visited.extend(component.iter().cloned());
        components.push(component);
    }
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

/// Degree statistics for a graph
pub fn degree_summary(graph: &Graph) -> DegreeSummary {
    let degrees: Vec<usize> = graph
        .node_ids()
        .iter()
        .filter_map(|id| graph.degree(id).ok())
        .collect();

    if degrees.is_empty() {
        return DegreeSummary {
            min: 0,
            max: 0,
            mean: 0.0,
            most_connected: None,
        };
    }

    DegreeSummary {
        min: *degrees.iter().min().unwrap_or(&0),
        max: *degrees.iter().max().unwrap_or(&0),
        mean: degrees.iter().sum::<usize>() as f64 / degrees.len() as f64,
        most_connected: graph.max_degree_node(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{generate, TopologySpec};

    #[test]
    fn test_empty_graph_metrics() {
        let report = analyze(&Graph::new());
        assert_eq!(report.node_count, 0);
        assert!(report.is_connected);
        assert_eq!(report.average_degree, 0.0);
        assert_eq!(report.average_clustering_coefficient, 0.0);
        assert_eq!(report.diameter, Some(0));
    }

    #[test]
    fn test_single_node_metrics() {
        let mut graph = Graph::new();
        graph.add_node("only", None).unwrap();
        let report = analyze(&graph);
        assert!(report.is_connected);
        assert_eq!(report.diameter, Some(0));
        assert_eq!(report.average_degree, 0.0);
        assert_eq!(report.average_clustering_coefficient, 0.0);
    }

    #[test]
    fn test_star_diameter_is_two() {
        let graph = generate(&TopologySpec::Star { nodes: 8 }).unwrap();
        let report = analyze(&graph);
        assert!(report.is_connected);
        assert_eq!(report.diameter, Some(2));
    }

    #[test]
    fn test_ring_diameter_is_half_n() {
        for n in [4usize, 5, 8, 9] {
            let graph = generate(&TopologySpec::Ring { nodes: n }).unwrap();
            let report = analyze(&graph);
            assert_eq!(report.diameter, Some(n / 2), "ring of {n}");
        }
    }

    #[test]
    fn test_full_mesh_metrics() {
        let graph = generate(&TopologySpec::FullMesh { nodes: 5 }).unwrap();
        let report = analyze(&graph);
        assert_eq!(report.diameter, Some(1));
        assert_eq!(report.average_clustering_coefficient, 1.0);
        assert_eq!(report.average_degree, 4.0);
    }

    #[test]
    fn test_disconnected_graph_has_undefined_diameter() {
        let mut graph = Graph::new();
        graph.add_node("a", None).unwrap();
        graph.add_node("b", None).unwrap();
        graph.add_node("c", None).unwrap();
        graph.add_edge("a", "b").unwrap();
        let report = analyze(&graph);
        assert!(!report.is_connected);
        assert_eq!(report.diameter, None);
    }

    #[test]
    fn test_clustering_on_triangle_with_tail() {
        // Triangle a-b-c plus tail d hanging off c
        let mut graph = Graph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_node(id, None).unwrap();
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("a", "c").unwrap();
        graph.add_edge("c", "d").unwrap();

        let report = analyze(&graph);
        let per_node = &report.per_node_clustering_coefficient;
        assert_eq!(per_node["a"], 1.0);
        assert_eq!(per_node["b"], 1.0);
        // c has 3 neighbors, one connected pair out of 3
        assert!((per_node["c"] - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(per_node["d"], 0.0);
    }

    #[test]
    fn test_connected_components_are_deterministic() {
        let mut graph = Graph::new();
        for id in ["a", "b", "c", "d", "e"] {
            graph.add_node(id, None).unwrap();
        }
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("d", "e").unwrap();

        let components = connected_components(&graph);
        assert_eq!(
            components,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()],
                vec!["d".to_string(), "e".to_string()],
            ]
        );
    }

    #[test]
    fn test_bfs_distances_on_bus() {
        let graph = generate(&TopologySpec::Bus { nodes: 4 }).unwrap();
        let distances = bfs_distances(&graph, "node1");
        assert_eq!(distances["node1"], 0);
        assert_eq!(distances["node4"], 3);
        assert!(bfs_distances(&graph, "missing").is_empty());
    }

    #[test]
    fn test_degree_summary() {
        let graph = generate(&TopologySpec::Star { nodes: 5 }).unwrap();
        let summary = degree_summary(&graph);
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 4);
        assert_eq!(summary.mean, 8.0 / 5.0);
        assert_eq!(summary.most_connected, Some("node1".to_string()));
    }
}
