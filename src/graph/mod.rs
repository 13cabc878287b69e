//! Graph model for network topologies.
//!
//! This module contains the core data structures for topology graphs:
//! nodes with optional roles, undirected edges, and the adjacency mapping
//! kept consistent with the edge set. Every other module in the engine is
//! built on top of this one.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Role tag assigned to a node by a generator.
///
/// Roles are bookkeeping for generation and display only; analysis never
/// branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Center of a star topology
    Hub,
    /// Degree-1 node hanging off a hub
    Endpoint,
    /// Root of a tree topology
    Root,
    /// Non-root tree node
    Branch,
    /// Spine tier of a spine-leaf fabric
    Spine,
    /// Leaf tier of a spine-leaf fabric
    Leaf,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NodeRole::Hub => "hub",
            NodeRole::Endpoint => "endpoint",
            NodeRole::Root => "root",
            NodeRole::Branch => "branch",
            NodeRole::Spine => "spine",
            NodeRole::Leaf => "leaf",
        };
        write!(f, "{label}")
    }
}

/// A single node in a topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<NodeRole>,
}

/// An undirected graph of nodes and links.
///
/// Invariants maintained by every mutation:
/// - every edge references two nodes present in the node map;
/// - adjacency is symmetric;
/// - no duplicate edges, no self-loops.
///
/// `Clone` produces a deep, independent copy; the failure simulator relies
/// on that to leave the original topology untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphDoc", into = "GraphDoc")]
pub struct Graph {
    nodes: HashMap<String, Node>,
    adjacency: HashMap<String, HashSet<String>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from explicit node and edge lists.
    ///
    /// This is the custom-builder entry point for callers that do not go
    /// through a generator.
    pub fn from_lists(
        nodes: &[(String, Option<NodeRole>)],
        edges: &[(String, String)],
    ) -> Result<Self, EngineError> {
        let mut graph = Graph::new();
        for (id, role) in nodes {
            graph.add_node(id, *role)?;
        }
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add a node to the graph
    pub fn add_node(&mut self, id: &str, role: Option<NodeRole>) -> Result<(), EngineError> {
        if self.nodes.contains_key(id) {
            return Err(EngineError::DuplicateNode(id.to_string()));
        }
        self.nodes.insert(
            id.to_string(),
            Node {
                id: id.to_string(),
                role,
            },
        );
        self.adjacency.insert(id.to_string(), HashSet::new());
        Ok(())
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Adding an edge that already exists is a no-op. A self-loop is an
    /// error, as is an endpoint that is not in the graph.
    pub fn add_edge(&mut self, a: &str, b: &str) -> Result<(), EngineError> {
        if a == b {
            return Err(EngineError::InvalidEdge(format!("self-loop on '{a}'")));
        }
        if !self.nodes.contains_key(a) {
            return Err(EngineError::UnknownNode(a.to_string()));
        }
        if !self.nodes.contains_key(b) {
            return Err(EngineError::UnknownNode(b.to_string()));
        }
        // Symmetric insert; only count the edge once
        let inserted = self
            .adjacency
            .get_mut(a)
            .map(|peers| peers.insert(b.to_string()))
            .unwrap_or(false);
        if inserted {
            self.adjacency
                .entry(b.to_string())
                .or_default()
                .insert(a.to_string());
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove a node and all of its incident edges
    pub fn remove_node(&mut self, id: &str) -> Result<(), EngineError> {
        if !self.nodes.contains_key(id) {
            return Err(EngineError::UnknownNode(id.to_string()));
        }
        let peers = self.adjacency.remove(id).unwrap_or_default();
        for peer in &peers {
            if let Some(back) = self.adjacency.get_mut(peer) {
                back.remove(id);
            }
        }
        self.edge_count -= peers.len();
        self.nodes.remove(id);
        Ok(())
    }

    /// Neighbors of a node
    pub fn neighbors(&self, id: &str) -> Result<&HashSet<String>, EngineError> {
        self.adjacency
            .get(id)
            .ok_or_else(|| EngineError::UnknownNode(id.to_string()))
    }

    /// Degree of a node
    pub fn degree(&self, id: &str) -> Result<usize, EngineError> {
        self.neighbors(id).map(|peers| peers.len())
    }

    /// Whether the graph contains a node with this id
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether an edge exists between two nodes
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|peers| peers.contains(b))
            .unwrap_or(false)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Look up a node record
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All node ids, sorted for deterministic output
    pub fn node_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.nodes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All edges as sorted `(low, high)` pairs, sorted for deterministic output
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = Vec::with_capacity(self.edge_count);
        for (id, peers) in &self.adjacency {
            for peer in peers {
                if id < peer {
                    edges.push((id.clone(), peer.clone()));
                }
            }
        }
        edges.sort();
        edges
    }

    /// The node with the highest degree, ties broken by smallest id.
    ///
    /// Returns `None` for an empty graph. Deterministic, which the
    /// comparator depends on for reproducible rankings.
    pub fn max_degree_node(&self) -> Option<String> {
        self.adjacency
            .iter()
            .map(|(id, peers)| (id, peers.len()))
            .max_by(|(id_a, deg_a), (id_b, deg_b)| {
                deg_a.cmp(deg_b).then_with(|| id_b.cmp(id_a))
            })
            .map(|(id, _)| id.clone())
    }
}

/// Serialized form of a [`Graph`]: plain node and edge lists.
///
/// Deserialization rebuilds the graph through the normal mutation path so
/// every invariant is re-checked; a document with a self-loop, duplicate
/// node, or dangling edge is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphDoc {
    nodes: Vec<Node>,
    edges: Vec<(String, String)>,
}

impl From<Graph> for GraphDoc {
    fn from(graph: Graph) -> Self {
        let mut nodes: Vec<Node> = graph.nodes.values().cloned().collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        GraphDoc {
            edges: graph.edges(),
            nodes,
        }
    }
}

impl TryFrom<GraphDoc> for Graph {
    type Error = EngineError;

    fn try_from(doc: GraphDoc) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for node in &doc.nodes {
            graph.add_node(&node.id, node.role)?;
        }
        for (a, b) in &doc.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}
