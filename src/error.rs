//! Engine error types.
//!
//! All graph mutations and topology generators report failures through
//! [`EngineError`]. Operations either fully succeed or leave the graph
//! unchanged; there is no partial mutation on failure.

/// Errors raised by the topology engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A node with this id already exists in the graph
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),
    /// The referenced node id is not present in the graph
    #[error("Unknown node id: {0}")]
    UnknownNode(String),
    /// The edge is invalid (self-loop)
    #[error("Invalid edge: {0}")]
    InvalidEdge(String),
    /// Generator parameters cannot produce a valid topology
    #[error("Invalid topology parameters: {0}")]
    InvalidTopologyParams(String),
}
