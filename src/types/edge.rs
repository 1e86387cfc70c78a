//! The adjacency entry stored for every outgoing edge.

use serde::Serialize;

use super::{NodeId, DEFAULT_WEIGHT};

/// One outgoing entry in a node's adjacency sequence.
///
/// The source is implied by the sequence the entry lives in. An undirected
/// edge is stored as two of these, one in each endpoint's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Destination node.
    pub target: NodeId,
    /// Edge weight. Always 1 once the graph has been made unweighted.
    pub weight: i64,
}

impl Edge {
    /// Create an entry with an explicit weight.
    pub fn new(target: NodeId, weight: i64) -> Self {
        Self { target, weight }
    }

    /// Create an entry with the default weight of 1.
    pub fn unit(target: NodeId) -> Self {
        Self::new(target, DEFAULT_WEIGHT)
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.target, self.weight)
    }
}

/// A full edge record as it appears in construction input: `u v [w]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: i64,
}

impl EdgeRecord {
    pub fn new(source: NodeId, target: NodeId, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
