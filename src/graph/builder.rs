//! Fluent API for building Graph instances.

use crate::types::{EdgeRecord, NodeId, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`] from mode flags and an edge
/// list. Edges are applied in the order they were given.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    directed: bool,
    weighted: bool,
    nodes: Vec<NodeId>,
    edges: Vec<EdgeRecord>,
}

impl GraphBuilder {
    /// Create a builder for an undirected, unweighted graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set whether the graph is weighted.
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Register an isolated node.
    pub fn node(mut self, node: NodeId) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add an edge with the default weight.
    pub fn edge(self, source: NodeId, target: NodeId) -> Self {
        self.weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Add an edge with an explicit weight.
    ///
    /// On an unweighted graph the weight is still stored as given; only
    /// conversion rewrites weights.
    pub fn weighted_edge(mut self, source: NodeId, target: NodeId, weight: i64) -> Self {
        self.edges.push(EdgeRecord::new(source, target, weight));
        self
    }

    /// Add a batch of edge records.
    pub fn edges(mut self, records: impl IntoIterator<Item = EdgeRecord>) -> Self {
        self.edges.extend(records);
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph {
        let mut graph = Graph::new(self.directed, self.weighted);
        for node in self.nodes {
            graph.add_node(node);
        }
        for record in self.edges {
            graph.add_edge(record.source, record.target, record.weight);
        }
        graph
    }
}
