//! Query executor: all read-only query types.

use serde::Serialize;

use crate::graph::{
    all_simple_paths, bfs_traverse, dfs_traverse, is_reachable, shortest_hop_path, Graph,
    PathLimits,
};
use crate::types::{DegreeReport, GraphResult, NodeId};

/// Visitation strategy for a traversal query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    BreadthFirst,
    DepthFirst,
}

impl TraversalOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
        }
    }
}

/// Parameters for a traversal query.
pub struct TraversalParams {
    /// Starting node ID.
    pub start_id: NodeId,
    /// Breadth- or depth-first.
    pub order: TraversalOrder,
}

/// Result of a traversal query.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalResult {
    pub order: TraversalOrder,
    /// Node IDs in visitation order.
    pub visited: Vec<NodeId>,
}

/// Parameters for an all-simple-paths query.
pub struct AllPathsParams {
    pub source_id: NodeId,
    pub target_id: NodeId,
    /// Node ids must be below this bound (the node count given at
    /// construction). `None` disables the check.
    pub node_bound: Option<usize>,
    /// Cap on the number of paths returned.
    pub max_paths: Option<usize>,
}

/// Result of an all-simple-paths query.
#[derive(Debug, Clone, Serialize)]
pub struct AllPathsResult {
    /// Each path runs from source to target inclusive.
    pub paths: Vec<Vec<NodeId>>,
    /// Whether enumeration stopped at `max_paths`.
    pub truncated: bool,
}

/// Parameters for a shortest-path query.
pub struct ShortestPathParams {
    pub source_id: NodeId,
    pub target_id: NodeId,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    /// Whether the target was reached.
    pub found: bool,
    /// Node IDs from source to target; empty when not found.
    pub path: Vec<NodeId>,
    /// Number of edges on the path; zero when not found.
    pub hops: usize,
}

/// The query engine supports all read-only query operations.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Visit every node reachable from a starting node.
    pub fn traverse(&self, graph: &Graph, params: TraversalParams) -> TraversalResult {
        let visited = match params.order {
            TraversalOrder::BreadthFirst => bfs_traverse(graph, params.start_id),
            TraversalOrder::DepthFirst => dfs_traverse(graph, params.start_id),
        };
        TraversalResult {
            order: params.order,
            visited,
        }
    }

    /// Whether `target_id` is reachable from `source_id`.
    pub fn has_path(&self, graph: &Graph, source_id: NodeId, target_id: NodeId) -> bool {
        is_reachable(graph, source_id, target_id)
    }

    /// Enumerate every simple path between two nodes.
    pub fn all_paths(&self, graph: &Graph, params: AllPathsParams) -> GraphResult<AllPathsResult> {
        // Ask for one extra path so a cap that was hit exactly is not
        // reported as truncation.
        let mut paths = all_simple_paths(
            graph,
            params.source_id,
            params.target_id,
            PathLimits {
                node_bound: params.node_bound,
                max_paths: params.max_paths.map(|max| max.saturating_add(1)),
            },
        )?;
        let truncated = params.max_paths.is_some_and(|max| paths.len() > max);
        if let Some(max) = params.max_paths {
            paths.truncate(max);
        }
        Ok(AllPathsResult { paths, truncated })
    }

    /// Fewest-hops path between two nodes. Weights are ignored.
    pub fn shortest_path(&self, graph: &Graph, params: ShortestPathParams) -> PathResult {
        let path = shortest_hop_path(graph, params.source_id, params.target_id);
        PathResult {
            found: !path.is_empty(),
            hops: path.len().saturating_sub(1),
            path,
        }
    }

    /// Degree of a node in the graph's current mode.
    pub fn degree(&self, graph: &Graph, node_id: NodeId) -> DegreeReport {
        graph.degree(node_id)
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}
