//! In-memory graph operations: the core data structure and its algorithms.

pub mod adjacency_graph;
pub mod builder;
pub mod paths;
pub mod traversal;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
pub use paths::{all_simple_paths, shortest_hop_path, PathLimits};
pub use traversal::{bfs_traverse, dfs_traverse, is_reachable};
