//! graph-ops: an interactive in-memory graph.
//!
//! Holds one graph built from an edge list and answers traversal, reachability,
//! path and degree queries against it. Mutations and one-way mode conversions
//! (weighted to unweighted, directed to undirected) are applied in place.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{OutputFormat, SessionConfig};
pub use engine::{
    AllPathsParams, AllPathsResult, ConversionReport, IngestResult, PathResult, QueryEngine,
    RemovalReport, ShortestPathParams, TraversalOrder, TraversalParams, TraversalResult,
    WriteEngine,
};
pub use format::{EdgeListReader, GraphInput};
pub use graph::{Graph, GraphBuilder, PathLimits};
pub use types::{
    DegreeReport, Edge, EdgeRecord, GraphError, GraphResult, NodeId, DEFAULT_WEIGHT,
};
