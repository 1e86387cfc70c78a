//! High-level operations: write engine and query engine.

pub mod query;
pub mod write;

pub use query::{
    AllPathsParams, AllPathsResult, PathResult, QueryEngine, ShortestPathParams, TraversalOrder,
    TraversalParams, TraversalResult,
};
pub use write::{ConversionReport, IngestResult, RemovalReport, WriteEngine};
