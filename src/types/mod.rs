//! All data types for the graph-ops library.

pub mod degree;
pub mod edge;
pub mod error;

pub use degree::DegreeReport;
pub use edge::{Edge, EdgeRecord};
pub use error::{GraphError, GraphResult};

/// Node identifier. Nodes are never declared up front; they exist once they
/// appear as an edge endpoint or are added explicitly.
pub type NodeId = i64;

/// Weight given to edges added without one, and to every edge after
/// conversion to an unweighted graph.
pub const DEFAULT_WEIGHT: i64 = 1;
