//! Degree report returned by degree queries.

use serde::Serialize;

/// Degree of a single node. The shape depends on the graph's mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DegreeReport {
    /// Directed graphs report incoming and outgoing counts separately.
    Directed { in_degree: usize, out_degree: usize },
    /// Undirected graphs report one count. Mirrored storage means this is the
    /// length of the node's own adjacency sequence.
    Undirected { degree: usize },
}

impl DegreeReport {
    /// Total number of incident entries, regardless of mode.
    pub fn total(&self) -> usize {
        match self {
            Self::Directed {
                in_degree,
                out_degree,
            } => in_degree + out_degree,
            Self::Undirected { degree } => *degree,
        }
    }
}
