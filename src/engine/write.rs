//! Mutation pipeline: the write engine.

use log::info;
use serde::Serialize;

use crate::graph::Graph;
use crate::types::{EdgeRecord, NodeId};

/// Result of an ingest operation.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResult {
    /// Number of edge records applied.
    pub records_applied: usize,
    /// Adjacency entries stored afterwards.
    pub entry_count: usize,
    /// Known nodes afterwards.
    pub node_count: usize,
}

/// Report from deleting an edge.
#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    pub source_id: NodeId,
    pub target_id: NodeId,
    /// Entries removed, mirrors included. Zero means nothing matched.
    pub entries_removed: usize,
}

/// Report from a mode conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// False when the graph was already in the target mode.
    pub changed: bool,
    pub entries_before: usize,
    pub entries_after: usize,
}

/// The write engine applies mutations and reports what they did.
pub struct WriteEngine;

impl WriteEngine {
    /// Create a new write engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply a batch of edge records in order.
    pub fn ingest(&self, graph: &mut Graph, records: Vec<EdgeRecord>) -> IngestResult {
        let records_applied = records.len();
        for record in records {
            graph.add_edge(record.source, record.target, record.weight);
        }
        info!(
            "ingested {records_applied} edge records ({} nodes, {} entries)",
            graph.node_count(),
            graph.edge_count()
        );
        IngestResult {
            records_applied,
            entry_count: graph.edge_count(),
            node_count: graph.node_count(),
        }
    }

    /// Add a single edge.
    pub fn add_edge(&self, graph: &mut Graph, source_id: NodeId, target_id: NodeId, weight: i64) {
        graph.add_edge(source_id, target_id, weight);
    }

    /// Delete every entry between two nodes.
    pub fn delete_edge(
        &self,
        graph: &mut Graph,
        source_id: NodeId,
        target_id: NodeId,
    ) -> RemovalReport {
        RemovalReport {
            source_id,
            target_id,
            entries_removed: graph.delete_edge(source_id, target_id),
        }
    }

    /// Make the graph unweighted.
    pub fn to_unweighted(&self, graph: &mut Graph) -> ConversionReport {
        let entries_before = graph.edge_count();
        let changed = graph.convert_weighted_to_unweighted();
        ConversionReport {
            changed,
            entries_before,
            entries_after: graph.edge_count(),
        }
    }

    /// Make the graph undirected by mirroring every entry.
    pub fn to_undirected(&self, graph: &mut Graph) -> ConversionReport {
        let entries_before = graph.edge_count();
        let changed = graph.convert_directed_to_undirected();
        ConversionReport {
            changed,
            entries_before,
            entries_after: graph.edge_count(),
        }
    }
}

impl Default for WriteEngine {
    fn default() -> Self {
        Self::new()
    }
}
