//! Core graph structure: adjacency sequences keyed by node id.

use std::collections::BTreeMap;

use log::debug;

use crate::types::{DegreeReport, Edge, NodeId, DEFAULT_WEIGHT};

/// The in-memory graph: an adjacency map plus the directed/weighted mode flags.
///
/// Undirected edges are stored as two independent directed entries. Reads of
/// absent nodes return empty views and never insert anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency map: node -> outgoing entries in insertion order.
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
    /// Whether edges are one-way.
    directed: bool,
    /// Whether stored weights are meaningful.
    weighted: bool,
}

impl Graph {
    /// Create an empty graph with the given mode.
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
            weighted,
        }
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether the graph is weighted.
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Number of known nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the node has been added or has appeared as an edge endpoint.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All known node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Outgoing entries of a node. Empty for unknown nodes.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(node, entries)` pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[Edge])> + '_ {
        self.adjacency
            .iter()
            .map(|(&node, edges)| (node, edges.as_slice()))
    }

    /// Whether at least one direct entry `source -> target` is stored.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.neighbors(source).iter().any(|e| e.target == target)
    }

    /// Weights of every `source -> target` entry, in insertion order.
    pub fn edge_weights(&self, source: NodeId, target: NodeId) -> Vec<i64> {
        self.neighbors(source)
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.weight)
            .collect()
    }

    /// Register a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Append an edge. Undirected graphs also get the mirror entry.
    ///
    /// Parallel edges are not merged.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, weight: i64) {
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
        if self.directed {
            // Target still becomes a known node.
            self.add_node(target);
        } else {
            self.adjacency
                .entry(target)
                .or_default()
                .push(Edge::new(source, weight));
        }
        debug!("add_edge {source} -> {target} (w={weight})");
    }

    /// Append an edge with the default weight.
    pub fn add_unit_edge(&mut self, source: NodeId, target: NodeId) {
        self.add_edge(source, target, DEFAULT_WEIGHT);
    }

    /// Remove every `source -> target` entry (and the mirrors when
    /// undirected). Returns how many entries were removed; zero for unknown
    /// nodes or a missing edge.
    pub fn delete_edge(&mut self, source: NodeId, target: NodeId) -> usize {
        let mut removed = remove_targeting(&mut self.adjacency, source, target);
        if !self.directed {
            removed += remove_targeting(&mut self.adjacency, target, source);
        }
        debug!("delete_edge {source} -> {target}: {removed} entries removed");
        removed
    }

    /// Rewrite every weight to 1 and clear the weighted flag.
    ///
    /// Returns `false` if the graph was already unweighted.
    pub fn convert_weighted_to_unweighted(&mut self) -> bool {
        if !self.weighted {
            return false;
        }
        for edge in self.adjacency.values_mut().flatten() {
            edge.weight = DEFAULT_WEIGHT;
        }
        self.weighted = false;
        debug!("converted to unweighted");
        true
    }

    /// Add the mirror of every stored entry and clear the directed flag.
    ///
    /// Mirrors are collected against a snapshot so they never get mirrored
    /// themselves. Reciprocal pairs that already existed end up duplicated.
    /// Returns `false` if the graph was already undirected.
    pub fn convert_directed_to_undirected(&mut self) -> bool {
        if !self.directed {
            return false;
        }
        let mut mirrored = self.adjacency.clone();
        for (&source, edges) in &self.adjacency {
            for edge in edges {
                mirrored
                    .entry(edge.target)
                    .or_default()
                    .push(Edge::new(source, edge.weight));
            }
        }
        self.adjacency = mirrored;
        self.directed = false;
        debug!(
            "converted to undirected: {} entries across {} nodes",
            self.edge_count(),
            self.node_count()
        );
        true
    }

    /// Number of entries across the whole map that point at `node`.
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| e.target == node)
            .count()
    }

    /// Length of the node's own adjacency sequence.
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Degree of a node, shaped by the current mode. Unknown nodes report zero.
    pub fn degree(&self, node: NodeId) -> DegreeReport {
        if self.directed {
            DegreeReport::Directed {
                in_degree: self.in_degree(node),
                out_degree: self.out_degree(node),
            }
        } else {
            DegreeReport::Undirected {
                degree: self.out_degree(node),
            }
        }
    }
}

fn remove_targeting(
    adjacency: &mut BTreeMap<NodeId, Vec<Edge>>,
    source: NodeId,
    target: NodeId,
) -> usize {
    match adjacency.get_mut(&source) {
        Some(edges) => {
            let before = edges.len();
            edges.retain(|e| e.target != target);
            before - edges.len()
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_add_registers_target() {
        let mut g = Graph::new(true, false);
        g.add_unit_edge(1, 2);
        assert!(g.contains_node(2));
        assert!(g.neighbors(2).is_empty());
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn neighbors_of_unknown_node_does_not_insert() {
        let g = Graph::new(true, true);
        assert!(g.neighbors(42).is_empty());
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn self_loop_undirected_stores_two_entries() {
        let mut g = Graph::new(false, false);
        g.add_unit_edge(3, 3);
        assert_eq!(g.neighbors(3).len(), 2);
        assert_eq!(g.delete_edge(3, 3), 2);
    }
}
