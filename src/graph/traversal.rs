//! Graph traversal algorithms (BFS, DFS, reachability).
//!
//! All traversals use heap-allocated work queues/stacks, so path depth is
//! bounded by memory rather than by the call stack.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::NodeId;

use super::Graph;

/// Breadth-first visitation order from `start`.
///
/// Neighbors are visited in adjacency order and marked on enqueue. An
/// unknown start node is visited on its own.
pub fn bfs_traverse(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for edge in graph.neighbors(current) {
            if visited.insert(edge.target) {
                queue.push_back(edge.target);
            }
        }
    }

    trace!("bfs from {start}: {} nodes", order.len());
    order
}

/// Depth-first visitation order from `start`.
///
/// Produces the same order as the recursive formulation: a node is marked
/// when entered, and each frame resumes scanning its neighbors where it left
/// off once the child returns.
pub fn dfs_traverse(graph: &Graph, start: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    // (node, index of the next neighbor to inspect)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    visited.insert(start);
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let neighbors = graph.neighbors(node);
        let next = neighbors[cursor..]
            .iter()
            .position(|e| !visited.contains(&e.target));

        match next {
            Some(offset) => {
                let child = neighbors[cursor + offset].target;
                frame.1 = cursor + offset + 1;
                visited.insert(child);
                order.push(child);
                stack.push((child, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    trace!("dfs from {start}: {} nodes", order.len());
    order
}

/// Whether `target` can be reached from `source`. A node always reaches
/// itself; unknown nodes reach nothing else.
pub fn is_reachable(graph: &Graph, source: NodeId, target: NodeId) -> bool {
    if source == target {
        return true;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = vec![source];
    visited.insert(source);

    while let Some(current) = stack.pop() {
        for edge in graph.neighbors(current) {
            if edge.target == target {
                return true;
            }
            if visited.insert(edge.target) {
                stack.push(edge.target);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn dfs_resumes_parent_scan_after_child() {
        // 1 -> 2 -> 4, 1 -> 3, 2 -> 3: recursion visits 1 2 4 3.
        let g = GraphBuilder::new()
            .directed(true)
            .edge(1, 2)
            .edge(1, 3)
            .edge(2, 4)
            .edge(2, 3)
            .build();
        assert_eq!(dfs_traverse(&g, 1), vec![1, 2, 4, 3]);
    }

    #[test]
    fn bfs_marks_on_enqueue() {
        // 3 is reachable from both 1 and 2 but must appear once.
        let g = GraphBuilder::new()
            .directed(true)
            .edge(1, 2)
            .edge(1, 3)
            .edge(2, 3)
            .build();
        assert_eq!(bfs_traverse(&g, 1), vec![1, 2, 3]);
    }
}
