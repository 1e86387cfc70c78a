//! Path search: simple-path enumeration and hop-count shortest path.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{trace, warn};

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Limits applied to simple-path enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLimits {
    /// Node ids must lie in `0..bound`. `None` accepts any id.
    pub node_bound: Option<usize>,
    /// Stop after this many paths. `None` enumerates all of them.
    pub max_paths: Option<usize>,
}

fn check_bound(node: NodeId, bound: Option<usize>) -> GraphResult<()> {
    let Some(bound) = bound else {
        return Ok(());
    };
    let in_range = usize::try_from(node).is_ok_and(|n| n < bound);
    if in_range {
        Ok(())
    } else {
        warn!("node {node} outside bound 0..{bound}");
        Err(GraphError::InvalidArgument(format!(
            "node {node} is outside the node range 0..{bound}"
        )))
    }
}

/// Enumerate every simple path from `source` to `target`, in discovery order.
///
/// Backtracking runs on an explicit stack: each frame holds a node and the
/// index of its next neighbor, and the current path/visited set are pushed
/// and popped alongside it. Exponential in the worst case.
pub fn all_simple_paths(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    limits: PathLimits,
) -> GraphResult<Vec<Vec<NodeId>>> {
    check_bound(source, limits.node_bound)?;
    check_bound(target, limits.node_bound)?;

    let mut paths: Vec<Vec<NodeId>> = Vec::new();
    if limits.max_paths == Some(0) {
        return Ok(paths);
    }
    if source == target {
        paths.push(vec![source]);
        return Ok(paths);
    }

    let mut path: Vec<NodeId> = vec![source];
    let mut on_path: HashSet<NodeId> = HashSet::from([source]);
    let mut stack: Vec<(NodeId, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        let neighbors = graph.neighbors(node);

        let Some(offset) = neighbors[cursor..]
            .iter()
            .position(|e| !on_path.contains(&e.target))
        else {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
            continue;
        };

        let next = neighbors[cursor + offset].target;
        frame.1 = cursor + offset + 1;
        check_bound(next, limits.node_bound)?;

        if next == target {
            let mut found = path.clone();
            found.push(next);
            paths.push(found);
            if limits.max_paths.is_some_and(|max| paths.len() >= max) {
                break;
            }
        } else {
            path.push(next);
            on_path.insert(next);
            stack.push((next, 0));
        }
    }

    trace!("all paths {source} -> {target}: {} found", paths.len());
    Ok(paths)
}

/// Minimum hop-count path from `source` to `target`, ignoring weights.
///
/// Returns `[source]` when both ends coincide and an empty path when
/// `target` is unreachable.
pub fn shortest_hop_path(graph: &Graph, source: NodeId, target: NodeId) -> Vec<NodeId> {
    // Presence in `parent` doubles as "distance is finite".
    let mut parent: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    parent.insert(source, None);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            break;
        }
        for edge in graph.neighbors(current) {
            if !parent.contains_key(&edge.target) {
                parent.insert(edge.target, Some(current));
                queue.push_back(edge.target);
            }
        }
    }

    if !parent.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut at = target;
    while let Some(&Some(prev)) = parent.get(&at) {
        path.push(prev);
        at = prev;
    }
    path.reverse();
    path
}
