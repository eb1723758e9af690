//! Breadth-first graph traversal.
//!
//! The traversal is callback-driven: the visitor sees each reachable node at
//! most once, layer by layer, and can stop the whole walk by returning
//! `true`. The queue is explicit so arbitrarily large graphs cannot overflow
//! the call stack, and the visited set is transient per call — two
//! consecutive traversals never interfere through shared entity state.

use std::collections::VecDeque;

use super::container::Graph;
use super::types::{NodeIx, NodeRef};

/// Which adjacency list a traversal follows from each node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Every incident edge, regardless of direction.
    #[default]
    Both,
    /// Incoming edges only. Meaningful only for directed graphs; on an
    /// undirected graph the in-adjacency is empty.
    Incoming,
    /// Outgoing edges only. Meaningful only for directed graphs.
    Outgoing,
}

impl Graph {
    /// Breadth-first traversal from `start`.
    ///
    /// `visit` is invoked as `visit(node, from)` — first for the start node
    /// with `from = None`, then for each newly discovered neighbor with the
    /// node it was discovered from. Returning `true` stops the entire
    /// traversal immediately, even with queued nodes remaining.
    ///
    /// Neighbors are visited in adjacency-insertion order within a layer and
    /// in non-decreasing distance from `start` overall; each node is visited
    /// at most once. An unresolvable `start` makes the call a no-op.
    pub fn breadth_first<'a>(
        &self,
        start: impl Into<NodeRef<'a>>,
        direction: Direction,
        mut visit: impl FnMut(NodeIx, Option<NodeIx>) -> bool,
    ) {
        let Some(start) = self.resolve(start.into()) else {
            return;
        };

        if visit(start, None) {
            return;
        }

        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::new();
        visited[start.as_usize()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let node = &self.nodes()[current.as_usize()];
            let adjacency = match direction {
                Direction::Both => node.edges(),
                Direction::Incoming => node.in_edges(),
                Direction::Outgoing => node.out_edges(),
            };
            for &edge_ix in adjacency {
                let other = self.edges()[edge_ix.as_usize()].other_end(current);
                if visited[other.as_usize()] {
                    continue;
                }
                if visit(other, Some(current)) {
                    return;
                }
                visited[other.as_usize()] = true;
                queue.push_back(other);
            }
        }
    }
}
