//! Dijkstra with a binary min-heap and lazy deletion.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{DeliveryError, Result};
use crate::graph::{AdjacencyGraph, NodeId};

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path cost from `from` to `to` using a priority queue.
///
/// Stale heap entries (popped with a cost above the recorded distance) are
/// skipped. Returns as soon as the target is popped.
///
/// # Complexity
///
/// O((V + E) log V) per query.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{AdjacencyGraph, NodeId};
/// use u_delivery::shortest_path::binary_heap;
///
/// let mut g = AdjacencyGraph::new(3);
/// g.add_symmetric_edge(NodeId::new(0), NodeId::new(1), 4.0);
/// g.add_symmetric_edge(NodeId::new(1), NodeId::new(2), 6.0);
/// g.add_symmetric_edge(NodeId::new(0), NodeId::new(2), 12.0);
/// assert_eq!(binary_heap(&g, NodeId::new(0), NodeId::new(2)).unwrap(), Some(10.0));
/// ```
pub fn binary_heap(graph: &AdjacencyGraph, from: NodeId, to: NodeId) -> Result<Option<f64>> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(DeliveryError::InvalidNodeId(node.index()));
        }
    }

    let mut distances = vec![f64::INFINITY; graph.size()];
    let mut heap = BinaryHeap::new();
    distances[from.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: from,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == to {
            return Ok(Some(cost));
        }
        if cost > distances[node.index()] {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(node) {
            let candidate = cost + weight;
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                heap.push(State {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    Ok(None)
}
