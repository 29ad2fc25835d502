//! Dijkstra by repeated linear scan for the closest unvisited node.

use crate::error::{DeliveryError, Result};
use crate::graph::{AdjacencyGraph, NodeId};

use super::finite;

/// Shortest path cost from `from` to `to` without a priority structure.
///
/// Each round scans every unvisited node for the minimum tentative distance,
/// marks it visited and relaxes its neighbors. Stops as soon as the target
/// is selected or no reachable unvisited node remains.
///
/// # Complexity
///
/// O(V² + E) per query.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{AdjacencyGraph, NodeId};
/// use u_delivery::shortest_path::linear_scan;
///
/// let mut g = AdjacencyGraph::new(3);
/// g.add_symmetric_edge(NodeId::new(0), NodeId::new(1), 4.0);
/// g.add_symmetric_edge(NodeId::new(1), NodeId::new(2), 6.0);
/// assert_eq!(linear_scan(&g, NodeId::new(0), NodeId::new(2)).unwrap(), Some(10.0));
/// ```
pub fn linear_scan(graph: &AdjacencyGraph, from: NodeId, to: NodeId) -> Result<Option<f64>> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(DeliveryError::InvalidNodeId(node.index()));
        }
    }

    let n = graph.size();
    let mut distances = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    distances[from.index()] = 0.0;

    loop {
        let mut current: Option<usize> = None;
        let mut closest = f64::INFINITY;
        for (i, &d) in distances.iter().enumerate() {
            if !visited[i] && d < closest {
                current = Some(i);
                closest = d;
            }
        }

        let Some(current) = current else {
            break;
        };
        if current == to.index() {
            break;
        }
        visited[current] = true;

        for (neighbor, weight) in graph.neighbors(NodeId::new(current)) {
            let candidate = closest + weight;
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
            }
        }
    }

    Ok(finite(distances[to.index()]))
}
