//! Dijkstra over a dense adjacency matrix.

use crate::error::{DeliveryError, Result};
use crate::graph::AdjacencyMatrix;

use super::finite;

/// Shortest path cost between matrix positions `from` and `to`.
///
/// Same relaxation as [`linear_scan`](super::linear_scan), but neighbors are
/// found by walking the matrix row and skipping absent entries.
///
/// # Complexity
///
/// O(V²) per query.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::AdjacencyMatrix;
/// use u_delivery::shortest_path::dense_matrix;
///
/// let mut m = AdjacencyMatrix::new(3);
/// m.set(0, 1, Some(4.0));
/// m.set(1, 2, Some(6.0));
/// assert_eq!(dense_matrix(&m, 0, 2).unwrap(), Some(10.0));
/// assert_eq!(dense_matrix(&m, 2, 0).unwrap(), None);
/// ```
pub fn dense_matrix(matrix: &AdjacencyMatrix, from: usize, to: usize) -> Result<Option<f64>> {
    let n = matrix.size();
    for index in [from, to] {
        if index >= n {
            return Err(DeliveryError::InvalidNodeId(index));
        }
    }

    let mut distances = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    distances[from] = 0.0;

    for _ in 0..n {
        let mut current: Option<usize> = None;
        let mut closest = f64::INFINITY;
        for i in 0..n {
            if !visited[i] && distances[i] < closest {
                current = Some(i);
                closest = distances[i];
            }
        }

        let Some(current) = current else {
            break;
        };
        if current == to {
            break;
        }
        visited[current] = true;

        for neighbor in 0..n {
            if visited[neighbor] {
                continue;
            }
            if let Some(weight) = matrix.get(current, neighbor) {
                let candidate = closest + weight;
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                }
            }
        }
    }

    Ok(finite(distances[to]))
}
