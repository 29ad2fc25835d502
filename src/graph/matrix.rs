//! Dense adjacency matrix.

use crate::error::{DeliveryError, Result};

use super::{AdjacencyGraph, NodeId};

/// A dense n×n adjacency matrix stored in row-major order.
///
/// Entries are `None` where no direct edge exists; the diagonal is always
/// `Some(0.0)`. Indices are positions in the node order the matrix was
/// derived with, not necessarily [`NodeId`] indices.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{AdjacencyGraph, AdjacencyMatrix, NodeId};
///
/// let mut g = AdjacencyGraph::new(3);
/// g.add_symmetric_edge(NodeId::new(0), NodeId::new(2), 120.0);
///
/// let order = [NodeId::new(0), NodeId::new(1), NodeId::new(2)];
/// let m = AdjacencyMatrix::from_adjacency(&g, &order).unwrap();
/// assert_eq!(m.get(0, 2), Some(120.0));
/// assert_eq!(m.get(0, 1), None);
/// assert_eq!(m.get(1, 1), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates a matrix of the given size with no edges.
    pub fn new(size: usize) -> Self {
        let mut data = vec![None; size * size];
        for i in 0..size {
            data[i * size + i] = Some(0.0);
        }
        Self { data, size }
    }

    /// Derives the matrix of `graph` under the given node order.
    ///
    /// Row/column `i` corresponds to `order[i]`. The order must list every
    /// node of the graph exactly once.
    pub fn from_adjacency(graph: &AdjacencyGraph, order: &[NodeId]) -> Result<Self> {
        let n = graph.size();
        if order.len() != n {
            return Err(DeliveryError::InvalidConfig(format!(
                "node order has {} entries, graph has {n} nodes",
                order.len()
            )));
        }

        let mut position = vec![usize::MAX; n];
        for (pos, &node) in order.iter().enumerate() {
            if !graph.contains(node) {
                return Err(DeliveryError::InvalidNodeId(node.index()));
            }
            if position[node.index()] != usize::MAX {
                return Err(DeliveryError::InvalidConfig(format!(
                    "node {node} appears twice in node order"
                )));
            }
            position[node.index()] = pos;
        }

        let mut matrix = Self::new(n);
        for (i, &from) in order.iter().enumerate() {
            for (to, w) in graph.neighbors(from) {
                let j = position[to.index()];
                if i != j {
                    matrix.set(i, j, Some(w));
                }
            }
        }
        Ok(matrix)
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<Option<f64>>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the edge weight from position `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.data[from * self.size + to]
    }

    /// Sets the edge weight from position `from` to position `to`.
    pub fn set(&mut self, from: usize, to: usize, weight: Option<f64>) {
        self.data[from * self.size + to] = weight;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// An edge present in one direction only is asymmetric.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                match (self.get(i, j), self.get(j, i)) {
                    (None, None) => {}
                    (Some(a), Some(b)) if (a - b).abs() <= tol => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
