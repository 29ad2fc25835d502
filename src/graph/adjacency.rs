//! Adjacency-mapping graph representation.

use std::collections::BTreeMap;

use super::NodeId;

/// Weighted graph stored as a mapping from each node to its neighbors.
///
/// Neighbors are kept in a `BTreeMap` so iteration order (and therefore any
/// tie-breaking that depends on it) is deterministic.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{AdjacencyGraph, NodeId};
///
/// let mut g = AdjacencyGraph::new(3);
/// g.add_symmetric_edge(NodeId::new(0), NodeId::new(2), 150.0);
/// assert_eq!(g.weight(NodeId::new(2), NodeId::new(0)), Some(150.0));
/// assert_eq!(g.weight(NodeId::new(0), NodeId::new(1)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    edges: Vec<BTreeMap<NodeId, f64>>,
}

impl AdjacencyGraph {
    /// Creates a graph with `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            edges: vec![BTreeMap::new(); size],
        }
    }

    /// Inserts (or replaces) the directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.edges[from.index()].insert(to, weight);
    }

    /// Inserts the edge in both directions with the same weight.
    pub fn add_symmetric_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Direct edge weight `from → to`, if the edge exists.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges.get(from.index())?.get(&to).copied()
    }

    /// Neighbors of `node` with their edge weights, in ascending id order.
    ///
    /// Yields nothing for a node outside the graph.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.edges
            .get(node.index())
            .into_iter()
            .flat_map(|m| m.iter().map(|(&n, &w)| (n, w)))
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.iter().map(BTreeMap::len).sum()
    }

    /// Returns `true` if `node` is a valid index in this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.edges.len()
    }

    /// Returns `true` if every edge has a reverse edge of equal weight.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.edges.iter().enumerate().all(|(i, m)| {
            m.iter().all(|(&to, &w)| {
                self.weight(to, NodeId::new(i))
                    .is_some_and(|back| (back - w).abs() <= tol)
            })
        })
    }
}
