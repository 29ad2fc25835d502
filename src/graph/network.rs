//! Distribution network: node arena plus both graph representations.

use std::collections::HashMap;

use crate::error::{DeliveryError, Result};
use crate::shortest_path::{self, PathAlgorithm, Representation};

use super::{nearest, AdjacencyGraph, AdjacencyMatrix, Node, NodeId};

/// A static distribution graph in both mapping and matrix form.
///
/// Built once by [`GraphBuilder`](super::GraphBuilder) and read-only
/// afterwards. The matrix is derived from the mapping under `matrix_order`
/// (centers followed by destinations unless re-derived with
/// [`with_matrix_order`](Self::with_matrix_order)).
#[derive(Debug, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    adjacency: AdjacencyGraph,
    matrix: AdjacencyMatrix,
    matrix_order: Vec<NodeId>,
    matrix_position: Vec<usize>,
}

impl Network {
    /// Assembles a network from validated nodes and a mapping graph.
    pub(crate) fn from_parts(nodes: Vec<Node>, adjacency: AdjacencyGraph) -> Result<Self> {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.name().to_string(), NodeId::new(i)))
            .collect();
        let order: Vec<NodeId> = (0..nodes.len()).map(NodeId::new).collect();
        let matrix = AdjacencyMatrix::from_adjacency(&adjacency, &order)?;
        Ok(Self {
            nodes,
            index,
            adjacency,
            matrix,
            matrix_position: (0..order.len()).collect(),
            matrix_order: order,
        })
    }

    /// Re-derives the matrix under a different node order.
    ///
    /// Distances are unaffected; only matrix indices move.
    pub fn with_matrix_order(mut self, order: Vec<NodeId>) -> Result<Self> {
        self.matrix = AdjacencyMatrix::from_adjacency(&self.adjacency, &order)?;
        let mut position = vec![0; order.len()];
        for (pos, node) in order.iter().enumerate() {
            position[node.index()] = pos;
        }
        self.matrix_position = position;
        self.matrix_order = order;
        Ok(self)
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the network has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node with the given id, if any.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Looks up a node id by name.
    pub fn node_id(&self, name: &str) -> Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DeliveryError::UnknownNode(name.to_string()))
    }

    /// Name of a node, or an error if the id is outside the network.
    pub fn name_of(&self, id: NodeId) -> Result<&str> {
        self.node(id)
            .map(Node::name)
            .ok_or(DeliveryError::InvalidNodeId(id.index()))
    }

    /// Ids of all center nodes, in id order.
    pub fn centers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_center())
            .map(|(i, _)| NodeId::new(i))
    }

    /// Ids of all destination nodes, in id order.
    pub fn destinations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_destination())
            .map(|(i, _)| NodeId::new(i))
    }

    /// The mapping representation.
    pub fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    /// The dense matrix representation.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// The node order the matrix was derived with.
    pub fn matrix_order(&self) -> &[NodeId] {
        &self.matrix_order
    }

    /// Matrix row/column of a node.
    pub fn matrix_index(&self, id: NodeId) -> Result<usize> {
        self.matrix_position
            .get(id.index())
            .copied()
            .ok_or(DeliveryError::InvalidNodeId(id.index()))
    }

    /// Direct edge weight between two nodes, read from the mapping.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency.weight(from, to)
    }

    /// Shortest path cost between two nodes with the chosen algorithm.
    ///
    /// `Ok(None)` means `to` is unreachable from `from`.
    pub fn shortest_distance(
        &self,
        algorithm: PathAlgorithm,
        from: NodeId,
        to: NodeId,
    ) -> Result<Option<f64>> {
        match algorithm {
            PathAlgorithm::LinearScan => shortest_path::linear_scan(&self.adjacency, from, to),
            PathAlgorithm::BinaryHeap => shortest_path::binary_heap(&self.adjacency, from, to),
            PathAlgorithm::DenseMatrix => {
                let i = self.matrix_index(from)?;
                let j = self.matrix_index(to)?;
                shortest_path::dense_matrix(&self.matrix, i, j)
            }
        }
    }

    /// Shortest path cost between two nodes looked up by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_delivery::graph::GraphBuilder;
    /// use u_delivery::shortest_path::PathAlgorithm;
    ///
    /// let network = GraphBuilder::new(["C1", "C2"], ["D1"])
    ///     .build_with(|c, _| if c == "C1" { 100.0 } else { 500.0 })
    ///     .unwrap();
    /// let d = network.distance_between(PathAlgorithm::BinaryHeap, "C2", "D1").unwrap();
    /// assert_eq!(d, Some(500.0));
    /// assert!(network.distance_between(PathAlgorithm::BinaryHeap, "C9", "D1").is_err());
    /// ```
    pub fn distance_between(
        &self,
        algorithm: PathAlgorithm,
        from: &str,
        to: &str,
    ) -> Result<Option<f64>> {
        let from = self.node_id(from)?;
        let to = self.node_id(to)?;
        self.shortest_distance(algorithm, from, to)
    }

    /// Center with the smallest direct edge weight to `destination`,
    /// scanned through the given representation.
    pub fn nearest_center(
        &self,
        representation: Representation,
        destination: NodeId,
    ) -> Result<Option<NodeId>> {
        match representation {
            Representation::Adjacency => nearest::nearest_center_adjacency(self, destination),
            Representation::Matrix => nearest::nearest_center_matrix(self, destination),
        }
    }
}
