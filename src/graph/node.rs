//! Node identifiers and kinds.

use serde::{Deserialize, Serialize};

/// Dense index of a node inside a [`Network`](super::Network).
///
/// Ids are assigned in insertion order: centers first, then destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The two disjoint kinds of node in a distribution graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// A distribution center that vehicles depart from.
    Center,
    /// A delivery destination that orders target.
    Destination,
}

/// A named node tagged with its kind.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{Node, NodeKind};
///
/// let node = Node::center("Recife");
/// assert_eq!(node.kind(), NodeKind::Center);
/// assert!(node.is_center());
/// assert_eq!(node.name(), "Recife");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    name: String,
}

impl Node {
    /// Creates a node of the given kind.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Creates a distribution center node.
    pub fn center(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Center, name)
    }

    /// Creates a delivery destination node.
    pub fn destination(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Destination, name)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_center(&self) -> bool {
        self.kind == NodeKind::Center
    }

    pub fn is_destination(&self) -> bool {
        self.kind == NodeKind::Destination
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kinds() {
        let c = Node::center("Belém");
        let d = Node::destination("Destination 0");
        assert!(c.is_center());
        assert!(!c.is_destination());
        assert!(d.is_destination());
        assert_eq!(d.kind(), NodeKind::Destination);
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::center("São Paulo").to_string(), "São Paulo");
        assert_eq!(NodeId::new(4).to_string(), "#4");
    }

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert_eq!(NodeId::new(7).index(), 7);
    }
}
