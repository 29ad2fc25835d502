//! Distribution graphs.
//!
//! A [`Network`] is a complete bipartite graph between distribution centers
//! and delivery destinations, held in two equivalent representations: an
//! [`AdjacencyGraph`] mapping and a dense [`AdjacencyMatrix`]. Networks are
//! built by [`GraphBuilder`] and never modified afterwards.

mod adjacency;
mod builder;
mod matrix;
mod nearest;
mod network;
mod node;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use matrix::AdjacencyMatrix;
pub use nearest::{nearest_center_adjacency, nearest_center_matrix};
pub use network::Network;
pub use node::{Node, NodeId, NodeKind};
