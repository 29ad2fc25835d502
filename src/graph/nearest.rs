//! Nearest-center resolution by direct edge weight.
//!
//! Both entry points scan only center nodes and compare the weight of the
//! single edge to the destination. No path search is involved, so each call
//! is O(number of nodes). Ties go to the first center encountered.

use crate::error::{DeliveryError, Result};

use super::{Network, NodeId};

/// Nearest center to `destination`, read from the adjacency mapping.
///
/// Centers are scanned in node id order. Returns `Ok(None)` if no center
/// has an edge to the destination.
///
/// # Examples
///
/// ```
/// use u_delivery::graph::{nearest_center_adjacency, GraphBuilder};
///
/// let network = GraphBuilder::new(["C1", "C2"], ["D1"])
///     .build_with(|c, _| if c == "C1" { 100.0 } else { 500.0 })
///     .unwrap();
/// let d1 = network.node_id("D1").unwrap();
/// let nearest = nearest_center_adjacency(&network, d1).unwrap();
/// assert_eq!(nearest, Some(network.node_id("C1").unwrap()));
/// ```
pub fn nearest_center_adjacency(network: &Network, destination: NodeId) -> Result<Option<NodeId>> {
    if network.node(destination).is_none() {
        return Err(DeliveryError::InvalidNodeId(destination.index()));
    }
    let graph = network.adjacency();

    let mut best: Option<(NodeId, f64)> = None;
    for center in network.centers() {
        if center == destination {
            continue;
        }
        let Some(w) = graph.weight(center, destination) else {
            continue;
        };
        if best.map_or(true, |(_, bw)| w < bw) {
            best = Some((center, w));
        }
    }
    Ok(best.map(|(c, _)| c))
}

/// Nearest center to `destination`, read from the dense matrix.
///
/// Centers are scanned in node id order whatever the matrix order is, so
/// the result always equals [`nearest_center_adjacency`].
pub fn nearest_center_matrix(network: &Network, destination: NodeId) -> Result<Option<NodeId>> {
    let col = network.matrix_index(destination)?;
    let matrix = network.matrix();

    let mut best: Option<(NodeId, f64)> = None;
    for center in network.centers() {
        if center == destination {
            continue;
        }
        let Some(w) = matrix.get(network.matrix_index(center)?, col) else {
            continue;
        };
        if best.map_or(true, |(_, bw)| w < bw) {
            best = Some((center, w));
        }
    }
    Ok(best.map(|(c, _)| c))
}
