//! Construction of complete bipartite distribution graphs.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::error::{DeliveryError, Result};

use super::{AdjacencyGraph, Network, Node, NodeId};

/// Builds a [`Network`] connecting every center to every destination.
///
/// Edge weights are symmetric by construction: each (center, destination)
/// pair gets one weight that is stored in both directions. No edges are
/// created between two centers or between two destinations.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_delivery::graph::GraphBuilder;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let network = GraphBuilder::new(["Recife", "Belém"], ["Destination 0", "Destination 1"])
///     .with_weight_range(100, 1000)
///     .build(&mut rng)
///     .unwrap();
///
/// assert_eq!(network.len(), 4);
/// assert_eq!(network.adjacency().num_edges(), 8);
/// assert!(network.adjacency().is_symmetric(0.0));
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    centers: Vec<String>,
    destinations: Vec<String>,
    min_weight: u32,
    max_weight: u32,
}

impl GraphBuilder {
    /// Creates a builder with the default weight range `[100, 1000]`.
    pub fn new<C, D>(centers: C, destinations: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            centers: centers.into_iter().map(Into::into).collect(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            min_weight: 100,
            max_weight: 1000,
        }
    }

    /// Sets the inclusive range for randomly drawn integer weights.
    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Center names in insertion order.
    pub fn centers(&self) -> &[String] {
        &self.centers
    }

    /// Destination names in insertion order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Builds the network with weights drawn uniformly from the weight range.
    ///
    /// Weights are drawn center by center, destination by destination.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Network> {
        if self.min_weight > self.max_weight {
            return Err(DeliveryError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        let (min, max) = (self.min_weight, self.max_weight);
        self.build_with(|_, _| f64::from(rng.random_range(min..=max)))
    }

    /// Builds the network with externally supplied weights.
    ///
    /// `weight(center, destination)` is called exactly once per pair. Weights
    /// must be non-negative and small enough that the cost of any simple path
    /// is finite.
    pub fn build_with<F>(&self, mut weight: F) -> Result<Network>
    where
        F: FnMut(&str, &str) -> f64,
    {
        self.validate()?;

        let nodes: Vec<Node> = self
            .centers
            .iter()
            .map(Node::center)
            .chain(self.destinations.iter().map(Node::destination))
            .collect();
        let offset = self.centers.len();
        // a simple path has at most len - 1 edges, so its cost stays finite
        let weight_cap = f64::MAX / nodes.len().saturating_sub(1).max(1) as f64;

        let mut graph = AdjacencyGraph::new(nodes.len());
        for (ci, center) in self.centers.iter().enumerate() {
            for (di, destination) in self.destinations.iter().enumerate() {
                let w = weight(center, destination);
                if !w.is_finite() || !(0.0..=weight_cap).contains(&w) {
                    return Err(DeliveryError::InvalidWeight {
                        from: center.clone(),
                        to: destination.clone(),
                        weight: w,
                    });
                }
                graph.add_symmetric_edge(NodeId::new(ci), NodeId::new(offset + di), w);
            }
        }

        debug!(
            centers = self.centers.len(),
            destinations = self.destinations.len(),
            edges = graph.num_edges(),
            "built distribution graph"
        );
        Network::from_parts(nodes, graph)
    }

    /// Checks the node lists for configuration errors.
    pub fn validate(&self) -> Result<()> {
        if self.centers.is_empty() {
            return Err(DeliveryError::NoCenters);
        }
        if self.destinations.is_empty() {
            return Err(DeliveryError::NoDestinations);
        }
        let mut seen = HashSet::new();
        for name in self.centers.iter().chain(&self.destinations) {
            if name.is_empty() {
                return Err(DeliveryError::EmptyNodeName);
            }
            if !seen.insert(name.as_str()) {
                return Err(DeliveryError::DuplicateNode(name.clone()));
            }
        }
        Ok(())
    }
}
