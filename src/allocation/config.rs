//! Allocation configuration.

use serde::{Deserialize, Serialize};

use crate::shortest_path::PathAlgorithm;

/// What happens to a vehicle that accepts no order at a center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleReusePolicy {
    /// The vehicle stays available for later centers.
    #[default]
    RetainUnused,
    /// Every vehicle considered at a center is withdrawn, even with no orders.
    ConsumeVisited,
}

/// Configuration for [`allocate`](super::allocate).
///
/// # Examples
///
/// ```
/// use u_delivery::allocation::{AllocationConfig, VehicleReusePolicy};
/// use u_delivery::shortest_path::PathAlgorithm;
///
/// let config = AllocationConfig::default()
///     .with_algorithm(PathAlgorithm::DenseMatrix)
///     .with_reuse_policy(VehicleReusePolicy::ConsumeVisited);
/// assert_eq!(config.algorithm, PathAlgorithm::DenseMatrix);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Strategy used for center → destination distances. Its representation
    /// also selects the nearest-center scan.
    pub algorithm: PathAlgorithm,

    /// Handling of vehicles that accept nothing at a center.
    pub reuse_policy: VehicleReusePolicy,
}

impl AllocationConfig {
    pub fn with_algorithm(mut self, algorithm: PathAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_reuse_policy(mut self, policy: VehicleReusePolicy) -> Self {
        self.reuse_policy = policy;
        self
    }
}
