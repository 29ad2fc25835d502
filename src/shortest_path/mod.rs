//! Single-pair shortest path strategies.
//!
//! - [`linear_scan`]: Dijkstra without a priority structure over the mapping, O(V²)
//! - [`binary_heap`]: Dijkstra with a lazy-deletion binary heap over the mapping, O((V+E) log V)
//! - [`dense_matrix`]: Dijkstra over matrix indices, O(V²)
//!
//! All three return `Ok(Some(cost))` for the minimum path cost, `Ok(None)`
//! when the target is unreachable, and an error when either endpoint is not
//! part of the graph. On identical graphs they agree up to floating-point
//! summation order.

mod binary_heap;
mod dense_matrix;
mod linear_scan;

use serde::{Deserialize, Serialize};

pub use binary_heap::binary_heap;
pub use dense_matrix::dense_matrix;
pub use linear_scan::linear_scan;

/// Graph representation a strategy operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// Node → (neighbor → weight) mapping.
    Adjacency,
    /// Dense n×n matrix.
    Matrix,
}

/// Selects one of the interchangeable shortest path strategies.
///
/// # Examples
///
/// ```
/// use u_delivery::shortest_path::{PathAlgorithm, Representation};
///
/// assert_eq!(PathAlgorithm::default(), PathAlgorithm::BinaryHeap);
/// assert_eq!(PathAlgorithm::DenseMatrix.representation(), Representation::Matrix);
/// assert_eq!(PathAlgorithm::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathAlgorithm {
    /// Plain relaxation scan over the mapping.
    LinearScan,
    /// Priority-queue relaxation over the mapping.
    #[default]
    BinaryHeap,
    /// Relaxation over the dense matrix.
    DenseMatrix,
}

impl PathAlgorithm {
    /// Every strategy, in comparison order.
    pub const ALL: [PathAlgorithm; 3] = [
        PathAlgorithm::LinearScan,
        PathAlgorithm::BinaryHeap,
        PathAlgorithm::DenseMatrix,
    ];

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            PathAlgorithm::LinearScan => "linear_scan",
            PathAlgorithm::BinaryHeap => "binary_heap",
            PathAlgorithm::DenseMatrix => "dense_matrix",
        }
    }

    /// The graph representation this strategy reads.
    pub fn representation(self) -> Representation {
        match self {
            PathAlgorithm::LinearScan | PathAlgorithm::BinaryHeap => Representation::Adjacency,
            PathAlgorithm::DenseMatrix => Representation::Matrix,
        }
    }
}

impl std::fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Converts an internal tentative distance into the public form.
fn finite(distance: f64) -> Option<f64> {
    distance.is_finite().then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let names: Vec<_> = PathAlgorithm::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["linear_scan", "binary_heap", "dense_matrix"]);
        assert_eq!(PathAlgorithm::LinearScan.to_string(), "linear_scan");
    }

    #[test]
    fn test_representations() {
        assert_eq!(
            PathAlgorithm::LinearScan.representation(),
            Representation::Adjacency
        );
        assert_eq!(
            PathAlgorithm::BinaryHeap.representation(),
            Representation::Adjacency
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&PathAlgorithm::DenseMatrix).expect("serialize");
        assert_eq!(json, "\"dense_matrix\"");
        let back: PathAlgorithm = serde_json::from_str("\"linear_scan\"").expect("parse");
        assert_eq!(back, PathAlgorithm::LinearScan);
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(3.0), Some(3.0));
        assert_eq!(finite(f64::INFINITY), None);
    }
}
