//! # u-delivery
//!
//! Delivery allocation over a bipartite network of distribution centers and
//! destinations. Orders are grouped by their nearest center and packed onto
//! trucks greedily by deadline, under capacity and duty-hours limits.
//!
//! ## Modules
//!
//! - [`graph`]: Network nodes, adjacency mapping, dense matrix, nearest-center lookup
//! - [`shortest_path`]: Dijkstra by linear scan, binary heap and dense matrix
//! - [`models`]: Orders, vehicles, allocations and plans
//! - [`allocation`]: Greedy allocation engine and plan verification
//! - [`scenario`]: Seeded synthetic scenarios and their configuration
//! - [`report`]: Text and JSON plan reports
//! - [`benchmark`]: Timing and peak-memory measurement of allocation runs

pub mod allocation;
pub mod benchmark;
pub mod error;
pub mod graph;
pub mod models;
pub mod report;
pub mod scenario;
pub mod shortest_path;

pub use error::{DeliveryError, Result};
