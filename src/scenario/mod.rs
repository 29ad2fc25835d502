//! Synthetic scenarios for allocation runs.
//!
//! A [`ScenarioConfig`] describes node names, fleet and order counts, value
//! ranges and the random seed; [`generate`] turns it into orders, vehicles
//! and a [`Network`](crate::graph::Network).

mod config;
mod generator;

pub use config::{IntRange, ScenarioConfig};
pub use generator::{generate, generate_orders, generate_vehicles, Scenario};
