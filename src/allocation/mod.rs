//! Greedy allocation of delivery orders to vehicles.
//!
//! - [`allocate`]: nearest-center grouping followed by per-vehicle greedy batching
//! - [`verify_plan`]: conservation and feasibility checks of a finished plan

mod config;
mod engine;
mod verify;

pub use config::{AllocationConfig, VehicleReusePolicy};
pub use engine::allocate;
pub use verify::verify_plan;
