//! Domain model types for delivery allocation.
//!
//! Orders and vehicles are plain input records; allocations and the plan
//! that collects them are the output of an allocation run.

mod allocation;
mod order;
mod plan;
mod vehicle;

pub use allocation::{Allocation, Delivery};
pub use order::Order;
pub use plan::{AllocationPlan, UnallocatedOrder, UnallocatedReason, Violation, ViolationType};
pub use vehicle::{Vehicle, VehicleState};
