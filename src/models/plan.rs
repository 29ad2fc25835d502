//! Allocation plan and violation types.

use serde::{Deserialize, Serialize};

use super::{Allocation, Order, Vehicle};

/// Why an order was not assigned to any vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnallocatedReason {
    /// No center has an edge to the order's destination.
    Unroutable,
    /// A center was found, but no available vehicle could take the order.
    NoFeasibleVehicle,
}

/// An order left out of every allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnallocatedOrder {
    pub order_id: usize,
    pub reason: UnallocatedReason,
}

/// A type of inconsistency found when checking a plan against its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Total cargo of an allocation exceeds the vehicle capacity.
    CapacityExceeded {
        vehicle_id: usize,
        load: i32,
        capacity: i32,
    },
    /// Total travel time of an allocation exceeds the duty-hours limit.
    DutyHoursExceeded {
        vehicle_id: usize,
        hours: f64,
        limit: f64,
    },
    /// Deliveries of an allocation are not in non-decreasing deadline order.
    DeadlineOrderBroken { vehicle_id: usize },
    /// An order appears more than once across allocations and unallocated.
    OrderDuplicated { order_id: usize },
    /// An input order appears nowhere in the plan.
    OrderMissing { order_id: usize },
    /// The plan mentions an order that was not in the input.
    UnknownOrder { order_id: usize },
    /// A vehicle serves more than one allocation, or is both used and unused.
    VehicleReused { vehicle_id: usize },
    /// An input vehicle is neither allocated nor listed as unused.
    VehicleUnaccounted { vehicle_id: usize },
    /// The plan mentions a vehicle that was not in the input.
    UnknownVehicle { vehicle_id: usize },
    /// A delivery's cargo or deadline differs from the input order.
    DeliveryMismatch { vehicle_id: usize, order_id: usize },
}

/// A consistency violation in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Result of an allocation run.
///
/// Holds the allocation records plus the explicit remainder: unallocated
/// orders and vehicles that received nothing.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{AllocationPlan, UnallocatedReason};
///
/// let mut plan = AllocationPlan::new();
/// plan.add_unallocated(3, UnallocatedReason::Unroutable);
/// plan.add_unused_vehicle(0);
/// assert_eq!(plan.num_allocations(), 0);
/// assert_eq!(plan.num_unallocated(), 1);
/// assert_eq!(plan.unused_vehicles(), &[0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    allocations: Vec<Allocation>,
    unallocated: Vec<UnallocatedOrder>,
    unused_vehicles: Vec<usize>,
}

impl AllocationPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an allocation record.
    pub fn add_allocation(&mut self, allocation: Allocation) {
        self.allocations.push(allocation);
    }

    /// Marks an order as unallocated.
    pub fn add_unallocated(&mut self, order_id: usize, reason: UnallocatedReason) {
        self.unallocated.push(UnallocatedOrder { order_id, reason });
    }

    /// Marks a vehicle as unused.
    pub fn add_unused_vehicle(&mut self, vehicle_id: usize) {
        self.unused_vehicles.push(vehicle_id);
    }

    /// Allocation records in creation order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Number of allocation records (vehicles used).
    pub fn num_allocations(&self) -> usize {
        self.allocations.len()
    }

    /// Orders not assigned to any vehicle.
    pub fn unallocated(&self) -> &[UnallocatedOrder] {
        &self.unallocated
    }

    /// Number of unallocated orders.
    pub fn num_unallocated(&self) -> usize {
        self.unallocated.len()
    }

    /// Number of unallocated orders with the given reason.
    pub fn count_unallocated(&self, reason: UnallocatedReason) -> usize {
        self.unallocated.iter().filter(|u| u.reason == reason).count()
    }

    /// IDs of vehicles without an allocation, in input order.
    pub fn unused_vehicles(&self) -> &[usize] {
        &self.unused_vehicles
    }

    /// Total number of orders served across allocations.
    pub fn num_allocated_orders(&self) -> usize {
        self.allocations.iter().map(Allocation::len).sum()
    }

    /// Total distance across allocations.
    pub fn total_distance(&self) -> f64 {
        self.allocations.iter().map(Allocation::total_distance).sum()
    }

    /// Checks this plan against the inputs it was produced from.
    ///
    /// See [`verify_plan`](crate::allocation::verify_plan).
    pub fn verify(&self, orders: &[Order], vehicles: &[Vehicle]) -> Vec<Violation> {
        crate::allocation::verify_plan(self, orders, vehicles)
    }
}
