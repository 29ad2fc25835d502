//! Allocation record: one vehicle bound to a batch of orders.

use serde::{Deserialize, Serialize};

use super::{Order, Vehicle};

/// A single accepted order within an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Order ID.
    pub order_id: usize,
    /// Destination node name.
    pub destination: String,
    /// Cargo weight units.
    pub cargo: i32,
    /// Order deadline in hours.
    pub deadline_hours: f64,
    /// Shortest path distance from the center to the destination.
    pub distance: f64,
    /// Cumulative load after this delivery.
    pub load_after: i32,
}

impl Delivery {
    /// Builds a delivery entry for an accepted order.
    pub fn new(order: &Order, distance: f64, load_after: i32) -> Self {
        Self {
            order_id: order.id(),
            destination: order.destination().to_string(),
            cargo: order.cargo(),
            deadline_hours: order.deadline_hours(),
            distance,
            load_after,
        }
    }
}

/// Orders accepted by one vehicle departing from one center.
///
/// Only vehicles that accept at least one order produce an allocation.
/// Deliveries are kept in acceptance order.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Allocation, Delivery, Order, Vehicle};
///
/// let vehicle = Vehicle::new(0, 150, 10.0, 50.0);
/// let order = Order::new(1, "D1", 24.0, 100);
/// let mut a = Allocation::new(vehicle, "C1");
/// a.push_delivery(Delivery::new(&order, 100.0, 100));
/// assert_eq!(a.len(), 1);
/// assert_eq!(a.total_distance(), 100.0);
/// assert!((a.total_time() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    vehicle: Vehicle,
    center: String,
    deliveries: Vec<Delivery>,
    total_distance: f64,
    total_load: i32,
}

impl Allocation {
    /// Creates an empty allocation for the given vehicle and center.
    pub fn new(vehicle: Vehicle, center: impl Into<String>) -> Self {
        Self {
            vehicle,
            center: center.into(),
            deliveries: Vec::new(),
            total_distance: 0.0,
            total_load: 0,
        }
    }

    /// Appends an accepted delivery.
    pub fn push_delivery(&mut self, delivery: Delivery) {
        self.total_distance += delivery.distance;
        self.total_load = delivery.load_after;
        self.deliveries.push(delivery);
    }

    /// The vehicle serving this allocation.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Vehicle ID.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle.id()
    }

    /// Name of the originating center.
    pub fn center(&self) -> &str {
        &self.center
    }

    /// Accepted deliveries in acceptance order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Number of accepted orders.
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Returns `true` if no order was accepted.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Accepted order IDs in acceptance order.
    pub fn order_ids(&self) -> Vec<usize> {
        self.deliveries.iter().map(|d| d.order_id).collect()
    }

    /// Sum of center → destination distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total travel hours: total distance over vehicle speed.
    pub fn total_time(&self) -> f64 {
        self.vehicle.travel_time(self.total_distance)
    }

    /// Total cargo carried.
    pub fn total_load(&self) -> i32 {
        self.total_load
    }
}
