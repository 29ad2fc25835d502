//! Delivery vehicle with capacity, duty-hours and speed.

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, Result};

/// A truck available for allocation.
///
/// Nominal values only; the remaining capacity and hours during an
/// allocation run are tracked separately in [`VehicleState`].
///
/// # Examples
///
/// ```
/// use u_delivery::models::Vehicle;
///
/// let v = Vehicle::new(0, 1500, 10.0, 70.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 1500);
/// assert!((v.travel_time(140.0) - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
    duty_hours: f64,
    speed: f64,
}

impl Vehicle {
    /// Creates a vehicle.
    ///
    /// * `capacity`: maximum cargo weight units
    /// * `duty_hours`: maximum hours of travel per allocation run
    /// * `speed`: average distance units per hour
    pub fn new(id: usize, capacity: i32, duty_hours: f64, speed: f64) -> Self {
        Self {
            id,
            capacity,
            duty_hours,
            speed,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Duty-hours limit.
    pub fn duty_hours(&self) -> f64 {
        self.duty_hours
    }

    /// Average speed (distance per hour).
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Hours needed to cover `distance` at this vehicle's speed.
    pub fn travel_time(&self, distance: f64) -> f64 {
        distance / self.speed
    }

    /// Checks that the vehicle can take part in an allocation.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.capacity < 0 {
            "capacity must be non-negative"
        } else if !self.duty_hours.is_finite() || self.duty_hours < 0.0 {
            "duty hours must be finite and non-negative"
        } else if !self.speed.is_finite() || self.speed <= 0.0 {
            "speed must be finite and positive"
        } else {
            return Ok(());
        };
        Err(DeliveryError::InvalidVehicle {
            id: self.id,
            reason: reason.to_string(),
        })
    }
}

/// Mutable per-run counters for one vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Capacity not yet consumed by accepted orders.
    pub remaining_capacity: i32,
    /// Duty hours not yet consumed by accepted orders.
    pub remaining_hours: f64,
}

impl VehicleState {
    /// Fresh state with the vehicle's full capacity and hours.
    pub fn new(vehicle: &Vehicle) -> Self {
        Self {
            remaining_capacity: vehicle.capacity(),
            remaining_hours: vehicle.duty_hours(),
        }
    }

    /// Returns `true` if a load of `cargo` taking `hours` still fits.
    pub fn can_accept(&self, cargo: i32, hours: f64) -> bool {
        cargo <= self.remaining_capacity && hours <= self.remaining_hours
    }

    /// Deducts an accepted load.
    pub fn consume(&mut self, cargo: i32, hours: f64) {
        self.remaining_capacity -= cargo;
        self.remaining_hours -= hours;
    }
}
