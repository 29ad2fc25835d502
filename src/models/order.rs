//! Delivery order.

use serde::{Deserialize, Serialize};

use crate::error::{DeliveryError, Result};

/// A delivery order: cargo to bring to a destination before a deadline.
///
/// Orders are immutable; an allocation run either assigns each order to one
/// vehicle or reports it as unallocated.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Order;
///
/// let o = Order::new(1, "Destination 1", 24.0, 120);
/// assert_eq!(o.destination(), "Destination 1");
/// assert_eq!(o.cargo(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: usize,
    destination: String,
    deadline_hours: f64,
    cargo: i32,
}

impl Order {
    /// Creates an order.
    pub fn new(id: usize, destination: impl Into<String>, deadline_hours: f64, cargo: i32) -> Self {
        Self {
            id,
            destination: destination.into(),
            deadline_hours,
            cargo,
        }
    }

    /// Order ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Name of the destination node.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Deadline in hours; smaller is more urgent.
    pub fn deadline_hours(&self) -> f64 {
        self.deadline_hours
    }

    /// Cargo weight units.
    pub fn cargo(&self) -> i32 {
        self.cargo
    }

    /// Checks that the order can take part in an allocation.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.cargo < 0 {
            "cargo must be non-negative"
        } else if !self.deadline_hours.is_finite() {
            "deadline must be finite"
        } else {
            return Ok(());
        };
        Err(DeliveryError::InvalidOrder {
            id: self.id,
            reason: reason.to_string(),
        })
    }
}
