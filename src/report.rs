//! Human-readable and JSON reporting of allocation plans.

use std::fmt;

use serde::Serialize;

use crate::error::{DeliveryError, Result};
use crate::models::{Allocation, AllocationPlan, UnallocatedReason};

/// Aggregate counts of one allocation run.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{AllocationPlan, UnallocatedReason};
/// use u_delivery::report::PlanSummary;
///
/// let mut plan = AllocationPlan::new();
/// plan.add_unallocated(0, UnallocatedReason::Unroutable);
/// let summary = PlanSummary::new(&plan, 1, 2);
/// assert_eq!(summary.allocated_orders, 0);
/// assert_eq!(summary.unroutable, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub allocated_orders: usize,
    pub total_orders: usize,
    pub vehicles_used: usize,
    pub total_vehicles: usize,
    pub unroutable: usize,
    pub infeasible: usize,
    pub total_distance: f64,
}

impl PlanSummary {
    pub fn new(plan: &AllocationPlan, total_orders: usize, total_vehicles: usize) -> Self {
        Self {
            allocated_orders: plan.num_allocated_orders(),
            total_orders,
            vehicles_used: plan.num_allocations(),
            total_vehicles,
            unroutable: plan.count_unallocated(UnallocatedReason::Unroutable),
            infeasible: plan.count_unallocated(UnallocatedReason::NoFeasibleVehicle),
            total_distance: plan.total_distance(),
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Orders allocated: {}/{}",
            self.allocated_orders, self.total_orders
        )?;
        writeln!(
            f,
            "Vehicles used: {}/{}",
            self.vehicles_used, self.total_vehicles
        )?;
        writeln!(
            f,
            "Unallocated: {} unroutable, {} without a feasible vehicle",
            self.unroutable, self.infeasible
        )?;
        write!(f, "Total distance: {:.2} km", self.total_distance)
    }
}

/// Display adapter for a single allocation.
pub struct AllocationReport<'a>(pub &'a Allocation);

impl fmt::Display for AllocationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        let v = a.vehicle();
        writeln!(f, "Vehicle {} (capacity: {}):", v.id(), v.capacity())?;
        writeln!(f, "  - Departure center: {}", a.center())?;
        writeln!(f, "  - Total distance: {:.2} km", a.total_distance())?;
        writeln!(
            f,
            "  - Estimated time: {:.2} h (limit: {}h)",
            a.total_time(),
            v.duty_hours()
        )?;
        writeln!(f, "  - Load used: {}/{}", a.total_load(), v.capacity())?;
        write!(f, "  - Deliveries:")?;
        for d in a.deliveries() {
            write!(
                f,
                "\n    * {} (cargo: {}, deadline: {}h)",
                d.destination, d.cargo, d.deadline_hours
            )?;
        }
        Ok(())
    }
}

/// Display adapter for a whole plan.
pub struct PlanReport<'a>(pub &'a AllocationPlan);

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "=== ALLOCATION SUMMARY ===")?;
        write!(f, "Vehicles allocated: {}", plan.num_allocations())?;
        for allocation in plan.allocations() {
            write!(f, "\n\n{}", AllocationReport(allocation))?;
        }
        if plan.num_unallocated() > 0 {
            let ids: Vec<String> = plan
                .unallocated()
                .iter()
                .map(|u| u.order_id.to_string())
                .collect();
            write!(
                f,
                "\n\nUnallocated orders ({}): {}",
                plan.num_unallocated(),
                ids.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Formats a plan as the multi-line text report.
pub fn format_plan(plan: &AllocationPlan) -> String {
    PlanReport(plan).to_string()
}

/// Serializes a plan as pretty-printed JSON.
pub fn plan_to_json(plan: &AllocationPlan) -> Result<String> {
    serde_json::to_string_pretty(plan)
        .map_err(|e| DeliveryError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Delivery, Order, Vehicle};

    fn sample_plan() -> AllocationPlan {
        let mut a = Allocation::new(Vehicle::new(4, 1500, 10.0, 50.0), "Recife");
        a.push_delivery(Delivery::new(&Order::new(0, "Destination 0", 24.0, 120), 150.0, 120));
        a.push_delivery(Delivery::new(&Order::new(2, "Destination 2", 36.0, 80), 100.0, 200));
        let mut plan = AllocationPlan::new();
        plan.add_allocation(a);
        plan.add_unallocated(1, UnallocatedReason::NoFeasibleVehicle);
        plan
    }

    #[test]
    fn test_allocation_report() {
        let plan = sample_plan();
        let text = AllocationReport(&plan.allocations()[0]).to_string();
        assert!(text.starts_with("Vehicle 4 (capacity: 1500):"));
        assert!(text.contains("Departure center: Recife"));
        assert!(text.contains("Total distance: 250.00 km"));
        assert!(text.contains("Estimated time: 5.00 h (limit: 10h)"));
        assert!(text.contains("Load used: 200/1500"));
        assert!(text.contains("* Destination 2 (cargo: 80, deadline: 36h)"));
    }

    #[test]
    fn test_plan_report() {
        let text = format_plan(&sample_plan());
        assert!(text.starts_with("=== ALLOCATION SUMMARY ===\nVehicles allocated: 1"));
        assert!(text.ends_with("Unallocated orders (1): 1"));
    }

    #[test]
    fn test_empty_plan_report() {
        let text = format_plan(&AllocationPlan::new());
        assert_eq!(text, "=== ALLOCATION SUMMARY ===\nVehicles allocated: 0");
    }

    #[test]
    fn test_summary() {
        let summary = PlanSummary::new(&sample_plan(), 3, 2);
        assert_eq!(summary.allocated_orders, 2);
        assert_eq!(summary.vehicles_used, 1);
        assert_eq!(summary.infeasible, 1);
        let text = summary.to_string();
        assert!(text.contains("Orders allocated: 2/3"));
        assert!(text.contains("Vehicles used: 1/2"));
    }

    #[test]
    fn test_plan_json() {
        let json = plan_to_json(&sample_plan()).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["allocations"][0]["center"], "Recife");
        assert_eq!(value["unallocated"][0]["reason"], "no_feasible_vehicle");
    }
}
