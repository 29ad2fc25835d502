//! Consistency checks of an allocation plan against its inputs.

use std::collections::HashMap;

use crate::models::{AllocationPlan, Order, Vehicle, Violation, ViolationType};

const TIME_TOLERANCE: f64 = 1e-9;

/// Checks conservation, feasibility and deadline ordering of a plan.
///
/// - every input order appears exactly once, either in an allocation or as
///   unallocated, and nothing else appears
/// - every input vehicle either serves exactly one allocation or is listed
///   as unused
/// - each allocation's load fits the vehicle capacity and its total time
///   fits the duty-hours limit, both taken from the input vehicle
/// - deliveries carry the cargo and deadline of their input order, in
///   non-decreasing deadline order
///
/// Returns an empty list for a consistent plan.
///
/// # Examples
///
/// ```
/// use u_delivery::allocation::{allocate, verify_plan, AllocationConfig};
/// use u_delivery::graph::GraphBuilder;
/// use u_delivery::models::{Order, Vehicle};
///
/// let network = GraphBuilder::new(["C1"], ["D1", "D2"])
///     .build_with(|_, _| 120.0)
///     .unwrap();
/// let vehicles = vec![Vehicle::new(0, 500, 8.0, 60.0)];
/// let orders = vec![Order::new(0, "D1", 24.0, 100), Order::new(1, "D2", 30.0, 100)];
/// let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).unwrap();
/// assert!(verify_plan(&plan, &orders, &vehicles).is_empty());
/// ```
pub fn verify_plan(plan: &AllocationPlan, orders: &[Order], vehicles: &[Vehicle]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen: HashMap<usize, usize> = orders.iter().map(|o| (o.id(), 0)).collect();
    let mentioned = plan
        .allocations()
        .iter()
        .flat_map(|a| a.deliveries().iter().map(|d| d.order_id))
        .chain(plan.unallocated().iter().map(|u| u.order_id));
    for order_id in mentioned {
        match seen.get_mut(&order_id) {
            Some(count) => *count += 1,
            None => violations.push(Violation::new(ViolationType::UnknownOrder { order_id })),
        }
    }
    for order in orders {
        match seen[&order.id()] {
            0 => violations.push(Violation::new(ViolationType::OrderMissing {
                order_id: order.id(),
            })),
            1 => {}
            _ => violations.push(Violation::new(ViolationType::OrderDuplicated {
                order_id: order.id(),
            })),
        }
    }

    let mut vehicle_uses: HashMap<usize, usize> = vehicles.iter().map(|v| (v.id(), 0)).collect();
    for vehicle_id in plan
        .allocations()
        .iter()
        .map(|a| a.vehicle_id())
        .chain(plan.unused_vehicles().iter().copied())
    {
        *vehicle_uses.entry(vehicle_id).or_insert(0) += 1;
    }
    let mut uses: Vec<(usize, usize)> = vehicle_uses.into_iter().filter(|&(_, n)| n != 1).collect();
    uses.sort_unstable();
    for (vehicle_id, n) in uses {
        let kind = if n == 0 {
            ViolationType::VehicleUnaccounted { vehicle_id }
        } else {
            ViolationType::VehicleReused { vehicle_id }
        };
        violations.push(Violation::new(kind));
    }

    let vehicles_by_id: HashMap<usize, &Vehicle> = vehicles.iter().map(|v| (v.id(), v)).collect();
    let orders_by_id: HashMap<usize, &Order> = orders.iter().map(|o| (o.id(), o)).collect();

    for allocation in plan.allocations() {
        let vehicle_id = allocation.vehicle_id();
        // limits come from the input fleet, not from the plan's copy
        let Some(vehicle) = vehicles_by_id.get(&vehicle_id) else {
            violations.push(Violation::new(ViolationType::UnknownVehicle { vehicle_id }));
            continue;
        };

        let mut load: Option<i32> = Some(0);
        let mut deadlines = Vec::with_capacity(allocation.len());
        for delivery in allocation.deliveries() {
            // unknown orders are already reported above
            let Some(order) = orders_by_id.get(&delivery.order_id) else {
                continue;
            };
            if delivery.cargo != order.cargo() || delivery.deadline_hours != order.deadline_hours() {
                violations.push(Violation::new(ViolationType::DeliveryMismatch {
                    vehicle_id,
                    order_id: order.id(),
                }));
            }
            load = load.and_then(|l| l.checked_add(order.cargo()));
            deadlines.push(order.deadline_hours());
        }

        let load = load.unwrap_or(i32::MAX);
        if load > vehicle.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                vehicle_id,
                load,
                capacity: vehicle.capacity(),
            }));
        }

        let hours = vehicle.travel_time(allocation.total_distance());
        if hours > vehicle.duty_hours() + TIME_TOLERANCE * vehicle.duty_hours().max(1.0) {
            violations.push(Violation::new(ViolationType::DutyHoursExceeded {
                vehicle_id,
                hours,
                limit: vehicle.duty_hours(),
            }));
        }

        if !deadlines.windows(2).all(|w| w[0] <= w[1]) {
            violations.push(Violation::new(ViolationType::DeadlineOrderBroken { vehicle_id }));
        }
    }

    violations
}
