//! Two-phase greedy allocation of orders to vehicles.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, trace};

use crate::error::{DeliveryError, Result};
use crate::graph::{Network, NodeId};
use crate::models::{
    Allocation, AllocationPlan, Delivery, Order, UnallocatedReason, Vehicle, VehicleState,
};

use super::{AllocationConfig, VehicleReusePolicy};

/// Assigns orders to vehicles with a greedy, single-pass heuristic.
///
/// 1. Every order is grouped under the center with the smallest *direct*
///    edge weight to its destination. Orders without such a center are
///    reported as [`UnallocatedReason::Unroutable`].
/// 2. Centers are processed in the order their groups were first seen.
///    For each available vehicle (input order), the center's remaining
///    orders are walked by ascending deadline (ties by input order). An
///    order is accepted when its cargo fits the remaining capacity and its
///    travel time (shortest path distance / speed) fits the remaining duty
///    hours. Rejected orders stay for the next vehicle; no repacking occurs.
///
/// A vehicle that accepts at least one order yields an [`Allocation`] and
/// leaves the pool. What happens to a vehicle that accepts nothing is set by
/// [`VehicleReusePolicy`].
///
/// # Errors
///
/// Fails before allocating anything if a vehicle or order is invalid, ids
/// repeat, or an order destination is not a destination node of `network`.
///
/// # Examples
///
/// ```
/// use u_delivery::allocation::{allocate, AllocationConfig};
/// use u_delivery::graph::GraphBuilder;
/// use u_delivery::models::{Order, Vehicle};
///
/// let network = GraphBuilder::new(["C1"], ["D1"])
///     .build_with(|_, _| 100.0)
///     .unwrap();
/// let vehicles = vec![Vehicle::new(0, 150, 10.0, 50.0)];
/// let orders = vec![
///     Order::new(0, "D1", 24.0, 100),
///     Order::new(1, "D1", 48.0, 80),
/// ];
///
/// let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).unwrap();
/// assert_eq!(plan.num_allocations(), 1);
/// assert_eq!(plan.allocations()[0].order_ids(), vec![0]);
/// assert_eq!(plan.num_unallocated(), 1);
/// ```
pub fn allocate(
    network: &Network,
    orders: &[Order],
    vehicles: &[Vehicle],
    config: &AllocationConfig,
) -> Result<AllocationPlan> {
    let destinations = validate_inputs(network, orders, vehicles)?;
    info!(
        orders = orders.len(),
        vehicles = vehicles.len(),
        algorithm = %config.algorithm,
        "allocating orders"
    );

    // Phase 1: group by nearest center.
    let representation = config.algorithm.representation();
    let mut groups: Vec<(NodeId, Vec<usize>)> = Vec::new();
    let mut group_index: HashMap<NodeId, usize> = HashMap::new();
    let mut routable = vec![false; orders.len()];

    for (oi, &destination) in destinations.iter().enumerate() {
        let Some(center) = network.nearest_center(representation, destination)? else {
            debug!(order = orders[oi].id(), "no center reaches destination");
            continue;
        };
        routable[oi] = true;
        let gi = *group_index.entry(center).or_insert_with(|| {
            groups.push((center, Vec::new()));
            groups.len() - 1
        });
        groups[gi].1.push(oi);
    }

    // Phase 2: per center, per vehicle greedy assignment.
    let mut plan = AllocationPlan::new();
    let mut available = vec![true; vehicles.len()];
    let mut used = vec![false; vehicles.len()];
    let mut assigned = vec![false; orders.len()];

    for (center, members) in &groups {
        let center_name = network.name_of(*center)?;
        let mut candidates = members.clone();
        candidates.sort_by(|&a, &b| {
            orders[a]
                .deadline_hours()
                .total_cmp(&orders[b].deadline_hours())
        });
        debug!(center = center_name, orders = candidates.len(), "processing center");

        for (vi, vehicle) in vehicles.iter().enumerate() {
            if !available[vi] {
                continue;
            }
            if candidates.iter().all(|&oi| assigned[oi]) {
                break;
            }

            let mut state = VehicleState::new(vehicle);
            let mut allocation = Allocation::new(vehicle.clone(), center_name);

            for &oi in &candidates {
                if assigned[oi] {
                    continue;
                }
                let order = &orders[oi];
                let distance =
                    network.shortest_distance(config.algorithm, *center, destinations[oi])?;
                let Some(distance) = distance else {
                    trace!(order = order.id(), vehicle = vehicle.id(), "unreachable");
                    continue;
                };
                let hours = vehicle.travel_time(distance);

                if state.can_accept(order.cargo(), hours) {
                    state.consume(order.cargo(), hours);
                    assigned[oi] = true;
                    let load = vehicle.capacity() - state.remaining_capacity;
                    allocation.push_delivery(Delivery::new(order, distance, load));
                    trace!(order = order.id(), vehicle = vehicle.id(), distance, "accepted");
                } else {
                    trace!(
                        order = order.id(),
                        vehicle = vehicle.id(),
                        cargo = order.cargo(),
                        hours,
                        remaining_capacity = state.remaining_capacity,
                        remaining_hours = state.remaining_hours,
                        "rejected"
                    );
                }
            }

            if allocation.is_empty() {
                if config.reuse_policy == VehicleReusePolicy::ConsumeVisited {
                    available[vi] = false;
                }
                continue;
            }

            debug!(
                vehicle = vehicle.id(),
                center = center_name,
                orders = allocation.len(),
                distance = allocation.total_distance(),
                "vehicle allocated"
            );
            available[vi] = false;
            used[vi] = true;
            plan.add_allocation(allocation);
        }
    }

    for (oi, order) in orders.iter().enumerate() {
        if !routable[oi] {
            plan.add_unallocated(order.id(), UnallocatedReason::Unroutable);
        } else if !assigned[oi] {
            plan.add_unallocated(order.id(), UnallocatedReason::NoFeasibleVehicle);
        }
    }
    for (vi, vehicle) in vehicles.iter().enumerate() {
        if !used[vi] {
            plan.add_unused_vehicle(vehicle.id());
        }
    }

    info!(
        allocated = plan.num_allocated_orders(),
        unallocated = plan.num_unallocated(),
        vehicles_used = plan.num_allocations(),
        "allocation finished"
    );
    Ok(plan)
}

/// Validates orders and vehicles, resolving each order's destination node.
fn validate_inputs(network: &Network, orders: &[Order], vehicles: &[Vehicle]) -> Result<Vec<NodeId>> {
    let mut vehicle_ids = HashSet::new();
    for vehicle in vehicles {
        vehicle.validate()?;
        if !vehicle_ids.insert(vehicle.id()) {
            return Err(DeliveryError::DuplicateVehicle(vehicle.id()));
        }
    }

    let mut order_ids = HashSet::new();
    let mut destinations = Vec::with_capacity(orders.len());
    for order in orders {
        order.validate()?;
        if !order_ids.insert(order.id()) {
            return Err(DeliveryError::DuplicateOrder(order.id()));
        }
        let node = network.node_id(order.destination())?;
        if network.node(node).is_some_and(|n| n.is_center()) {
            return Err(DeliveryError::NotADestination {
                order_id: order.id(),
                node: order.destination().to_string(),
            });
        }
        destinations.push(node);
    }
    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, GraphBuilder, Node};
    use crate::shortest_path::PathAlgorithm;

    fn single_center(distance: f64) -> Network {
        GraphBuilder::new(["C1"], ["D1"])
            .build_with(|_, _| distance)
            .expect("valid")
    }

    fn two_centers() -> Network {
        // D1 is nearest to C1, D2 nearest to C2
        GraphBuilder::new(["C1", "C2"], ["D1", "D2"])
            .build_with(|c, d| match (c, d) {
                ("C1", "D1") => 100.0,
                ("C1", "D2") => 400.0,
                ("C2", "D1") => 500.0,
                _ => 150.0,
            })
            .expect("valid")
    }

    #[test]
    fn test_capacity_limits_batch() {
        let network = single_center(100.0);
        let vehicles = vec![Vehicle::new(0, 150, 10.0, 50.0)];
        let orders = vec![Order::new(0, "D1", 24.0, 100), Order::new(1, "D1", 48.0, 80)];
        for algo in PathAlgorithm::ALL {
            let config = AllocationConfig::default().with_algorithm(algo);
            let plan = allocate(&network, &orders, &vehicles, &config).expect("ok");
            assert_eq!(plan.num_allocations(), 1);
            let a = &plan.allocations()[0];
            assert_eq!(a.order_ids(), vec![0]);
            assert!((a.total_distance() - 100.0).abs() < 1e-10);
            assert!((a.total_time() - 2.0).abs() < 1e-10);
            assert_eq!(plan.unallocated()[0].order_id, 1);
            assert_eq!(
                plan.unallocated()[0].reason,
                UnallocatedReason::NoFeasibleVehicle
            );
        }
    }

    #[test]
    fn test_duty_hours_reject() {
        let network = single_center(100.0);
        // travel time = 100 / 50 = 2h > 1h
        let vehicles = vec![Vehicle::new(0, 1000, 1.0, 50.0)];
        let orders = vec![Order::new(0, "D1", 24.0, 10)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.num_allocations(), 0);
        assert_eq!(plan.num_unallocated(), 1);
        assert_eq!(plan.unused_vehicles(), &[0]);
    }

    #[test]
    fn test_deadline_order_within_batch() {
        let network = single_center(10.0);
        let vehicles = vec![Vehicle::new(0, 1000, 100.0, 10.0)];
        let orders = vec![
            Order::new(0, "D1", 72.0, 10),
            Order::new(1, "D1", 24.0, 10),
            Order::new(2, "D1", 48.0, 10),
            Order::new(3, "D1", 24.0, 10),
        ];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        // ties broken by input order
        assert_eq!(plan.allocations()[0].order_ids(), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_rejected_order_not_revisited_but_later_fit() {
        let network = single_center(10.0);
        let vehicles = vec![Vehicle::new(0, 100, 100.0, 10.0)];
        let orders = vec![
            Order::new(0, "D1", 10.0, 60),
            Order::new(1, "D1", 20.0, 50),
            Order::new(2, "D1", 30.0, 40),
        ];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        // 60 accepted, 50 rejected (40 left), 40 accepted
        assert_eq!(plan.allocations()[0].order_ids(), vec![0, 2]);
        assert_eq!(plan.allocations()[0].total_load(), 100);
        assert_eq!(plan.unallocated()[0].order_id, 1);
    }

    #[test]
    fn test_rejected_orders_go_to_next_vehicle() {
        let network = single_center(10.0);
        let vehicles = vec![
            Vehicle::new(0, 100, 100.0, 10.0),
            Vehicle::new(1, 100, 100.0, 10.0),
        ];
        let orders = vec![Order::new(0, "D1", 10.0, 70), Order::new(1, "D1", 20.0, 70)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.num_allocations(), 2);
        assert_eq!(plan.allocations()[0].order_ids(), vec![0]);
        assert_eq!(plan.allocations()[1].order_ids(), vec![1]);
        assert!(plan.unused_vehicles().is_empty());
    }

    #[test]
    fn test_vehicle_not_reused_across_centers() {
        let network = two_centers();
        let vehicles = vec![Vehicle::new(0, 1000, 100.0, 50.0)];
        let orders = vec![Order::new(0, "D1", 24.0, 10), Order::new(1, "D2", 24.0, 10)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.num_allocations(), 1);
        assert_eq!(plan.allocations()[0].center(), "C1");
        assert_eq!(plan.unallocated()[0].order_id, 1);
    }

    #[test]
    fn test_unsuccessful_vehicle_retained() {
        let network = two_centers();
        // the small vehicle cannot take the heavy C1 order but serves C2
        let vehicles = vec![
            Vehicle::new(0, 50, 100.0, 50.0),
            Vehicle::new(1, 500, 100.0, 50.0),
        ];
        let orders = vec![Order::new(0, "D1", 24.0, 300), Order::new(1, "D2", 24.0, 20)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.num_allocations(), 2);
        assert_eq!(plan.allocations()[0].vehicle_id(), 1);
        assert_eq!(plan.allocations()[0].center(), "C1");
        assert_eq!(plan.allocations()[1].vehicle_id(), 0);
        assert_eq!(plan.allocations()[1].center(), "C2");
    }

    #[test]
    fn test_unsuccessful_vehicle_consumed() {
        let network = two_centers();
        let vehicles = vec![
            Vehicle::new(0, 50, 100.0, 50.0),
            Vehicle::new(1, 500, 100.0, 50.0),
        ];
        let orders = vec![Order::new(0, "D1", 24.0, 300), Order::new(1, "D2", 24.0, 20)];
        let config =
            AllocationConfig::default().with_reuse_policy(VehicleReusePolicy::ConsumeVisited);
        let plan = allocate(&network, &orders, &vehicles, &config).expect("ok");
        assert_eq!(plan.num_allocations(), 1);
        assert_eq!(plan.allocations()[0].vehicle_id(), 1);
        assert_eq!(plan.unallocated()[0].order_id, 1);
        assert_eq!(plan.unused_vehicles(), &[0]);
    }

    #[test]
    fn test_groups_follow_first_discovery() {
        let network = two_centers();
        let vehicles = vec![Vehicle::new(0, 1000, 100.0, 50.0)];
        // first order resolves to C2, so C2 is processed first
        let orders = vec![Order::new(0, "D2", 24.0, 10), Order::new(1, "D1", 12.0, 10)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.allocations()[0].center(), "C2");
        assert_eq!(plan.allocations()[0].order_ids(), vec![0]);
    }

    #[test]
    fn test_nearest_center_distance_is_direct_edge() {
        // any detour ends with an edge into D2 at least as heavy as C1-D2
        let network = GraphBuilder::new(["C1", "C2"], ["D1", "D2"])
            .build_with(|c, d| match (c, d) {
                ("C1", "D2") => 900.0,
                ("C2", "D2") => 950.0,
                _ => 10.0,
            })
            .expect("valid");
        let vehicles = vec![Vehicle::new(0, 1000, 100.0, 10.0)];
        let orders = vec![Order::new(0, "D2", 24.0, 10), Order::new(1, "D1", 30.0, 10)];
        let plan = allocate(&network, &orders, &vehicles, &AllocationConfig::default()).expect("ok");
        let a = &plan.allocations()[0];
        assert_eq!(a.center(), "C1");
        assert_eq!(a.deliveries()[0].distance, 900.0);
        assert_eq!(a.deliveries()[1].distance, 10.0);
        assert!((a.total_time() - 91.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_inputs() {
        let network = single_center(100.0);
        let plan = allocate(&network, &[], &[], &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.num_allocations(), 0);
        assert_eq!(plan.num_unallocated(), 0);

        let orders = vec![Order::new(0, "D1", 24.0, 10)];
        let plan = allocate(&network, &orders, &[], &AllocationConfig::default()).expect("ok");
        assert_eq!(plan.count_unallocated(UnallocatedReason::NoFeasibleVehicle), 1);
    }

    #[test]
    fn test_input_errors() {
        let network = single_center(100.0);
        let config = AllocationConfig::default();
        let v = vec![Vehicle::new(0, 100, 8.0, 60.0)];

        let unknown = vec![Order::new(0, "Atlantis", 24.0, 10)];
        assert_eq!(
            allocate(&network, &unknown, &v, &config),
            Err(DeliveryError::UnknownNode("Atlantis".into()))
        );

        let center = vec![Order::new(5, "C1", 24.0, 10)];
        assert!(matches!(
            allocate(&network, &center, &v, &config),
            Err(DeliveryError::NotADestination { order_id: 5, .. })
        ));

        let dup = vec![Order::new(1, "D1", 24.0, 10), Order::new(1, "D1", 30.0, 10)];
        assert_eq!(
            allocate(&network, &dup, &v, &config),
            Err(DeliveryError::DuplicateOrder(1))
        );

        let dup_v = vec![Vehicle::new(3, 100, 8.0, 60.0), Vehicle::new(3, 100, 8.0, 60.0)];
        assert_eq!(
            allocate(&network, &[], &dup_v, &config),
            Err(DeliveryError::DuplicateVehicle(3))
        );

        let slow = vec![Vehicle::new(0, 100, 8.0, 0.0)];
        assert!(matches!(
            allocate(&network, &[], &slow, &config),
            Err(DeliveryError::InvalidVehicle { id: 0, .. })
        ));
    }

    #[test]
    fn test_unconnected_destination_is_unroutable() {
        let nodes = vec![
            Node::center("C1"),
            Node::destination("D1"),
            Node::destination("D2"),
        ];
        let mut graph = AdjacencyGraph::new(3);
        graph.add_symmetric_edge(NodeId::new(0), NodeId::new(1), 100.0);
        let network = Network::from_parts(nodes, graph).expect("valid parts");
        let vehicles = vec![Vehicle::new(0, 500, 10.0, 50.0)];
        let orders = vec![Order::new(0, "D2", 24.0, 10), Order::new(1, "D1", 30.0, 10)];

        for algo in PathAlgorithm::ALL {
            let config = AllocationConfig::default().with_algorithm(algo);
            let plan = allocate(&network, &orders, &vehicles, &config).expect("ok");
            assert_eq!(plan.count_unallocated(UnallocatedReason::Unroutable), 1);
            assert_eq!(plan.unallocated()[0].order_id, 0);
            assert_eq!(plan.allocations()[0].order_ids(), vec![1]);
            assert!(plan.verify(&orders, &vehicles).is_empty());
        }
    }

    #[test]
    fn test_reordered_matrix_same_plan() {
        let network = GraphBuilder::new(["C1", "C2"], ["D1"])
            .build_with(|_, _| 200.0)
            .expect("valid");
        let order: Vec<NodeId> = ["C2", "C1", "D1"]
            .iter()
            .map(|name| network.node_id(name).expect("known"))
            .collect();
        let network = network.with_matrix_order(order).expect("valid order");
        let vehicles = vec![Vehicle::new(0, 500, 10.0, 50.0)];
        let orders = vec![Order::new(0, "D1", 24.0, 10)];

        let heap = allocate(&network, &orders, &vehicles, &AllocationConfig::default())
            .expect("ok");
        let dense = allocate(
            &network,
            &orders,
            &vehicles,
            &AllocationConfig::default().with_algorithm(PathAlgorithm::DenseMatrix),
        )
        .expect("ok");
        assert_eq!(heap.allocations()[0].center(), "C1");
        assert_eq!(heap, dense);
    }
}
