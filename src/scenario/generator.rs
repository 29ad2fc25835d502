//! Seeded synthetic scenario generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;
use crate::graph::{GraphBuilder, Network};
use crate::models::{Order, Vehicle};

use super::{IntRange, ScenarioConfig};

/// A generated set of inputs for an allocation run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub orders: Vec<Order>,
    pub vehicles: Vec<Vehicle>,
    pub network: Network,
}

/// Generates orders, vehicles and the distribution graph from a config.
///
/// Order `i` targets its own destination node `"Destination i"`. All draws
/// come from one `StdRng` seeded with `config.seed`, in a fixed sequence:
/// orders, then vehicles, then edge weights. The same config always yields
/// the same scenario.
///
/// # Examples
///
/// ```
/// use u_delivery::scenario::{generate, ScenarioConfig};
///
/// let config = ScenarioConfig::default().with_num_orders(8).with_num_vehicles(3);
/// let scenario = generate(&config).unwrap();
/// assert_eq!(scenario.orders.len(), 8);
/// assert_eq!(scenario.vehicles.len(), 3);
/// assert_eq!(scenario.network.len(), 5 + 8);
/// ```
pub fn generate(config: &ScenarioConfig) -> Result<Scenario> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let orders = generate_orders(config, &mut rng);
    let vehicles = generate_vehicles(config, &mut rng);
    let destinations: Vec<&str> = orders.iter().map(Order::destination).collect();
    let network = GraphBuilder::new(config.centers.iter().cloned(), destinations)
        .with_weight_range(config.weight_range.min, config.weight_range.max)
        .build(&mut rng)?;

    debug!(
        seed = config.seed,
        orders = orders.len(),
        vehicles = vehicles.len(),
        nodes = network.len(),
        "generated scenario"
    );
    Ok(Scenario {
        orders,
        vehicles,
        network,
    })
}

/// Orders with uniformly drawn deadlines and cargo weights.
pub fn generate_orders<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Vec<Order> {
    (0..config.num_orders)
        .map(|i| {
            let deadline = draw(rng, config.deadline_range);
            let cargo = draw(rng, config.cargo_range);
            Order::new(i, format!("Destination {i}"), f64::from(deadline), cargo as i32)
        })
        .collect()
}

/// Vehicles with uniformly drawn capacity, duty hours and speed.
pub fn generate_vehicles<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Vec<Vehicle> {
    (0..config.num_vehicles)
        .map(|i| {
            let capacity = draw(rng, config.capacity_range);
            let hours = draw(rng, config.duty_hours_range);
            let speed = draw(rng, config.speed_range);
            Vehicle::new(i, capacity as i32, f64::from(hours), f64::from(speed))
        })
        .collect()
}

fn draw<R: Rng>(rng: &mut R, range: IntRange) -> u32 {
    rng.random_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_shape() {
        let s = generate(&ScenarioConfig::default()).expect("valid");
        assert_eq!(s.orders.len(), 30);
        assert_eq!(s.vehicles.len(), 10);
        assert_eq!(s.network.centers().count(), 5);
        assert_eq!(s.network.destinations().count(), 30);
    }

    #[test]
    fn test_values_within_ranges() {
        let s = generate(&ScenarioConfig::default().with_seed(3)).expect("valid");
        for o in &s.orders {
            assert!((24.0..=72.0).contains(&o.deadline_hours()));
            assert!((50..=200).contains(&o.cargo()));
            assert!(s.network.node_id(o.destination()).is_ok());
        }
        for v in &s.vehicles {
            assert!((1000..=2000).contains(&v.capacity()));
            assert!((8.0..=12.0).contains(&v.duty_hours()));
            assert!((60.0..=80.0).contains(&v.speed()));
        }
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let config = ScenarioConfig::default().with_seed(11);
        let a = generate(&config).expect("valid");
        let b = generate(&config).expect("valid");
        assert_eq!(a.orders, b.orders);
        assert_eq!(a.vehicles, b.vehicles);
        assert_eq!(a.network.adjacency(), b.network.adjacency());
    }

    #[test]
    fn test_different_seed_differs() {
        let a = generate(&ScenarioConfig::default().with_seed(1)).expect("valid");
        let b = generate(&ScenarioConfig::default().with_seed(2)).expect("valid");
        assert_ne!(a.network.adjacency(), b.network.adjacency());
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(generate(&ScenarioConfig::default().with_num_orders(0)).is_err());
    }
}
