//! Scenario configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationConfig;
use crate::error::{DeliveryError, Result};

/// Inclusive integer range used for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            return Err(DeliveryError::InvalidConfig(format!(
                "{name} range [{}, {}] is empty",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Configuration of a synthetic allocation scenario.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use u_delivery::scenario::ScenarioConfig;
///
/// let config = ScenarioConfig::default()
///     .with_num_orders(50)
///     .with_num_vehicles(12)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let parsed = ScenarioConfig::from_json(r#"{ "num_orders": 5, "seed": 1 }"#).unwrap();
/// assert_eq!(parsed.num_orders, 5);
/// assert_eq!(parsed.num_vehicles, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Distribution center names.
    pub centers: Vec<String>,

    /// Number of orders; each gets its own destination node.
    pub num_orders: usize,

    /// Number of vehicles in the fleet.
    pub num_vehicles: usize,

    /// Seed for every random draw of the scenario.
    pub seed: u64,

    /// Center ↔ destination edge weights.
    pub weight_range: IntRange,

    /// Order deadlines in hours.
    pub deadline_range: IntRange,

    /// Order cargo weights.
    pub cargo_range: IntRange,

    /// Vehicle capacities.
    pub capacity_range: IntRange,

    /// Vehicle duty-hours limits.
    pub duty_hours_range: IntRange,

    /// Vehicle average speeds.
    pub speed_range: IntRange,

    /// Allocation settings used by the runner.
    pub allocation: AllocationConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            centers: ["Belém", "Recife", "Brasília", "São Paulo", "Florianópolis"]
                .into_iter()
                .map(String::from)
                .collect(),
            num_orders: 30,
            num_vehicles: 10,
            seed: 42,
            weight_range: IntRange::new(100, 1000),
            deadline_range: IntRange::new(24, 72),
            cargo_range: IntRange::new(50, 200),
            capacity_range: IntRange::new(1000, 2000),
            duty_hours_range: IntRange::new(8, 12),
            speed_range: IntRange::new(60, 80),
            allocation: AllocationConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn with_centers<I, S>(mut self, centers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.centers = centers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_num_orders(mut self, n: usize) -> Self {
        self.num_orders = n;
        self
    }

    pub fn with_num_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.weight_range = IntRange::new(min, max);
        self
    }

    pub fn with_allocation(mut self, allocation: AllocationConfig) -> Self {
        self.allocation = allocation;
        self
    }

    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DeliveryError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DeliveryError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.centers.is_empty() {
            return Err(DeliveryError::NoCenters);
        }
        if self.num_orders == 0 {
            return Err(DeliveryError::NoDestinations);
        }
        self.weight_range.validate("weight")?;
        self.deadline_range.validate("deadline")?;
        self.cargo_range.validate("cargo")?;
        self.capacity_range.validate("capacity")?;
        self.duty_hours_range.validate("duty hours")?;
        self.speed_range.validate("speed")?;
        if self.speed_range.min == 0 {
            return Err(DeliveryError::InvalidConfig(
                "speed range must be positive".into(),
            ));
        }
        if self.capacity_range.max > i32::MAX as u32 || self.cargo_range.max > i32::MAX as u32 {
            return Err(DeliveryError::InvalidConfig(
                "capacity and cargo must fit in i32".into(),
            ));
        }
        Ok(())
    }
}
