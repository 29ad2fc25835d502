//! Wall-clock and memory measurement of allocation runs.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::allocation::{allocate, AllocationConfig};
use crate::error::Result;
use crate::graph::Network;
use crate::models::{AllocationPlan, Order, Vehicle};
use crate::shortest_path::PathAlgorithm;

use super::PeakAllocator;

/// Simple wall-clock timer.
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs `action` and returns its result with the elapsed time.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Self::start();
        let result = action();
        (result, timer.elapsed())
    }
}

/// Measurements of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetrics {
    pub algorithm: PathAlgorithm,
    pub elapsed_secs: f64,
    /// Peak heap growth over the run, when a [`PeakAllocator`] is active.
    pub peak_bytes: Option<usize>,
    pub orders_allocated: usize,
    pub orders_total: usize,
    pub vehicles_used: usize,
    pub vehicles_total: usize,
}

impl fmt::Display for RunMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} time: {:>10.6} s  peak memory: ",
            self.algorithm, self.elapsed_secs
        )?;
        match self.peak_bytes {
            Some(bytes) => write!(f, "{:>10.2} KB", bytes as f64 / 1024.0)?,
            None => write!(f, "{:>10} KB", "n/a")?,
        }
        write!(
            f,
            "  orders: {}/{}  vehicles: {}/{}",
            self.orders_allocated, self.orders_total, self.vehicles_used, self.vehicles_total
        )
    }
}

/// Runs [`allocate`] once and measures it.
///
/// `tracker` must be the allocator installed with `#[global_allocator]`;
/// anything else reports meaningless numbers. With `None` the peak memory
/// is left unmeasured.
///
/// # Examples
///
/// ```
/// use u_delivery::allocation::AllocationConfig;
/// use u_delivery::benchmark::measure;
/// use u_delivery::scenario::{generate, ScenarioConfig};
///
/// let s = generate(&ScenarioConfig::default().with_num_orders(6)).unwrap();
/// let (plan, metrics) =
///     measure(&s.network, &s.orders, &s.vehicles, &AllocationConfig::default(), None).unwrap();
/// assert_eq!(metrics.orders_allocated, plan.num_allocated_orders());
/// assert!(metrics.peak_bytes.is_none());
/// ```
pub fn measure(
    network: &Network,
    orders: &[Order],
    vehicles: &[Vehicle],
    config: &AllocationConfig,
    tracker: Option<&PeakAllocator>,
) -> Result<(AllocationPlan, RunMetrics)> {
    let baseline = tracker.map(|t| {
        t.reset_peak();
        t.current_bytes()
    });

    let (plan, elapsed) = Timer::measure_duration(|| allocate(network, orders, vehicles, config));
    let plan = plan?;

    let peak_bytes = tracker
        .zip(baseline)
        .map(|(t, base)| t.peak_bytes().saturating_sub(base));

    let metrics = RunMetrics {
        algorithm: config.algorithm,
        elapsed_secs: elapsed.as_secs_f64(),
        peak_bytes,
        orders_allocated: plan.num_allocated_orders(),
        orders_total: orders.len(),
        vehicles_used: plan.num_allocations(),
        vehicles_total: vehicles.len(),
    };
    info!(
        algorithm = %metrics.algorithm,
        elapsed_secs = metrics.elapsed_secs,
        peak_bytes = ?metrics.peak_bytes,
        "allocation measured"
    );
    Ok((plan, metrics))
}

/// Measures one run per shortest-path strategy, keeping the reuse policy of
/// `base`.
pub fn compare_algorithms(
    network: &Network,
    orders: &[Order],
    vehicles: &[Vehicle],
    base: &AllocationConfig,
    tracker: Option<&PeakAllocator>,
) -> Result<Vec<RunMetrics>> {
    PathAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = base.with_algorithm(algorithm);
            measure(network, orders, vehicles, &config, tracker).map(|(_, m)| m)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{generate, ScenarioConfig};

    #[test]
    fn test_timer() {
        let timer = Timer::start();
        let (value, elapsed) = Timer::measure_duration(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(timer.elapsed() >= elapsed);
    }

    #[test]
    fn test_compare_algorithms_agree() {
        let s = generate(&ScenarioConfig::default().with_seed(5)).expect("valid");
        let metrics = compare_algorithms(
            &s.network,
            &s.orders,
            &s.vehicles,
            &AllocationConfig::default(),
            None,
        )
        .expect("runs");
        assert_eq!(metrics.len(), 3);
        let names: Vec<_> = metrics.iter().map(|m| m.algorithm).collect();
        assert_eq!(names, PathAlgorithm::ALL.to_vec());
        for m in &metrics {
            assert_eq!(m.orders_allocated, metrics[0].orders_allocated);
            assert_eq!(m.vehicles_used, metrics[0].vehicles_used);
            assert_eq!(m.orders_total, 30);
            assert!(m.elapsed_secs >= 0.0);
        }
    }

    #[test]
    fn test_measure_with_local_tracker() {
        let s = generate(&ScenarioConfig::default().with_num_orders(4)).expect("valid");
        let tracker = PeakAllocator::new();
        let (_, m) = measure(
            &s.network,
            &s.orders,
            &s.vehicles,
            &AllocationConfig::default(),
            Some(&tracker),
        )
        .expect("runs");
        // not the global allocator, so nothing is counted
        assert_eq!(m.peak_bytes, Some(0));
    }

    #[test]
    fn test_metrics_display() {
        let m = RunMetrics {
            algorithm: PathAlgorithm::DenseMatrix,
            elapsed_secs: 0.5,
            peak_bytes: None,
            orders_allocated: 3,
            orders_total: 4,
            vehicles_used: 1,
            vehicles_total: 2,
        };
        let text = m.to_string();
        assert!(text.starts_with("dense_matrix"));
        assert!(text.contains("n/a"));
        assert!(text.contains("orders: 3/4"));
    }
}
