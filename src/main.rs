use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_delivery::allocation::allocate;
use u_delivery::benchmark::{compare_algorithms, PeakAllocator};
use u_delivery::report::{format_plan, PlanSummary};
use u_delivery::scenario::{generate, ScenarioConfig};
use u_delivery::shortest_path::PathAlgorithm;

#[global_allocator]
static ALLOC: PeakAllocator = PeakAllocator::new();

/// Generates a delivery scenario, allocates it and compares shortest-path strategies.
#[derive(Parser, Debug)]
#[command(name = "u-delivery", version, about)]
struct Args {
    /// JSON scenario configuration; unset fields keep their defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Overrides the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Prints plans and metrics as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let scenario = generate(&config).context("generating scenario")?;
    info!(
        orders = scenario.orders.len(),
        vehicles = scenario.vehicles.len(),
        seed = config.seed,
        "scenario ready"
    );

    let mapping = config.allocation.with_algorithm(PathAlgorithm::BinaryHeap);
    let matrix = config.allocation.with_algorithm(PathAlgorithm::DenseMatrix);
    let runs = [mapping, matrix]
        .iter()
        .map(|c| {
            allocate(&scenario.network, &scenario.orders, &scenario.vehicles, c)
                .map(|plan| (c.algorithm, plan))
        })
        .collect::<u_delivery::Result<Vec<_>>>()?;

    let metrics = compare_algorithms(
        &scenario.network,
        &scenario.orders,
        &scenario.vehicles,
        &config.allocation,
        Some(&ALLOC),
    )?;

    if args.json {
        let plans: serde_json::Map<String, serde_json::Value> = runs
            .iter()
            .map(|(algorithm, plan)| -> Result<(String, serde_json::Value)> {
                Ok((algorithm.name().to_string(), serde_json::to_value(plan)?))
            })
            .collect::<Result<_>>()?;
        let output = json!({
            "config": config,
            "plans": plans,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("=== CONFIGURATION ===");
    println!("Centers: {}", config.centers.join(", "));
    println!("Orders: {}", scenario.orders.len());
    println!("Vehicles: {}", scenario.vehicles.len());
    println!("Seed: {}", config.seed);
    println!("Reuse policy: {:?}", config.allocation.reuse_policy);

    for (algorithm, plan) in &runs {
        println!("\n--- Allocation using {} ({:?}) ---", algorithm, algorithm.representation());
        println!("{}", format_plan(plan));
        println!(
            "\n{}",
            PlanSummary::new(plan, scenario.orders.len(), scenario.vehicles.len())
        );
    }

    println!("\n=== PERFORMANCE COMPARISON ===");
    for m in &metrics {
        println!("{m}");
    }
    Ok(())
}
