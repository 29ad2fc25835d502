//! Criterion benchmarks comparing the shortest-path strategies and the
//! allocation engine on generated scenarios.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_delivery::allocation::{allocate, AllocationConfig};
use u_delivery::graph::NodeId;
use u_delivery::scenario::{generate, Scenario, ScenarioConfig};
use u_delivery::shortest_path::PathAlgorithm;

fn scenario(num_orders: usize) -> Scenario {
    generate(
        &ScenarioConfig::default()
            .with_num_orders(num_orders)
            .with_num_vehicles(num_orders / 3 + 1),
    )
    .expect("valid scenario")
}

fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path_all_pairs");
    group.sample_size(10);

    for &n in &[30usize, 100, 300] {
        let s = scenario(n);
        let centers: Vec<NodeId> = s.network.centers().collect();
        let nodes: Vec<NodeId> = (0..s.network.len()).map(NodeId::new).collect();
        for algorithm in PathAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), n),
                &s.network,
                |b, network| {
                    b.iter(|| {
                        let mut total = 0.0;
                        for &from in &centers {
                            for &to in &nodes {
                                if let Ok(Some(d)) =
                                    network.shortest_distance(algorithm, black_box(from), to)
                                {
                                    total += d;
                                }
                            }
                        }
                        black_box(total)
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");
    group.sample_size(10);

    for &n in &[30usize, 100, 300] {
        let s = scenario(n);
        for algorithm in PathAlgorithm::ALL {
            let config = AllocationConfig::default().with_algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), n),
                &(&s, config),
                |b, (s, config)| {
                    b.iter(|| {
                        let plan = allocate(
                            black_box(&s.network),
                            &s.orders,
                            &s.vehicles,
                            config,
                        );
                        black_box(plan)
                    });
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_all_pairs, bench_allocation);
criterion_main!(benches);
