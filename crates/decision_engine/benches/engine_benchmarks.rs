//! Criterion benchmarks for the Monte Carlo engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decision_core::{Scenario, ScenarioParams};
use decision_engine::mc::{ExecutionMode, MonteCarloEngine, SimulationConfig};

fn premium() -> Scenario {
    Scenario::new(ScenarioParams {
        name: "Lanzamiento Producto Premium".to_string(),
        initial_investment: 150_000.0,
        revenue_mean: 35_000.0,
        revenue_std: 8_000.0,
        cost_mean: 20_000.0,
        cost_std: 4_000.0,
        inflation_rate: 0.03,
        market_volatility: 0.20,
    })
    .expect("valid scenario")
}

fn bench_simulate(c: &mut Criterion) {
    let scenario = premium();
    let mut group = c.benchmark_group("simulate");

    for n_trials in [1_000usize, 10_000] {
        for (label, mode) in [
            ("sequential", ExecutionMode::Sequential),
            ("parallel", ExecutionMode::Parallel),
        ] {
            let engine = MonteCarloEngine::new(
                SimulationConfig::builder()
                    .n_trials(n_trials)
                    .execution(mode)
                    .build()
                    .expect("valid config"),
            );
            group.bench_with_input(BenchmarkId::new(label, n_trials), &n_trials, |b, _| {
                b.iter(|| engine.simulate(black_box(&scenario)).expect("simulation"))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_simulate);
criterion_main!(benches);
