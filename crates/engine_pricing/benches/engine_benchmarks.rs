//! Criterion benchmarks for the Monte Carlo pricing engine.
//!
//! Measures full pricing runs across path counts, plus the individual
//! pipeline stages (antithetic generation and path simulation) to show
//! where the time goes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use engine_pricing::mc::{
    generate_gbm_paths, EngineRng, GbmParams, MonteCarloEngine, PricingConfig,
};
use engine_pricing::{OptionStyle, OptionType};

fn build_config(num_simulations: usize, style: OptionStyle) -> PricingConfig {
    PricingConfig::builder()
        .spot(100.0)
        .strike(90.0)
        .maturity(0.5)
        .rate(0.02)
        .volatility(0.2)
        .num_simulations(num_simulations)
        .dt(1.0 / 252.0)
        .option_type(OptionType::Call)
        .option_style(style)
        .seed(42)
        .build()
        .unwrap()
}

/// Benchmark end-to-end pricing runs.
fn bench_full_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pricing");
    group.sample_size(20);

    for num_simulations in [10_000, 100_000] {
        for (label, style) in [
            ("european", OptionStyle::European),
            ("asian", OptionStyle::Asian),
        ] {
            let config = build_config(num_simulations, style);
            group.bench_with_input(
                BenchmarkId::new(label, num_simulations),
                &config,
                |b, config| {
                    let mut engine = MonteCarloEngine::new(config.clone()).unwrap();
                    b.iter(|| black_box(engine.price()));
                },
            );
        }
    }

    group.finish();
}

/// Benchmark antithetic normal generation alone.
fn bench_antithetic_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("antithetic_fill");

    for num_simulations in [10_000, 100_000] {
        let n_steps = 126;
        let mut buffer = vec![0.0; num_simulations * n_steps];

        group.bench_with_input(
            BenchmarkId::from_parameter(num_simulations),
            &num_simulations,
            |b, &n| {
                let mut rng = EngineRng::from_seed(42);
                b.iter(|| {
                    rng.fill_antithetic_normal(black_box(&mut buffer), n, n_steps)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark GBM path simulation alone (randoms pre-drawn).
fn bench_path_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_generation");

    for num_simulations in [10_000, 100_000] {
        let n_steps = 126;
        let mut randoms = vec![0.0; num_simulations * n_steps];
        let mut rng = EngineRng::from_seed(42);
        rng.fill_antithetic_normal(&mut randoms, num_simulations, n_steps)
            .unwrap();

        let mut paths = vec![0.0; num_simulations * n_steps];
        let params = GbmParams::new(100.0, 0.02, 0.2);

        group.bench_with_input(
            BenchmarkId::from_parameter(num_simulations),
            &num_simulations,
            |b, _| {
                b.iter(|| {
                    generate_gbm_paths(
                        black_box(&mut paths),
                        black_box(&randoms),
                        params,
                        1.0 / 252.0,
                        n_steps,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_pricing,
    bench_antithetic_fill,
    bench_path_generation
);
criterion_main!(benches);
