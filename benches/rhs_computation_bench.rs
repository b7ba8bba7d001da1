//! Benchmarks for right-hand-side assembly.
//!
//! Run with: `cargo bench --bench rhs_computation_bench`
//!
//! Each step is dominated by the RHS evaluations (reconstruction plus the
//! flux loop), so a forward-Euler step measures one assembly.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use euler1d::{Config, EulerSolver};

fn sod_config(num_cells: usize, order: u32, flux: &str) -> Config {
    let toml = format!(
        r#"
        [mesh]
        num_cells = {num_cells}

        [time]
        cfl = 0.5
        final_time = 1.0e9
        time_integrator = "explicit_euler"

        [numerics]
        order = {order}
        flux = "{flux}"
        limiter = "vanleer"

        [[initial_condition.region]]
        x_left = -1.0
        x_right = 0.5
        rho = 1.0
        u = 0.0
        p = 1.0

        [[initial_condition.region]]
        x_left = 0.5
        x_right = 2.0
        rho = 0.125
        u = 0.0
        p = 0.1
    "#
    );
    Config::from_toml_str(&toml).unwrap()
}

fn bench_rhs_by_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("rhs_by_order");

    for order in [1u32, 2] {
        let config = sod_config(1000, order, "hllc");
        group.bench_with_input(BenchmarkId::from_parameter(order), &config, |b, cfg| {
            let mut solver = EulerSolver::<f64>::new(cfg);
            b.iter(|| {
                black_box(solver.step());
            })
        });
    }

    group.finish();
}

fn bench_rhs_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("rhs_by_size");

    for num_cells in [100usize, 1000, 10000] {
        let config = sod_config(num_cells, 2, "hllc");
        group.bench_with_input(
            BenchmarkId::from_parameter(num_cells),
            &config,
            |b, cfg| {
                let mut solver = EulerSolver::<f64>::new(cfg);
                b.iter(|| {
                    black_box(solver.step());
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_rhs_by_order, bench_rhs_by_size);
criterion_main!(benches);
