//! Benchmarks for numerical flux functions.
//!
//! Run with: `cargo bench --bench flux_bench`
//!
//! Compares the approximate Riemann solvers on a stream of varied
//! left/right state pairs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use euler1d::{
    hll_flux, hllc_flux, llf_flux, movers_le_flux, Conservative, EquationOfState, Primitive,
};

/// Generate test state pairs for flux computation.
fn generate_test_states(n: usize) -> Vec<(Conservative<f64>, Conservative<f64>)> {
    let eos = EquationOfState::ideal_gas(1.4);
    let mut states = Vec::with_capacity(n);
    for i in 0..n {
        let phase = (i as f64) * 0.1;

        let rho_l = 1.0 + 0.5 * phase.sin();
        let u_l = 0.5 + 0.3 * phase.cos();
        let p_l = 1.0 + 0.4 * (phase * 0.7).sin();
        let left = eos.to_conservative(&Primitive::new(rho_l, u_l, p_l));

        let rho_r = 1.0 + 0.4 * (phase + 0.5).sin();
        let u_r = 0.4 + 0.2 * (phase + 0.3).cos();
        let p_r = 1.0 + 0.3 * (phase * 0.9 + 0.2).sin();
        let right = eos.to_conservative(&Primitive::new(rho_r, u_r, p_r));

        states.push((left, right));
    }
    states
}

fn bench_flux_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_functions");

    let eos = EquationOfState::ideal_gas(1.4);
    let states = generate_test_states(1000);

    group.bench_function("llf", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (left, right) in &states {
                let flux = llf_flux(black_box(left), black_box(right), black_box(&eos));
                total += flux.rho;
            }
            total
        })
    });

    group.bench_function("hll", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (left, right) in &states {
                let flux = hll_flux(black_box(left), black_box(right), black_box(&eos));
                total += flux.rho;
            }
            total
        })
    });

    group.bench_function("hllc", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (left, right) in &states {
                let flux = hllc_flux(black_box(left), black_box(right), black_box(&eos));
                total += flux.rho;
            }
            total
        })
    });

    group.bench_function("movers_le", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (left, right) in &states {
                let flux = movers_le_flux(black_box(left), black_box(right), black_box(&eos));
                total += flux.rho;
            }
            total
        })
    });

    group.finish();
}

criterion_group!(benches, bench_flux_functions);
criterion_main!(benches);
