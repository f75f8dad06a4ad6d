//! Benchmarks for the Black-Scholes engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vanilla_models::analytical::{greeks, norm_cdf, price};
use vanilla_models::instruments::{OptionSpec, OptionType};

fn atm_call() -> OptionSpec<f64> {
    OptionSpec::new(100.0, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap()
}

fn bench_norm_cdf(c: &mut Criterion) {
    c.bench_function("norm_cdf", |b| {
        b.iter(|| norm_cdf(black_box(0.35_f64)));
    });
}

fn bench_price(c: &mut Criterion) {
    let spec = atm_call();
    c.bench_function("black_scholes_price", |b| {
        b.iter(|| price(black_box(&spec)));
    });
}

fn bench_greeks(c: &mut Criterion) {
    let spec = atm_call();
    c.bench_function("black_scholes_greeks", |b| {
        b.iter(|| greeks(black_box(&spec)));
    });
}

criterion_group!(benches, bench_norm_cdf, bench_price, bench_greeks);
criterion_main!(benches);
