//! End-to-end benchmarks: build a yard and apply a full request list.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use yard_bench::{reference_profile, stress_profile};
use yard_engine::{SimConfig, YardSimulator};

/// Benchmark: reference profile, 10K cells and 64 requests.
fn bench_reference_profile(c: &mut Criterion) {
    let profile = reference_profile(42);

    c.bench_function("simulate_reference_10k", |b| {
        b.iter(|| {
            let mut sim = YardSimulator::new(&profile.yard, SimConfig::default()).unwrap();
            sim.apply_all(&profile.requests).unwrap();
            black_box(sim.remaining());
        });
    });
}

/// Benchmark: stress profile, ~100K cells and 256 requests.
fn bench_stress_profile(c: &mut Criterion) {
    let profile = stress_profile(42);
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);

    group.bench_function("simulate_stress_100k", |b| {
        b.iter(|| {
            let mut sim = YardSimulator::new(&profile.yard, SimConfig::default()).unwrap();
            sim.apply_all(&profile.requests).unwrap();
            black_box(sim.remaining());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_reference_profile, bench_stress_profile);
criterion_main!(benches);
