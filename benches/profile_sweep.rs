use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use line_profile::prelude::*;

fn bench_profile_sweep(c: &mut Criterion) {
    let model = LineModel::study().expect("study model");
    let mut group = c.benchmark_group("profile_sweep");

    for n in [100_usize, 500, 10_000] {
        let xs = linspace(0.0, 1000.0, n);
        group.bench_with_input(BenchmarkId::new("distributed", n), &xs, |b, xs| {
            b.iter(|| model.profile(xs))
        });
        group.bench_with_input(BenchmarkId::new("series", n), &xs, |b, xs| {
            b.iter(|| model.profile_series(xs))
        });
    }

    let lengths = linspace(1.0, 200.0, 100);
    group.bench_function("efficiency_curve", |b| b.iter(|| model.efficiency_curve(&lengths)));
    group.finish();
}

criterion_group!(benches, bench_profile_sweep);
criterion_main!(benches);
