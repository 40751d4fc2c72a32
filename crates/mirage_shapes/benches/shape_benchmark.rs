//! Shape generator benchmarks.
//!
//! A gesture match regenerates the full 6000-particle target buffer on the
//! detector callback; generation must stay well below a frame budget.

use criterion::{criterion_group, criterion_main, Criterion};
use mirage_shapes::{ShapeKind, ShapeSeed};

fn bench_generators(c: &mut Criterion) {
    let mut rng = ShapeSeed::new(42).rng();

    c.bench_function("heart_6000", |b| {
        b.iter(|| ShapeKind::Heart.generate(6000, &mut rng));
    });
    c.bench_function("saturn_6000", |b| {
        b.iter(|| ShapeKind::Saturn.generate(6000, &mut rng));
    });
    c.bench_function("scatter_6000", |b| {
        b.iter(|| ShapeKind::Scatter.generate(6000, &mut rng));
    });
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
