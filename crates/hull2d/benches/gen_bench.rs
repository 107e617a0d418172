//! Criterion microbenches for the point-cloud generators.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::cloud::{draw_points, CloudCfg, CloudShape, ReplayToken};

fn bench_gen(c: &mut Criterion) {
    let mut group = c.benchmark_group("cloud");
    let shapes = [
        CloudShape::uniform(),
        CloudShape::circle(),
        CloudShape::collinear(),
        CloudShape::grouped(),
    ];
    for shape in shapes {
        let cfg = CloudCfg {
            count: 10_000,
            shape,
        };
        group.bench_function(BenchmarkId::new("draw_points", shape.name()), |b| {
            b.iter_batched(
                || ReplayToken { seed: 42, index: 0 },
                |mut tok| {
                    tok.index = tok.index.wrapping_add(1);
                    draw_points(cfg, tok)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gen);
criterion_main!(benches);
