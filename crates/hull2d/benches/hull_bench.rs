//! Criterion benchmarks for the two hull algorithms.
//! Naive sizes stay small (cubic); the monotone chain runs up to 1e5 points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hull2d

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2d::cloud::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull2d::{convex_hull_monotone_chain, convex_hull_naive, Point};

fn cloud(count: usize, shape: CloudShape, seed: u64) -> Vec<Point> {
    draw_points(CloudCfg { count, shape }, ReplayToken { seed, index: 0 }).unwrap()
}

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive");
    group.sample_size(10);
    for &n in &[10usize, 50, 100, 250] {
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::uniform(), 41),
                |pts| {
                    let _hull = convex_hull_naive(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_chain");
    for &n in &[10usize, 100, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::uniform(), 42),
                |pts| {
                    let _hull = convex_hull_monotone_chain(&pts);
                },
                BatchSize::LargeInput,
            )
        });
        // Every point on the hull: worst case for output size.
        group.bench_with_input(BenchmarkId::new("circle", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, CloudShape::Circle { radius: 1e9 }, 0),
                |pts| {
                    let _hull = convex_hull_monotone_chain(&pts);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_naive, bench_chain);
criterion_main!(benches);
