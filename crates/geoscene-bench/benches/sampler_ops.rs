//! Criterion benchmarks for complete scene sampling.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geoscene_bench::{crowded_shelf, reference_motion, reference_shelf};
use geoscene_sampler::{MotionSampler, ShelfStorageSampler};
use geoscene_test_utils::seeded_rng;

fn bench_shelf(c: &mut Criterion) {
    let mut group = c.benchmark_group("shelf_sample");
    for num_blocks in [1usize, 3, 7, 11] {
        let sampler = ShelfStorageSampler::new(reference_shelf(), num_blocks).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(num_blocks), &sampler, |b, s| {
            let mut rng = seeded_rng(42);
            b.iter(|| black_box(s.sample(&mut rng).unwrap()));
        });
    }
    group.finish();
}

fn bench_crowded_shelf(c: &mut Criterion) {
    let sampler = ShelfStorageSampler::new(crowded_shelf(), 7).unwrap();
    c.bench_function("shelf_sample_crowded_7", |b| {
        let mut rng = seeded_rng(42);
        b.iter(|| black_box(sampler.sample(&mut rng).unwrap()));
    });
}

fn bench_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion_sample");
    for passages in [0usize, 2, 5] {
        let sampler = MotionSampler::new(reference_motion(), passages).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(passages), &sampler, |b, s| {
            let mut rng = seeded_rng(42);
            b.iter(|| black_box(s.sample(&mut rng).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shelf, bench_crowded_shelf, bench_motion);
criterion_main!(benches);
