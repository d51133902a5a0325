use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use pixelart_reduce::{BlockColorStrategy, reduce};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;
use std::hint::black_box;

const SRC_RESOLUTION: usize = 512;

/// Every sample random, the worst case for the frequency table.
fn noise_source() -> Vec<u32> {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    (0..SRC_RESOLUTION * SRC_RESOLUTION)
        .map(|_| rng.random())
        .collect()
}

/// A 16-color sprite upscaled by `block_size`, the common case.
fn sprite_source(block_size: usize) -> Vec<u32> {
    let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
    let palette: Vec<u32> = (0..16).map(|_| rng.random()).collect();
    let logical = SRC_RESOLUTION / block_size;
    let grid: Vec<u32> = (0..logical * logical)
        .map(|_| palette[rng.random_range(0..palette.len())])
        .collect();

    let mut src = Vec::with_capacity(SRC_RESOLUTION * SRC_RESOLUTION);
    for row in grid.chunks_exact(logical) {
        for _ in 0..block_size {
            for &color in row {
                src.extend(std::iter::repeat_n(color, block_size));
            }
        }
    }
    src
}

fn bench_strategy(c: &mut Criterion, strategy: BlockColorStrategy) {
    let noise = noise_source();
    for block_size in [2usize, 4, 8, 16] {
        c.bench_function(&format!("reduce {strategy} noise {block_size}x{block_size}"), |b| {
            b.iter(|| {
                reduce(
                    black_box(&noise),
                    black_box(SRC_RESOLUTION),
                    black_box(SRC_RESOLUTION),
                    black_box(block_size),
                    black_box(strategy),
                )
            })
        });

        let sprite = sprite_source(block_size);
        c.bench_function(&format!("reduce {strategy} sprite {block_size}x{block_size}"), |b| {
            b.iter(|| {
                reduce(
                    black_box(&sprite),
                    black_box(SRC_RESOLUTION),
                    black_box(SRC_RESOLUTION),
                    black_box(block_size),
                    black_box(strategy),
                )
            })
        });
    }
}

pub fn bench_reduce_first(c: &mut Criterion) {
    bench_strategy(c, BlockColorStrategy::First);
}

pub fn bench_reduce_average(c: &mut Criterion) {
    bench_strategy(c, BlockColorStrategy::Average);
}

pub fn bench_reduce_most_frequent(c: &mut Criterion) {
    bench_strategy(c, BlockColorStrategy::MostFrequent);
}

criterion_group!(bench_first, bench_reduce_first);
criterion_group!(bench_average, bench_reduce_average);
criterion_group!(bench_most_frequent, bench_reduce_most_frequent);
criterion_main!(bench_first, bench_average, bench_most_frequent);
