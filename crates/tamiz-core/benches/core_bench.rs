//! Criterion benchmarks for the filter core step loop
//!
//! Run with: cargo bench -p tamiz-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tamiz_core::{CycleInput, FilterCore, Mode, Profile};

const BLOCK_SIZES: &[usize] = &[64, 256, 1024, 4096];

fn generate_samples(size: usize) -> Vec<u8> {
    // xorshift32 keeps the input deterministic without pulling in a RNG crate
    let mut state = 0x12345678u32;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0x3F) as u8
        })
        .collect()
}

fn bench_mode_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ModeDispatch");

    for &block_size in BLOCK_SIZES {
        let samples = generate_samples(block_size);

        group.bench_with_input(
            BenchmarkId::new("step", block_size),
            &block_size,
            |b, _| {
                let mut core = FilterCore::new();
                b.iter(|| {
                    for (i, &s) in samples.iter().enumerate() {
                        let mode = Mode::from_bits(i as u8);
                        black_box(core.step(black_box(CycleInput::active(s, mode))));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_fixed_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("FixedAverage");

    for &block_size in BLOCK_SIZES {
        let samples = generate_samples(block_size);

        group.bench_with_input(
            BenchmarkId::new("step", block_size),
            &block_size,
            |b, _| {
                let mut core = FilterCore::with_profile(Profile::FixedAverage);
                b.iter(|| {
                    for &s in &samples {
                        black_box(core.step(black_box(CycleInput::active(s, Mode::Bypass))));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mode_dispatch, bench_fixed_average);
criterion_main!(benches);
