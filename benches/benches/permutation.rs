//! Permutation Benchmark
//!
//! Cost of `p^r` alone for the round counts other constructions use.

#![allow(missing_docs)]
use ascon_mac::kernels::permutation::{permute, State};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ascon Permutation");

    for rounds in [1usize, 6, 8, 12] {
        group.bench_function(format!("p^{rounds}"), |b| {
            let mut s: State = [1, 2, 3, 4, 5];
            b.iter(|| {
                permute(black_box(&mut s), rounds);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rounds);
criterion_main!(benches);
