//! Throughput Benchmark
//!
//! Tag throughput across message sizes, single-threaded and with one
//! independent computation per Rayon worker.

#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rayon::prelude::*;
use std::hint::black_box;

const KEY: [u8; 16] = [0x42; 16];

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ascon-Mac Tag");

    // Scenarios:
    // - Empty / 31B: padding block only
    // - 32B / 64B: exact block multiples (extra padding block)
    // - 1KB / 64KB / 1MB: bulk absorption
    let sizes = [0, 31, 32, 64, 1024, 64 * 1024, 1024 * 1024];

    for size in sizes {
        let input = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| ascon_mac::compute_tag(black_box(&KEY), black_box(input)));
        });
    }
    group.finish();
}

fn bench_parallel_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ascon-Mac Independent Messages");

    let messages: Vec<Vec<u8>> = (0..256u32).map(|i| vec![i as u8; 4096]).collect();
    let total: usize = messages.iter().map(Vec::len).sum();
    group.throughput(Throughput::Bytes(total as u64));

    group.bench_function("Sequential 256 x 4KB", |b| {
        b.iter(|| {
            messages
                .iter()
                .map(|m| ascon_mac::compute_tag(&KEY, black_box(m)))
                .collect::<Vec<_>>()
        });
    });

    group.bench_function("Rayon 256 x 4KB", |b| {
        b.iter(|| {
            messages
                .par_iter()
                .map(|m| ascon_mac::compute_tag(&KEY, black_box(m)))
                .collect::<Vec<_>>()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_sizes, bench_parallel_messages);
criterion_main!(benches);
