//! Benchmarks for rail fence cipher operations.
//!
//! Measures path generation, encrypt/decrypt throughput, and how the cost
//! scales with the rail count.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use railfence::{generate_path, RailFence, Rails};

/// Text used consistently across all benchmarks.
const BENCH_TEXT: &str = "the quick brown fox jumps over the lazy dog while we are discovered";

/// Benchmarks zigzag path generation for the bench text.
fn bench_generate_path(c: &mut Criterion) {
    let rails = Rails::new(5).unwrap();
    c.bench_function("generate_path", |b| {
        b.iter(|| generate_path(black_box(BENCH_TEXT.len()), rails));
    });
}

/// Benchmarks `encrypt()` with the default 3 rails.
fn bench_encrypt(c: &mut Criterion) {
    let fence = RailFence::default();

    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));
    group.bench_function("3_rails", |b| {
        b.iter(|| fence.encrypt(black_box(BENCH_TEXT)).unwrap());
    });
    group.finish();
}

/// Benchmarks `decrypt()` with the default 3 rails.
fn bench_decrypt(c: &mut Criterion) {
    let fence = RailFence::default();
    let cipher = fence.encrypt(BENCH_TEXT).unwrap().ciphertext;

    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Bytes(cipher.len() as u64));
    group.bench_function("3_rails", |b| {
        b.iter(|| fence.decrypt(black_box(&cipher)).unwrap());
    });
    group.finish();
}

/// Benchmarks `encrypt()` across rail counts.
///
/// The matrix is rails × length, so more rails means more inert cells to
/// allocate and scan.
fn bench_encrypt_rail_scaling(c: &mut Criterion) {
    let rail_counts: &[i64] = &[2, 8, 32];

    let mut group = c.benchmark_group("encrypt_rail_scaling");
    group.throughput(Throughput::Bytes(BENCH_TEXT.len() as u64));

    for &rails in rail_counts {
        let fence = RailFence::new(rails).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rails), &rails, |b, _| {
            b.iter(|| fence.encrypt(black_box(BENCH_TEXT)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_path,
    bench_encrypt,
    bench_decrypt,
    bench_encrypt_rail_scaling,
);
criterion_main!(benches);
