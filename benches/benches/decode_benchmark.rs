//! Decoder benchmarks.
//!
//! Run with: `cargo bench --package kurus-bench`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kurus_bench::{synthetic_pairs, synthetic_series};
use kurus_decode::{decode_compact, decode_pairs};
use kurus_types::{DedupMode, SeriesOrder};

fn compact_benchmark(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let mut group = c.benchmark_group("decode_compact");

    for tokens in [100usize, 1_000, 10_000] {
        let raw = synthetic_series(tokens);
        group.throughput(Throughput::Elements(tokens as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tokens), &raw, |b, raw| {
            b.iter(|| decode_compact(raw, reference, SeriesOrder::OldestFirst).unwrap());
        });
    }

    group.finish();
}

fn pairs_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_pairs");

    for pairs in [100usize, 1_000] {
        let raw = synthetic_pairs(pairs, 1_700_000_000);
        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &raw, |b, raw| {
            b.iter(|| decode_pairs(raw, DedupMode::KeepAll).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, compact_benchmark, pairs_benchmark);
criterion_main!(benches);
