//! Performance benchmarks for the two core scanners
//!
//! Run with: cargo bench --bench scanner_benchmarks

use charspan_core::{longest_palindromic_substring, longest_unique_substring_len};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// English-ish filler with small palindromes scattered through it
fn generate_mixed_text(size: usize) -> String {
    let base = "the level radar saw a civic kayak pass the rotor at noon ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Benchmark the palindrome finder on typical and adversarial inputs
fn bench_palindrome(c: &mut Criterion) {
    let mut group = c.benchmark_group("palindrome");

    for size in [256, 1_024, 4_096] {
        let mixed = generate_mixed_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &mixed, |b, text| {
            b.iter(|| longest_palindromic_substring(black_box(text)));
        });

        // Single repeated character drives every center to a full expansion,
        // the documented O(n²) worst case.
        let adversarial = "a".repeat(size);
        group.bench_with_input(
            BenchmarkId::new("worst_case", size),
            &adversarial,
            |b, text| {
                b.iter(|| longest_palindromic_substring(black_box(text)));
            },
        );
    }

    group.finish();
}

/// Benchmark the sliding-window scanner across input sizes
fn bench_unique_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_window");

    for size in [1_024, 16_384, 262_144] {
        let mixed = generate_mixed_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &mixed, |b, text| {
            b.iter(|| longest_unique_substring_len(black_box(text)));
        });

        // Maximal eviction churn: every second character repeats.
        let churn: String = "ab".repeat(size / 2);
        group.bench_with_input(BenchmarkId::new("churn", size), &churn, |b, text| {
            b.iter(|| longest_unique_substring_len(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_palindrome, bench_unique_window);
criterion_main!(benches);
