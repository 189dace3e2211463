//! Benchmarks for the address recognition rules

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use w3w_core::{find_candidates, is_full_match, is_likely_typo};

/// Generate prose of roughly `size_kb` kilobytes with an address every sentence
fn generate_prose(size_kb: usize) -> String {
    let base = "The delivery went to ///filled.count.soap after 3.5 hours, e.g. by bike. ";
    base.repeat(size_kb * 1024 / base.len())
}

/// Inputs that make backtracking engines blow up
fn generate_adversarial(len: usize) -> String {
    format!("{}!", "ab.".repeat(len / 3))
}

fn benchmark_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_candidates");

    for size_kb in [1, 64, 1024] {
        let text = generate_prose(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("prose", size_kb), &text, |b, text| {
            b.iter(|| find_candidates(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");

    group.bench_function("full_match_hit", |b| {
        b.iter(|| is_full_match(black_box("///filled.count.soap")));
    });
    group.bench_function("full_match_multi_token", |b| {
        b.iter(|| is_full_match(black_box("new york.some place.here")));
    });
    group.bench_function("likely_typo_hit", |b| {
        b.iter(|| is_likely_typo(black_box("filled, count, soap")));
    });

    group.finish();
}

fn benchmark_adversarial(c: &mut Criterion) {
    let mut group = c.benchmark_group("adversarial");
    group.sample_size(20);

    for len in [1_000, 100_000] {
        let text = generate_adversarial(len);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("full_match", len), &text, |b, text| {
            b.iter(|| is_full_match(black_box(text)));
        });
        group.bench_with_input(BenchmarkId::new("likely_typo", len), &text, |b, text| {
            b.iter(|| is_likely_typo(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_find,
    benchmark_predicates,
    benchmark_adversarial
);
criterion_main!(benches);
