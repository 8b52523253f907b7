//! Throughput of the individual normalization passes
//!
//! Run with: cargo bench --bench normalize_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sayable_core::numeral::expand_numerals;
use sayable_core::{split_into_chunks, CurrencyNormalizer, LayoutRepair, LexicalRules};
use std::hint::black_box;

fn generate_text(size: usize) -> String {
    let base = "The deal was worth £800m ($1.08bn) in 2023, up 12% from the 3rd quarter. \
                Dr. Smith drove 120km/h for 2h. ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("passes");
    let text = generate_text(10_240);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("layout", |b| {
        b.iter(|| LayoutRepair::shared(false).repair(black_box(&text)))
    });
    group.bench_function("currency", |b| {
        b.iter(|| CurrencyNormalizer::shared().normalize(black_box(&text)))
    });
    group.bench_function("lexical", |b| {
        b.iter(|| LexicalRules::shared().apply(black_box(&text)))
    });
    group.bench_function("numerals", |b| {
        b.iter(|| expand_numerals(black_box(&text)))
    });

    group.finish();
}

fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| split_into_chunks(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_passes, bench_chunking);
criterion_main!(benches);
