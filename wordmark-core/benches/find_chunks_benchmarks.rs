//! Performance benchmarks for find_chunks
//!
//! Run with: cargo bench --bench find_chunks_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordmark_core::{find_chunks, FindOptions, SearchTerm};

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "The quick brown fox jumps over the lazy dog near the river bank. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let terms = SearchTerm::literals(["the", "fox", "river"]);
    let options = FindOptions::default();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("find_chunks", size), &text, |b, text| {
            b.iter(|| find_chunks(black_box(&terms), black_box(text), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark growing term lists with heavy overlap
fn bench_term_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("term_counts");
    let text = generate_text(102_400);
    let options = FindOptions::builder().auto_escape(true).build();
    let vocabulary = ["the", "he", "e", "quick", "qu", "fox", "o", "lazy", "dog", "river"];

    for count in [1, 3, 10] {
        let terms = SearchTerm::literals(vocabulary.iter().take(count).copied());

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("terms", count), &terms, |b, terms| {
            b.iter(|| find_chunks(black_box(terms), black_box(&text), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_term_counts);
criterion_main!(benches);
