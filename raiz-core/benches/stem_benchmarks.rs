//! Benchmarks for single-word stemming

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use raiz_core::{stem, Regions};
use std::hint::black_box;

const SAMPLE_WORDS: &[&str] = &[
    "gatos",
    "caminando",
    "haciéndola",
    "comiéndoselo",
    "nacionalidad",
    "abundantemente",
    "hablaríamos",
    "persiguen",
    "organizaciones",
    "responsabilidad",
    "construyendo",
    "sigue",
];

/// Generate a vocabulary of roughly `count` words by cycling the sample
fn generate_vocabulary(count: usize) -> Vec<&'static str> {
    SAMPLE_WORDS.iter().copied().cycle().take(count).collect()
}

fn benchmark_single_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_word");

    for word in ["gatos", "haciéndola", "hablaríamos", "responsabilidad"] {
        group.bench_with_input(BenchmarkId::from_parameter(word), word, |b, word| {
            b.iter(|| stem(black_box(word)));
        });
    }

    group.finish();
}

fn benchmark_vocabulary(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_vocabulary");

    for size in [1_000, 10_000] {
        let words = generate_vocabulary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(stem(black_box(word)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_segmentation(c: &mut Criterion) {
    c.bench_function("regions_caminando", |b| {
        b.iter(|| {
            let regions = Regions::new(black_box("caminando"));
            black_box((regions.r1(), regions.r2(), regions.rv()));
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_words,
    benchmark_vocabulary,
    benchmark_segmentation
);
criterion_main!(benches);
