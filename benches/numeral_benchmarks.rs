// Performance benchmarks for number spelling
//
// Run benchmarks with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use numerals::birthdate::BirthDate;
use numerals::tables::{Gender, Language};
use numerals::{batch, digest, payload, words};

/// Benchmark single conversions at each tier
fn bench_number_to_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_to_words");

    for n in [7u64, 999, 1990, 2_000_001, 999_999_999_999] {
        group.bench_with_input(BenchmarkId::new("greek", n), &n, |b, &n| {
            b.iter(|| words::number_to_words(black_box(n), false))
        });
        group.bench_with_input(BenchmarkId::new("english", n), &n, |b, &n| {
            b.iter(|| words::number_to_words(black_box(n), true))
        });
    }

    group.finish();
}

/// Benchmark sequential versus parallel batches
fn bench_batch(c: &mut Criterion) {
    let numbers: Vec<u64> = (0..10_000).map(|i| i * 104_729).collect();
    let mut group = c.benchmark_group("batch");

    group.bench_function("sequential", |b| {
        b.iter(|| {
            numbers
                .iter()
                .map(|&n| words::number_to_words(n, false))
                .collect::<Result<Vec<_>, _>>()
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| batch::spell_all(black_box(&numbers), Language::Greek, Gender::Neuter))
    });

    group.finish();
}

fn bench_birthdate(c: &mut Criterion) {
    c.bench_function("birthdate_to_words", |b| {
        b.iter(|| BirthDate::parse(black_box("23/03/1990")).and_then(|d| d.to_words()))
    });
}

fn bench_seal(c: &mut Criterion) {
    let doc = payload::from_str(r#"{"surname": "Παπαδοπούλου", "name": "Μαρία", "birthdate": "23/03/1990"}"#)
        .expect("valid payload");

    c.bench_function("seal", |b| {
        b.iter(|| {
            let mut doc = doc.clone();
            digest::seal_with_id(&mut doc, "0123456789abcdef0123456789abcdef")
        })
    });
}

criterion_group!(benches, bench_number_to_words, bench_batch, bench_birthdate, bench_seal);
criterion_main!(benches);
