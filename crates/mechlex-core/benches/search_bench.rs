//! Criterion benchmarks for catalog build and query throughput.

use criterion::{Criterion, criterion_group, criterion_main};
use mechlex_core::{CatalogBuilder, CategoryTag, MechanicCatalog, RawEntry, Source, search};
use std::hint::black_box;

fn synthetic_entries(count: usize) -> Vec<RawEntry> {
    (0..count)
        .map(|i| RawEntry {
            name: format!("Mechanic Number {i}"),
            description: Some(format!("Mechanic {i} does a thing.[{i}]")),
            fallback_description: None,
            category: None,
            is_evergreen: i % 7 == 0,
            is_beginner_friendly: i % 5 == 0,
            source: match i % 3 {
                0 => Source::Official,
                1 => Source::EnhancedFallback,
                _ => Source::BasicFallback,
            },
            confidence: None,
            wiki_url: None,
        })
        .collect()
}

fn build_catalog(count: usize) -> MechanicCatalog {
    let mut builder = CatalogBuilder::new();
    builder.ingest_all(synthetic_entries(count));
    builder.build().expect("build").0
}

fn bench_build(c: &mut Criterion) {
    let entries = synthetic_entries(1000);
    c.bench_function("build_1000_entries", |b| {
        b.iter(|| {
            let mut builder = CatalogBuilder::new();
            builder.ingest_all(black_box(entries.clone()));
            builder.build().expect("build")
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = build_catalog(1000);

    c.bench_function("search_all_empty_query", |b| {
        b.iter(|| search(black_box(&catalog), CategoryTag::All, ""));
    });

    c.bench_function("search_all_substring", |b| {
        b.iter(|| search(black_box(&catalog), CategoryTag::All, "number 5"));
    });

    c.bench_function("search_evergreen_substring", |b| {
        b.iter(|| search(black_box(&catalog), CategoryTag::Evergreen, "7"));
    });
}

fn bench_lookup(c: &mut Criterion) {
    let catalog = build_catalog(1000);

    c.bench_function("lookup_by_name", |b| {
        b.iter(|| catalog.get_by_name(black_box("Mechanic Number 500")));
    });
}

criterion_group!(benches, bench_build, bench_search, bench_lookup);
criterion_main!(benches);
