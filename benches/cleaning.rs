//! Benchmarks for the cleaning pipeline.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use wikiclean::{Cleaner, PageReader, remove_refs, remove_templates};

const PAGE: &str = include_str!("../tests/fixtures/enwiki-anarchism.xml");

/// A dump with the fixture page repeated, for reader throughput.
fn sample_dump(pages: usize) -> String {
    let mut dump = String::from("<mediawiki>\n");
    for _ in 0..pages {
        dump.push_str(PAGE);
        dump.push('\n');
    }
    dump.push_str("</mediawiki>\n");
    dump
}

// ============================================================================
// Span Removal Benchmarks
// ============================================================================

fn bench_remove_refs(c: &mut Criterion) {
    c.bench_function("remove_refs", |b| {
        b.iter(|| remove_refs(PAGE));
    });
}

fn bench_remove_templates(c: &mut Criterion) {
    c.bench_function("remove_templates", |b| {
        b.iter(|| remove_templates(PAGE));
    });
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_clean(c: &mut Criterion) {
    let cleaner = Cleaner::builder().build().unwrap();

    c.bench_function("clean", |b| {
        b.iter(|| cleaner.clean(PAGE));
    });
}

fn bench_clean_with_footer(c: &mut Criterion) {
    let cleaner = Cleaner::builder()
        .with_title(true)
        .with_footer(true)
        .build()
        .unwrap();

    c.bench_function("clean_with_footer", |b| {
        b.iter(|| cleaner.clean(PAGE));
    });
}

// ============================================================================
// Dump Reader Benchmarks
// ============================================================================

fn bench_read_pages(c: &mut Criterion) {
    let dump = sample_dump(100);

    c.bench_function("read_pages", |b| {
        b.iter(|| PageReader::new(Cursor::new(dump.as_bytes())).count());
    });
}

criterion_group!(
    benches,
    // Span removal
    bench_remove_refs,
    bench_remove_templates,
    // Pipeline
    bench_clean,
    bench_clean_with_footer,
    // Dump reader
    bench_read_pages,
);
criterion_main!(benches);
