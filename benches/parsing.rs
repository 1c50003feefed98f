//! Benchmarks for chatlens parsing and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- whatsapp`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chatlens::output::to_csv;
use chatlens::{ChatParser, Messenger};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let hour = i % 24;
        let minute = i % 60;
        lines.push(format!(
            "2024-01-15, {hour:02}:{minute:02} - {sender} Smith: Message number {i}"
        ));
    }
    lines.join("\n")
}

fn generate_export_with_continuations(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 3);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "2024-01-15, {:02}:{:02} - {sender} Smith: Message number {i}",
            i % 24,
            i % 60
        ));
        lines.push("and a second line".to_owned());
        lines.push("and a third".to_owned());
    }
    lines.join("\n")
}

fn generate_bracket_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "[1/15/24, {}:{:02}:00 AM] {sender}: Message number {i}",
            1 + i % 9,
            i % 60
        ));
    }
    lines.join("\n")
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_whatsapp_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("whatsapp_parsing");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let table = parser.parse(black_box(txt), Messenger::WhatsApp).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

fn bench_multiline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiline_parsing");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000] {
        let txt = generate_export_with_continuations(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let table = parser.parse(black_box(txt), Messenger::WhatsApp).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

fn bench_bracket_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_parsing");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000] {
        let txt = generate_bracket_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let table = parser.parse(black_box(txt), Messenger::WhatsApp).unwrap();
                black_box(table)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_csv");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000] {
        let table = parser
            .parse(&generate_export(size), Messenger::WhatsApp)
            .unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| {
                let csv = to_csv(black_box(table)).unwrap();
                black_box(csv)
            });
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = ChatParser::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // Full pipeline: parse -> csv
                let table = parser.parse(black_box(txt), Messenger::WhatsApp).unwrap();
                let csv = to_csv(&table).unwrap();
                black_box(csv)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_whatsapp_parsing,
    bench_multiline_parsing,
    bench_bracket_parsing,
    bench_output_csv,
    bench_full_pipeline,
);

criterion_main!(benches);
