//! Criterion benchmarks for rust_structured_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_structured_logger::ctx;
use rust_structured_logger::handlers::resolve_lazy_values;
use rust_structured_logger::prelude::*;
use std::io;

fn sample_record() -> Record {
    Record::new(
        LogLevel::Info,
        "request served",
        ctx!["method", "GET", "path", "/api/orders", "status", 200, "elapsed_ms", 12.5],
    )
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let root = Logger::new(discard_handler()).child(["service", "bench"]);

    group.bench_function("new", |b| {
        b.iter(|| black_box(Logger::new(discard_handler())));
    });

    group.bench_function("child", |b| {
        b.iter(|| black_box(root.child(["request_id", "abc123"])));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();
    let logfmt = LogfmtFormat::new();
    let json = JsonFormat::new();

    group.bench_function("logfmt", |b| {
        b.iter(|| black_box(logfmt.format(black_box(&record))));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(json.format(black_box(&record))));
    });

    #[cfg(feature = "console")]
    {
        let terminal = TerminalFormat::new().with_colors(false);
        group.bench_function("terminal", |b| {
            b.iter(|| black_box(terminal.format(black_box(&record))));
        });
    }

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let discard = Logger::new(discard_handler()).child(["service", "bench"]);
    group.bench_function("discard", |b| {
        b.iter(|| discard.info_with_context(black_box("event"), ["k", "v"]));
    });

    let stream = Logger::new(stream_handler(io::sink(), LogfmtFormat::new()));
    group.bench_function("stream_logfmt", |b| {
        b.iter(|| stream.info_with_context(black_box("event"), ctx!["k", "v", "n", 42]));
    });

    let filtered = Logger::new(level_filter_handler(
        LogLevel::Warn,
        stream_handler(io::sink(), LogfmtFormat::new()),
    ));
    group.bench_function("filtered_out", |b| {
        b.iter(|| filtered.debug(black_box("hidden")));
    });

    group.finish();
}

// ============================================================================
// Lazy Resolution Benchmarks
// ============================================================================

fn bench_lazy_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_resolution");
    group.throughput(Throughput::Elements(1));

    let lazy = Lazy::new(|| 42);
    group.bench_function("resolve_one", |b| {
        b.iter(|| {
            let mut record = Record::new(
                LogLevel::Info,
                "lazy",
                vec![Value::from("answer"), Value::from(lazy.clone())],
            );
            black_box(resolve_lazy_values(&mut record))
        });
    });

    group.bench_function("no_lazy_values", |b| {
        b.iter(|| {
            let mut record = sample_record();
            black_box(resolve_lazy_values(&mut record))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_formatters,
    bench_emission,
    bench_lazy_resolution
);

criterion_main!(benches);
