//! Criterion benchmarks for termlog
//!
//! The interesting number is the cost of a suppressed call: reaching an
//! absent slot should skip message construction entirely.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termlog::{LogLevel, Message, Terminal};

// ============================================================================
// Suppressed-Call Benchmarks
// ============================================================================

fn bench_suppressed_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_calls");
    group.throughput(Throughput::Elements(1));

    let terminal = Terminal::with_level(LogLevel::Critical);

    group.bench_function("lazy_skipped", |b| {
        b.iter(|| {
            if let Some(writer) = terminal.debug() {
                writer
                    .write(Message::lazy(|| format!("expensive payload: {}", black_box(42))))
                    .ok();
            }
        });
    });

    group.bench_function("eager_discarded", |b| {
        b.iter(|| {
            let message = format!("expensive payload: {}", black_box(42));
            if let Some(writer) = terminal.debug() {
                writer.write(message).ok();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Message Resolution Benchmarks
// ============================================================================

fn bench_message_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_resolution");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ready", |b| {
        b.iter(|| black_box(Message::from("plain message").resolve()));
    });

    group.bench_function("deferred", |b| {
        b.iter(|| black_box(Message::lazy(|| String::from("plain message")).resolve()));
    });

    group.finish();
}

// ============================================================================
// Terminal Construction Benchmarks
// ============================================================================

fn bench_terminal_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_level", |b| {
        b.iter(|| black_box(Terminal::with_level(black_box(LogLevel::Info))));
    });

    group.bench_function("named", |b| {
        b.iter(|| black_box(Terminal::named(black_box("svc"), black_box(LogLevel::Info))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_suppressed_calls,
    bench_message_resolution,
    bench_terminal_creation
);
criterion_main!(benches);
