/// Sanitization and dispatch benchmarks
/// Measures text cleaning, object rebuilding and a full request round trip
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Map, Value};
use std::hint::black_box;
use std::time::Duration;

use api_event_handler::{sanitize_object, sanitize_text, Dispatcher, HttpEvent, InvocationMeta};

fn noisy_text(size: usize) -> String {
    (0..size)
        .map(|i| if i % 17 == 0 { '\u{7}' } else { 'a' })
        .collect()
}

fn nested_payload(fields: usize) -> Value {
    let mut root = Map::new();
    for i in 0..fields {
        root.insert(
            format!("field_{}", i),
            json!({
                "name": format!("item\u{0}{}", i),
                "price": i as f64 * 1.5,
                "tags": ["a", "b"],
                "meta": {"note": "line\u{1b}break"}
            }),
        );
    }
    Value::Object(root)
}

fn sanitize_text_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_text");
    group.measurement_time(Duration::from_secs(5));

    for size in [64, 1024, 10_000, 50_000].iter() {
        let size = *size;
        let input = noisy_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("control_chars", size), &input, |b, s| {
            b.iter(|| sanitize_text(black_box(s)))
        });
    }

    group.finish();
}

fn sanitize_object_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_object");

    for fields in [1, 10, 100].iter() {
        let payload = nested_payload(*fields);
        group.throughput(Throughput::Elements(*fields as u64));

        group.bench_with_input(BenchmarkId::new("nested", fields), &payload, |b, p| {
            b.iter(|| sanitize_object(black_box(p)).unwrap())
        });
    }

    group.finish();
}

fn dispatch_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let dispatcher = Dispatcher::default();
    let invocation = InvocationMeta::new("bench-request", "api-event-handler");

    let read = HttpEvent::new("GET", "/items");
    group.bench_function("read_list", |b| {
        b.iter(|| dispatcher.handle(black_box(&read), &invocation))
    });

    let create = HttpEvent::new("POST", "/items").with_body(nested_payload(10).to_string());
    group.bench_function("create_with_body", |b| {
        b.iter(|| dispatcher.handle(black_box(&create), &invocation))
    });

    let invalid = HttpEvent::new("CONNECT", "/items");
    group.bench_function("invalid_method", |b| {
        b.iter(|| dispatcher.handle(black_box(&invalid), &invocation))
    });

    group.finish();
}

criterion_group!(
    benches,
    sanitize_text_benchmarks,
    sanitize_object_benchmarks,
    dispatch_benchmarks
);
criterion_main!(benches);
