//! Benchmark suite for payout schedule decoding.
//!
//! This benchmark measures:
//! - Decode cost for single- and multi-currency documents
//! - Re-encode cost for decoded schedules
//! - The cost of the per-entry tag dispatch as documents grow
//!
//! Run with: `cargo bench --bench decode_overhead`

#![allow(clippy::let_underscore_must_use, reason = "Criterion benchmarks ignore results")]
#![allow(missing_docs, reason = "Benchmark functions are self-documenting")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use payout_schedule::PayoutSchedule;

/// Builds a schedule document with `currencies` entries cycling through the
/// three recurrence shapes.
fn sample_document(currencies: usize) -> Vec<u8> {
    let mut doc = String::from("{");
    for i in 0..currencies {
        let recurrence = match i % 3 {
            0 => r#"{"frequency": "Daily"}"#.to_owned(),
            1 => r#"{"frequency": "Weekly", "by_day": ["Monday", "Thursday"]}"#.to_owned(),
            _ => r#"{"frequency": "Monthly", "by_month_day": [1, 15, 28]}"#.to_owned(),
        };
        doc.push_str(&format!(
            r#""C{i:02}": {{"enabled": true, "threshold": {}, "recurrence": {recurrence}}},"#,
            i * 100
        ));
    }
    doc.push_str(r#""_links": {"self": {"href": "https://api.example.com/payouts/schedule"}}}"#);
    doc.into_bytes()
}

/// Benchmark decoding a small single-currency document.
fn bench_decode_single(c: &mut Criterion) {
    // Keep log output out of the measurement.
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::ERROR).try_init();

    let doc = sample_document(1);

    c.bench_function("decode_single_currency", |b| {
        b.iter(|| {
            let result = PayoutSchedule::from_json(black_box(&doc));
            let _ = black_box(result);
        });
    });
}

/// Benchmark decode cost as the currency count grows.
fn bench_decode_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_scaling");

    for currencies in [1usize, 10, 100] {
        let doc = sample_document(currencies);
        group.bench_with_input(BenchmarkId::from_parameter(currencies), &doc, |b, doc| {
            b.iter(|| {
                let result = PayoutSchedule::from_json(black_box(doc));
                let _ = black_box(result);
            });
        });
    }

    group.finish();
}

/// Benchmark re-encoding a decoded schedule back to the wire shape.
fn bench_reencode(c: &mut Criterion) {
    let doc = sample_document(10);
    let schedule = PayoutSchedule::from_json(&doc).expect("sample document should decode");

    c.bench_function("reencode_ten_currencies", |b| {
        b.iter(|| {
            let result = black_box(&schedule).to_json();
            let _ = black_box(result);
        });
    });
}

criterion_group!(benches, bench_decode_single, bench_decode_scaling, bench_reencode);
criterion_main!(benches);
