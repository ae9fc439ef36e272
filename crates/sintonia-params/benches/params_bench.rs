//! Criterion benchmarks for the sintonia-params hot paths
//!
//! Run with: cargo bench -p sintonia-params
#![allow(missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sintonia_params::{NumericRange, ParameterEditor, PrecisionSpec, SignSpec};

fn bench_clamp(c: &mut Criterion) {
    let range = NumericRange::new(20.0, 20_000.0, 1000.0, 10.0);
    c.bench_function("range_clamp", |b| {
        b.iter(|| black_box(range.clamp(black_box(96_000.0))));
    });
}

fn bench_precision_adjust(c: &mut Criterion) {
    let spec = PrecisionSpec::new(100.0, 1);
    let mut group = c.benchmark_group("precision_adjust");
    group.bench_function("below_cutoff", |b| {
        b.iter(|| black_box(spec.adjust(black_box(63.27))));
    });
    group.bench_function("above_cutoff", |b| {
        b.iter(|| black_box(spec.adjust(black_box(1500.49))));
    });
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let sign = SignSpec::new(true);
    let mut group = c.benchmark_group("sign");
    group.bench_function("decorate", |b| {
        b.iter(|| black_box(sign.decorate(black_box(6.0), black_box("6"))));
    });
    group.bench_function("undecorate", |b| {
        b.iter(|| black_box(sign.undecorate(black_box("+6"))));
    });
    group.finish();
}

fn bench_editor(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor");
    group.bench_function("set_text", |b| {
        let mut editor = ParameterEditor::frequency(20.0, 20_000.0, 1000.0);
        b.iter(|| black_box(editor.set_text(black_box("63.27"))));
    });
    group.bench_function("display_text", |b| {
        let mut editor = ParameterEditor::gain(-18.0, 18.0, 0.0, true);
        editor.set_value(6.0);
        b.iter(|| black_box(editor.display_text()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_clamp,
    bench_precision_adjust,
    bench_sign,
    bench_editor
);
criterion_main!(benches);
