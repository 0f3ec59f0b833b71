//! Checked value overhead benchmarks.
//!
//! Measures construction, classification and the success path of the
//! propagation macros. The success path should cost no more than the
//! comparison it wraps.

use criterion::{Criterion, criterion_group, criterion_main};
use errcodes::prelude::*;
use std::hint::black_box;

fn fast_path(code: i32, sink: &mut MemorySink) -> CheckedValue<NegErrnoInfo, i32> {
    check!(code, NegErrnoInfo, sink);
    CheckedValue::success(code)
}

fn bench_construct(c: &mut Criterion) {
    c.bench_function("checked_value_success", |b| {
        b.iter(|| CheckedCValue::<u64>::success(black_box(42)));
    });

    c.bench_function("checked_code_classify", |b| {
        b.iter(|| CheckedNegErrno::new(black_box(-5)).has_value());
    });

    c.bench_function("failure_into_checked_value", |b| {
        b.iter(|| {
            let v: CheckedCValue<u64> = Failure::new(black_box(-1)).into();
            v.code()
        });
    });
}

fn bench_propagation(c: &mut Criterion) {
    let mut sink = MemorySink::new();

    c.bench_function("check_success_path", |b| {
        b.iter(|| fast_path(black_box(3), &mut sink).has_value());
    });

    c.bench_function("check_failure_path", |b| {
        b.iter(|| {
            let v = fast_path(black_box(-libc::EAGAIN), &mut sink);
            sink.take();
            v.code()
        });
    });
}

criterion_group!(benches, bench_construct, bench_propagation);
criterion_main!(benches);
