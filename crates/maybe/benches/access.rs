// Benchmarks for container access and driver coercion
//
// Covers the hot paths: reading a present value, and encoding/decoding
// native and textual driver values.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use maybe::{DriverValue, Nullable, Optional};

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    let opt = Optional::some(42_i64);
    group.bench_function("optional_try_get", |b| {
        b.iter(|| black_box(&opt).try_get());
    });

    let n = Nullable::valid(42_i64);
    group.bench_function("nullable_extract", |b| {
        b.iter(|| black_box(&n).extract());
    });

    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver");

    let wide = Nullable::valid(42_i64);
    group.bench_function("encode_i64_passthrough", |b| {
        b.iter(|| black_box(&wide).to_driver_value().unwrap());
    });

    let narrow = Nullable::valid(42_u16);
    group.bench_function("encode_u16_widen", |b| {
        b.iter(|| black_box(&narrow).to_driver_value().unwrap());
    });

    let native = DriverValue::Int64(42);
    group.bench_function("decode_i32_from_int64", |b| {
        b.iter(|| Nullable::<i32>::from_driver_value(black_box(native.clone())).unwrap());
    });

    let text = DriverValue::text("42");
    group.bench_function("decode_i32_from_text", |b| {
        b.iter(|| Nullable::<i32>::from_driver_value(black_box(text.clone())).unwrap());
    });

    let string = DriverValue::text("hello");
    group.bench_function("decode_string_from_bytes", |b| {
        b.iter(|| Nullable::<String>::from_driver_value(black_box(string.clone())).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_access, bench_driver);
criterion_main!(benches);
