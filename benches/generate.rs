//! Benchmark for full table generation.
//!
//! Generation runs once per invocation in practice; this mostly guards
//! against accidental quadratic blowups in the emitter.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mktables::{PremiumLayout, generate_header};

fn bench_generate_header(c: &mut Criterion) {
    c.bench_function("generate_header", |b| {
        b.iter(|| {
            let header = generate_header();
            black_box(header)
        });
    });
}

fn bench_layout_validation(c: &mut Criterion) {
    c.bench_function("premium_layout_standard", |b| {
        b.iter(|| {
            let layout = PremiumLayout::standard();
            black_box(layout)
        });
    });
}

criterion_group!(benches, bench_generate_header, bench_layout_validation);
criterion_main!(benches);
