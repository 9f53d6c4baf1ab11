//! FILENAME: core/parser/benches/evaluate.rs
//! PURPOSE: Benchmarks for single-pass expression evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use smartcalc_parser::evaluate;

fn bench_simple_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, input) in [
        ("literal", "42"),
        ("precedence", "2+3*4-5/6"),
        ("power", "-2^3^2"),
        ("decimals", "3.14159*2.71828/1.41421"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("nesting");

    for depth in [10usize, 100, 500] {
        let input = format!("{}1+1{}", "(".repeat(depth), ")".repeat(depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &input, |b, input| {
            b.iter(|| evaluate(black_box(input)))
        });
    }

    group.finish();
}

fn bench_long_sums(c: &mut Criterion) {
    let input = vec!["1.5"; 1000].join("+");
    c.bench_function("long_sum_1000_terms", |b| b.iter(|| evaluate(black_box(&input))));
}

criterion_group!(benches, bench_simple_expressions, bench_nesting, bench_long_sums);
criterion_main!(benches);
