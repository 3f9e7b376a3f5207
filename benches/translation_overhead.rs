//! Translation Overhead Benchmarks
//!
//! Measures each pipeline stage in isolation and the chained translation
//! call, across request shapes of increasing complexity.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use esql_translator::generator::generate;
use esql_translator::parser::NlParser;
use esql_translator::policy::{check_raw_query, validate_intent};
use esql_translator::translator::QueryTranslator;

const REQUESTS: [(&str, &str); 3] = [
    ("simple", "Logins today"),
    (
        "filtered",
        "Show failed SSH logins from China in the last 6 hours",
    ),
    (
        "aggregated",
        "Failed logins by user from germany in the past 12 hours",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let parser = NlParser::new();
    let mut group = c.benchmark_group("parse");
    for (label, request) in REQUESTS {
        group.bench_with_input(BenchmarkId::from_parameter(label), request, |b, request| {
            b.iter(|| parser.parse(black_box(request)));
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let parser = NlParser::new();
    let mut group = c.benchmark_group("validate");
    for (label, request) in REQUESTS {
        let intent = parser.parse(request);
        group.bench_with_input(BenchmarkId::from_parameter(label), &intent, |b, intent| {
            b.iter(|| validate_intent(black_box(intent)));
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let parser = NlParser::new();
    let mut group = c.benchmark_group("generate");
    for (label, request) in REQUESTS {
        let intent = parser.parse(request);
        group.bench_with_input(BenchmarkId::from_parameter(label), &intent, |b, intent| {
            b.iter(|| generate(black_box(intent)));
        });
    }
    group.finish();
}

fn bench_full_translation(c: &mut Criterion) {
    let translator = QueryTranslator::new().expect("Failed to create translator");
    let mut group = c.benchmark_group("translate");
    for (label, request) in REQUESTS {
        group.bench_with_input(BenchmarkId::from_parameter(label), request, |b, request| {
            b.iter(|| translator.translate(black_box(request)));
        });
    }
    group.finish();
}

fn bench_raw_query_check(c: &mut Criterion) {
    let translator = QueryTranslator::new().expect("Failed to create translator");
    let query = translator
        .translate("Show failed SSH logins from China in the last 6 hours")
        .query
        .expect("Expected query");

    c.bench_function("check_raw_query", |b| {
        b.iter(|| check_raw_query(black_box(&query)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_validate,
    bench_generate,
    bench_full_translation,
    bench_raw_query_check
);
criterion_main!(benches);
