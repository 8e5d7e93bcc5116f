//! Criterion benchmarks for verity-heuristics.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verity_heuristics::{explain, TextAnalyzer};

const SHORT: &str = "URGENTE!!! No vas a creer lo que pasó después con el escándalo del ovni";

fn long_text() -> String {
    "Según un estudio publicado en 2023 por la Universidad de Chile, el 45 por ciento de los \
     encuestados dice que se informa por redes sociales. "
        .repeat(40)
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = match TextAnalyzer::new() {
        Ok(a) => a,
        Err(e) => panic!("analyzer construction failed: {e}"),
    };
    let long = long_text();

    c.bench_function("analyze_short_headline", |b| {
        b.iter(|| analyzer.analyze(black_box(SHORT)))
    });

    c.bench_function("analyze_long_article", |b| {
        b.iter(|| analyzer.analyze(black_box(&long)))
    });

    let features = analyzer.analyze(SHORT);
    c.bench_function("explain_features", |b| b.iter(|| explain(black_box(&features))));
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
