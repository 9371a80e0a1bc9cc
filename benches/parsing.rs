//! Benchmarks for field extraction and preview rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markpair::document;
use markpair::preview;

fn article(sections: usize) -> String {
    let mut md = String::from("# Benchmark article\n\n> A punchy one-liner\n\nIntro paragraph.\n\nDescription paragraph with some **bold** text.\n\n");
    for i in 1..=sections {
        md.push_str(&format!(
            "## Section {i}\n\nSome body text with a [link](http://example.com/{i}) and `code`.\n\n- item one\n- item two\n\n"
        ));
    }
    md
}

fn bench_parse_small(c: &mut Criterion) {
    let md = article(3);
    c.bench_function("parse_small", |b| {
        b.iter(|| document::parse(black_box(&md)))
    });
}

fn bench_parse_large(c: &mut Criterion) {
    let md = article(100);
    c.bench_function("parse_large", |b| {
        b.iter(|| document::parse(black_box(&md)))
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let md = article(20);
    c.bench_function("parse_and_render", |b| {
        b.iter(|| {
            let parsed = document::parse(black_box(&md));
            preview::render(black_box(&parsed), 80)
        })
    });
}

criterion_group!(benches, bench_parse_small, bench_parse_large, bench_full_pipeline);
criterion_main!(benches);
