//! Benchmarks for scanning and parsing slide markup.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skit::{parse, tokenize};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A deck of `slides` slides, each with every kind of line.
fn synthetic_deck(slides: usize) -> String {
    let mut deck = String::new();
    for i in 0..slides {
        deck.push_str(&format!("/! slide {}\n", i));
        deck.push_str(&format!("/# Slide number {}\n", i));
        deck.push_str(&format!("/_ {}\n/^ {}\n", i % 256, (i * 7) % 256));
        for line in 0..5 {
            deck.push_str(&format!("Body line {} of slide {} with some längere Wörter\n", line, i));
        }
        if i % 4 == 0 {
            deck.push_str("/@ ./images/figure.png\n");
        }
        deck.push('\n');
    }
    deck
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    let fixture = load_fixture("vacation.skit");
    let large = synthetic_deck(500);

    group.bench_function("tokenize_fixture", |b| {
        b.iter(|| tokenize(black_box(&fixture)).count())
    });

    group.bench_function("tokenize_500_slides", |b| {
        b.iter(|| tokenize(black_box(&large)).count())
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let fixture = load_fixture("vacation.skit");
    let large = synthetic_deck(500);

    group.bench_function("parse_fixture", |b| {
        b.iter(|| parse(black_box(&fixture)).unwrap())
    });

    group.bench_function("parse_500_slides", |b| {
        b.iter(|| parse(black_box(&large)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scanning, bench_parsing);
criterion_main!(benches);
