use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use javaprops::{parse_str, store_to_string, Encoding, LineEnding, PropertiesMap, ReadOptions,
    WriteOptions};

fn sample_map(size: usize) -> PropertiesMap {
    (0..size)
        .map(|i| {
            (
                format!("section{}.key{i}", i % 7),
                format!("value number {i} with some text and a caf\u{E9}"),
            )
        })
        .collect()
}

fn sample_text(size: usize) -> String {
    let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
    store_to_string(&sample_map(size), &options)
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = "host=localhost\nport: 8080\npath /var/data\n";

    c.bench_function("parse_three_pairs", |b| {
        b.iter(|| parse_str(black_box(text)))
    });
}

fn benchmark_parse_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 100, 500].iter() {
        let text = sample_text(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_str(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_store_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    let options = WriteOptions::new().with_line_ending(LineEnding::Lf);

    for size in [10, 50, 100, 500].iter() {
        let map = sample_map(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| store_to_string(black_box(map), &options));
        });
    }

    group.finish();
}

fn benchmark_continuations(c: &mut Criterion) {
    let mut text = String::from("key=");
    for _ in 0..200 {
        text.push_str("fragment text \\\n    ");
    }
    text.push_str("end\n");

    c.bench_function("parse_continued_line", |b| {
        b.iter(|| parse_str(black_box(&text)))
    });
}

fn benchmark_unicode_escapes(c: &mut Criterion) {
    let map: PropertiesMap = (0..100)
        .map(|i| (format!("key{i}"), "\u{4E2D}\u{6587} caf\u{E9} \u{1F980}".to_string()))
        .collect();
    let options = WriteOptions::new().with_line_ending(LineEnding::Lf);
    let text = store_to_string(&map, &options);

    c.bench_function("parse_unicode_escapes", |b| {
        b.iter(|| parse_str(black_box(&text)))
    });
    c.bench_function("store_unicode_escapes", |b| {
        b.iter(|| store_to_string(black_box(&map), &options))
    });
}

fn benchmark_decode_utf8_stream(c: &mut Criterion) {
    let text = sample_text(500);
    let bytes = text.as_bytes().to_vec();
    let options = ReadOptions::new().with_encoding(Encoding::Utf8);

    c.bench_function("load_utf8_bytes", |b| {
        b.iter(|| javaprops::load_from_slice(black_box(&bytes), &options))
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_parse_sizes,
    benchmark_store_sizes,
    benchmark_continuations,
    benchmark_unicode_escapes,
    benchmark_decode_utf8_stream
);
criterion_main!(benches);
