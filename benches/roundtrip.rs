use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvline::{parse, serialize, to_json, Document};

fn sample_document(pairs: usize) -> Document {
    (0..pairs)
        .map(|i| (format!("key{}", i), format!("value {} with \"quotes\"", i)))
        .collect()
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let input = r#"host: "db-1" state: "ready" note: "says \"hi\"""#;

    c.bench_function("parse_simple", |b| b.iter(|| parse(black_box(input))));
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let doc = sample_document(3);

    c.bench_function("serialize_simple", |b| {
        b.iter(|| serialize(black_box(&doc)))
    });
}

fn benchmark_parse_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sized");

    for size in [10, 50, 100, 500].iter() {
        let text = serialize(&sample_document(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serialize_sized(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_sized");

    for size in [10, 50, 100, 500].iter() {
        let doc = sample_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| serialize(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_escape_heavy_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_heavy");

    let plain: Document = (0..50)
        .map(|i| (format!("k{}", i), "plain value".to_string()))
        .collect();
    let quoted: Document = (0..50)
        .map(|i| (format!("k{}", i), "\"lots\" of \"quotes\" here".to_string()))
        .collect();

    group.bench_function("plain_values", |b| b.iter(|| serialize(black_box(&plain))));
    group.bench_function("quoted_values", |b| {
        b.iter(|| serialize(black_box(&quoted)))
    });

    let plain_text = serialize(&plain).unwrap();
    let quoted_text = serialize(&quoted).unwrap();

    group.bench_function("parse_plain_values", |b| {
        b.iter(|| parse(black_box(&plain_text)))
    });
    group.bench_function("parse_quoted_values", |b| {
        b.iter(|| parse(black_box(&quoted_text)))
    });

    group.finish();
}

fn benchmark_json_projection(c: &mut Criterion) {
    let doc = sample_document(50);

    let mut group = c.benchmark_group("projection");

    group.bench_function("to_json", |b| b.iter(|| to_json(black_box(&doc))));
    group.bench_function("to_text", |b| b.iter(|| serialize(black_box(&doc))));

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let doc = sample_document(10);

    c.bench_function("roundtrip_10_pairs", |b| {
        b.iter(|| {
            let text = serialize(black_box(&doc)).unwrap();
            let _parsed = parse(black_box(&text)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_serialize_simple,
    benchmark_parse_sized,
    benchmark_serialize_sized,
    benchmark_escape_heavy_values,
    benchmark_json_projection,
    benchmark_roundtrip
);
criterion_main!(benches);
