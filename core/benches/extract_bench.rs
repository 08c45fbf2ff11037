use criterion::{criterion_group, criterion_main, Criterion};
use pagedex_core::pages::index_pages;
use pagedex_core::scan::Strategy;
use pagedex_core::vocab::extract_dictionary_with;
use std::fmt::Write as _;
use std::fs;

fn bench_extract(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let mut dict = String::new();
    let mut doc = String::new();
    for i in 0..20_000 {
        writeln!(dict, "word{i},definition number {i}, with a comma").unwrap();
        writeln!(doc, "The quick brown fox {i} jumps over the lazy dog, again and again.").unwrap();
    }
    let dict_path = dir.path().join("dict.csv");
    let doc_path = dir.path().join("doc.txt");
    fs::write(&dict_path, dict).unwrap();
    fs::write(&doc_path, doc).unwrap();

    c.bench_function("dictionary_fan_out", |b| {
        b.iter(|| extract_dictionary_with(&dict_path, Strategy::FanOut).unwrap())
    });
    c.bench_function("dictionary_ordered", |b| {
        b.iter(|| extract_dictionary_with(&dict_path, Strategy::Ordered).unwrap())
    });
    c.bench_function("page_index", |b| b.iter(|| index_pages(&doc_path).unwrap()));
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
