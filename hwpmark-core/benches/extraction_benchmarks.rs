//! Benchmarks for the extraction pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hwpmark_core::domain::{normalize, RunExtractor};
use hwpmark_core::Converter;
use std::hint::black_box;

/// Generate a container-like blob of roughly `size_kb` kilobytes:
/// UTF-16LE paragraphs interleaved with binary record headers
fn generate_document(size_kb: usize) -> Vec<u8> {
    let paragraph = "본 문서는 성능 측정을 위한 예시 문단입니다. Sample text 123.\r";
    let encoded: Vec<u8> = paragraph
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();

    let target = size_kb * 1024;
    let mut bytes = Vec::with_capacity(target + encoded.len());
    let mut record = 0u8;
    while bytes.len() < target {
        bytes.extend_from_slice(&[0x42, 0x00, record, 0xE0, 0x00, 0x00]);
        bytes.extend_from_slice(&encoded);
        record = record.wrapping_add(1);
    }
    bytes
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let extractor = RunExtractor::new();

    for size_kb in [64, 1024, 8192] {
        let document = generate_document(size_kb);
        group.throughput(Throughput::Bytes(document.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size_kb}KB")),
            &document,
            |b, document| b.iter(|| extractor.scan(black_box(document))),
        );
    }

    group.finish();
}

fn benchmark_normalization(c: &mut Criterion) {
    let raw = RunExtractor::new().extract(&generate_document(1024));

    c.bench_function("normalize_1MB_document", |b| {
        b.iter(|| normalize(black_box(&raw)))
    });
}

fn benchmark_full_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    group.sample_size(20);

    let converter = Converter::new();
    let document = generate_document(4096);

    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("to_markdown_4MB", |b| {
        b.iter(|| converter.to_markdown(black_box(&document)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extraction,
    benchmark_normalization,
    benchmark_full_conversion
);
criterion_main!(benches);
