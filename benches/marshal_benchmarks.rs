use std::hint::black_box;

use amp_validator_bridge::codec::wire::{WireValidationError, WireValidationResult};
use amp_validator_bridge::{to_wire_record, ValidationResult};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prost::Message;

/// Encoded result with `count` findings cycling through a few codes
fn generate_result_bytes(count: usize) -> Vec<u8> {
    let codes = [1, 2, 4, 24, 61, 79];
    let errors = (0..count)
        .map(|i| WireValidationError {
            code: Some(codes[i % codes.len()]),
            line: Some(i as i32 + 1),
            col: Some((i % 80) as i32),
            spec_url: (i % 2 == 0).then(|| "https://amp.dev/documentation/components/".to_string()),
            severity: Some(if i % 3 == 0 { 4 } else { 1 }),
            params: vec!["amp-img".to_string(), format!("attr-{i}")],
            data_amp_report_test_value: None,
        })
        .collect();

    WireValidationResult {
        status: Some(2),
        errors,
        ..Default::default()
    }
    .encode_to_vec()
}

fn bench_from_wire_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_wire_bytes");

    for count in [0, 10, 100, 1000] {
        let bytes = generate_result_bytes(count);
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| {
                let result = ValidationResult::from_wire_bytes(black_box(bytes.as_slice()));
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_to_wire_record(c: &mut Criterion) {
    let result = ValidationResult::from_wire_bytes(generate_result_bytes(100)).expect("decode");

    c.bench_function("to_wire_record_100", |b| {
        b.iter(|| {
            for error in result.errors() {
                black_box(to_wire_record(black_box(error)));
            }
        })
    });
}

criterion_group!(marshal_benches, bench_from_wire_bytes, bench_to_wire_record);

criterion_main!(marshal_benches);
