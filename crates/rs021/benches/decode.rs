use criterion::{criterion_group, criterion_main, Criterion};
use rs021::prelude::*;

fn sample_block() -> Vec<u8> {
    let record = Cat21 {
        data_source: Some(DataSourceIdentification { sac: 0x14, sic: 0x81 }),
        target_address: Some(TargetAddress(0x3c660d)),
        target_identification: Some(TargetIdentification::new("KL1523")),
        position: Some(Position::new(48.35, 11.78)),
        time_reception_position: Some(TimeOfDay::from_seconds(37800.0)),
        ..Default::default()
    };
    record.to_bytes().unwrap()
}

fn decode_blocks(blocks: &[Vec<u8>]) {
    for block in blocks {
        let (_record, _consumed) = Cat21::from_bytes(block).unwrap();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let blocks = vec![sample_block(); 1000];
    c.bench_function("decode_1000_blocks", |b| b.iter(|| decode_blocks(&blocks)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
