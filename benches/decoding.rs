//! Benchmarks for key decoding.

use std::collections::VecDeque;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use femto::input::KeyDecoder;

fn bench_decode_mixed_input(c: &mut Criterion) {
    let mut input = Vec::new();
    for _ in 0..1000 {
        input.extend_from_slice(b"hello world\r");
        input.extend_from_slice(b"\x1b[A\x1b[B\x1b[5~\x1b[6~\x1bOH\x1b[3~");
    }

    c.bench_function("decode_mixed_input", |b| {
        b.iter(|| {
            let source: VecDeque<u8> = input.iter().copied().collect();
            let mut decoder = KeyDecoder::new(source);
            let mut count = 0usize;
            while let Ok(Some(key)) = decoder.try_read_key() {
                black_box(key);
                count += 1;
            }
            count
        })
    });
}

criterion_group!(benches, bench_decode_mixed_input);
criterion_main!(benches);
