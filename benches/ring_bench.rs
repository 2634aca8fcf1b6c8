use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_ring::RingBuffer;

const SIZE: usize = 1024;

fn write_read(c: &mut Criterion) {
    c.bench_function("write read", |b| {
        let mut ring = RingBuffer::<usize, SIZE>::new();
        b.iter(|| {
            for i in 0..SIZE {
                ring.write(black_box(i));
            }
            while let Some(v) = ring.read() {
                black_box(v);
            }
        })
    });
}

fn bulk_write(c: &mut Criterion) {
    let src: Vec<u8> = (0..SIZE).map(|i| i as u8).collect();
    c.bench_function("bulk write", |b| {
        let mut ring = RingBuffer::<u8, SIZE>::new();
        b.iter(|| {
            assert!(ring.write_slice(black_box(&src)));
            ring.clear();
        })
    });
}

criterion_group!(ring_bench, write_read, bulk_write);
criterion_main!(ring_bench);
