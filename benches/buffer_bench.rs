//! Benchmarks for octbuf.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use octbuf::{Buffer, DEFAULT_WIDTH};

fn bench_xor(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor");

    for size in [64, 4 * 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let buf = Buffer::from_fn(size, |i| (i * 7 + 13) % 256).unwrap();
        let key = Buffer::from_fn(DEFAULT_WIDTH, |i| i * 31 % 256).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("byte_{}", size), &buf, |b, buf| {
            b.iter(|| black_box(buf.xor(black_box(0x5A)).unwrap()));
        });
        group.bench_with_input(format!("key_{}", size), &buf, |b, buf| {
            b.iter(|| black_box(buf.xor(black_box(&key)).unwrap()));
        });
    }

    group.finish();
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");

    // No carry
    group.bench_function("succ_mut", |b| {
        let mut counter = Buffer::from_u128(0);
        b.iter(|| {
            counter.succ_mut();
            black_box(counter.get(15).unwrap())
        });
    });

    // Carry through every byte (worst case)
    group.bench_function("succ_wrap", |b| {
        let max = Buffer::from_u128(u128::MAX);
        b.iter(|| black_box(max.succ()));
    });

    group.bench_function("int_round_trip", |b| {
        b.iter(|| {
            let buf = Buffer::from_int(black_box(0x0123_4567_89AB_CDEFu64), 8).unwrap();
            black_box(buf.to_u128().unwrap())
        });
    });

    group.finish();
}

fn bench_slicing(c: &mut Criterion) {
    let mut group = c.benchmark_group("slicing");
    let size = 1024 * 1024; // 1 MB
    let buf = Buffer::new(size);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("slices", |b| {
        b.iter(|| black_box(buf.slices(DEFAULT_WIDTH).unwrap().len()));
    });

    group.bench_function("each_slice", |b| {
        b.iter(|| {
            let mut count = 0usize;
            buf.each_slice(DEFAULT_WIDTH, |_| count += 1).unwrap();
            black_box(count)
        });
    });

    group.bench_function("fnv_hash", |b| {
        b.iter(|| black_box(buf.fnv_hash()));
    });

    group.finish();
}

criterion_group!(benches, bench_xor, bench_counter, bench_slicing);
criterion_main!(benches);
