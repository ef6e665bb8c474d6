use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ring_collections::{CircularBuffer, Discard, Heap, HeapBuffer, Overwrite};
use std::collections::VecDeque;

const OPS: usize = 1024;

fn bench_push_overwrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sliding window (PushBack 1024 into 64)");

    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::with_capacity(64);
            for i in 0..OPS {
                if d.len() == 64 {
                    d.pop_front();
                }
                d.push_back(black_box(i as u64));
            }
            d
        })
    });

    group.bench_function("CircularBuffer<u64, 64> (pow2, inline)", |b| {
        b.iter(|| {
            let mut d: CircularBuffer<u64, 64> = CircularBuffer::new();
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
            }
            d
        })
    });

    group.bench_function("CircularBuffer<u64, 63> (modulo, inline)", |b| {
        b.iter(|| {
            let mut d: CircularBuffer<u64, 63> = CircularBuffer::new();
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
            }
            d
        })
    });

    group.bench_function("HeapBuffer<u64, 64>", |b| {
        b.iter(|| {
            let mut d: HeapBuffer<u64, 64> = CircularBuffer::new();
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
            }
            d
        })
    });

    group.bench_function("CircularBuffer<u64, 64, Overwrite, u8>", |b| {
        b.iter(|| {
            let mut d: CircularBuffer<u64, 64, Overwrite, u8> = CircularBuffer::new();
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
            }
            d
        })
    });
    group.finish();
}

fn bench_bounded_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bounded queue (push/pop 1024, cap 16)");

    group.bench_function("heapless::Deque<u64, 16>", |b| {
        b.iter(|| {
            let mut d: heapless::Deque<u64, 16> = heapless::Deque::new();
            let mut sum = 0u64;
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
                if i % 3 == 0 {
                    sum += d.pop_front().unwrap_or(0);
                }
            }
            sum
        })
    });

    group.bench_function("CircularBuffer<u64, 16, Discard>", |b| {
        b.iter(|| {
            let mut d: CircularBuffer<u64, 16, Discard> = CircularBuffer::new();
            let mut sum = 0u64;
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
                if i % 3 == 0 {
                    sum += d.take_front().unwrap_or(0);
                }
            }
            sum
        })
    });

    group.bench_function("CircularBuffer<u64, 16, Discard, u32, Heap>", |b| {
        b.iter(|| {
            let mut d: CircularBuffer<u64, 16, Discard, u32, Heap> = CircularBuffer::new();
            let mut sum = 0u64;
            for i in 0..OPS {
                let _ = d.push_back(black_box(i as u64));
                if i % 3 == 0 {
                    sum += d.take_front().unwrap_or(0);
                }
            }
            sum
        })
    });
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random access (Get 100, wrapped)");
    let mut d_std: VecDeque<u32> = VecDeque::with_capacity(100);
    let mut d_pow2: CircularBuffer<u32, 128> = CircularBuffer::new();
    let mut d_mod: CircularBuffer<u32, 100> = CircularBuffer::new();
    for i in 0..250 {
        if d_std.len() == 100 {
            d_std.pop_front();
        }
        d_std.push_back(i);
        let _ = d_pow2.push_back(i);
        let _ = d_mod.push_back(i);
    }

    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(d_std.get(black_box(i)));
            }
        })
    });

    group.bench_function("CircularBuffer<u32, 128> (pow2)", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(d_pow2.get(black_box(i)));
            }
        })
    });

    group.bench_function("CircularBuffer<u32, 100> (modulo)", |b| {
        b.iter(|| {
            for i in 0..100 {
                black_box(d_mod.get(black_box(i)));
            }
        })
    });

    group.bench_function("CircularBuffer<u32, 100> (iter)", |b| {
        b.iter(|| d_mod.iter().map(|&x| x as u64).sum::<u64>())
    });
    group.finish();
}

criterion_group!(benches, bench_push_overwrite, bench_bounded_queue, bench_random_access);
criterion_main!(benches);
