use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simple_vector::{SimpleVector, reserve};
use std::hint::black_box;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    let sizes = [16, 1000, 100_000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("simple_vector", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = SimpleVector::new();
                for i in 0..n as u64 {
                    v.push_back(black_box(i));
                }
                black_box(v)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("simple_vector_reserved", size),
            &size,
            |b, &n| {
                b.iter(|| {
                    let mut v = SimpleVector::reserved(reserve(n));
                    for i in 0..n as u64 {
                        v.push_back(black_box(i));
                    }
                    black_box(v)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("stdlib_vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n as u64 {
                    v.push(black_box(i));
                }
                black_box(v)
            });
        });
    }

    group.finish();
}

fn bench_insert_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase_front");

    for &size in &[100, 10_000] {
        let base: SimpleVector<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("simple_vector", size), &base, |b, base| {
            let mut v = base.clone();
            v.reserve(size + 1);
            b.iter(|| {
                v.insert(0, black_box(7));
                v.erase(0);
            });
        });

        let base: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("stdlib_vec", size), &base, |b, base| {
            let mut v = base.clone();
            v.reserve(1);
            b.iter(|| {
                v.insert(0, black_box(7));
                v.remove(0);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_erase_front);
criterion_main!(benches);
