use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use pointview_linalg::{Matrix, Vector};

fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");
    let mut rng = StdRng::seed_from_u64(0);

    for num_points in [100, 1_000, 10_000] {
        let points = Matrix::random_with_rng(3, num_points, &mut rng).unwrap();
        let transform = Matrix::rotation(5.0);

        group.bench_with_input(
            BenchmarkId::new("transform_points", num_points),
            &points,
            |b, points| {
                b.iter(|| black_box(Matrix::product(&transform, points).unwrap()));
            },
        );

        // same product through faer for reference
        let points_faer =
            faer::Mat::<f32>::from_fn(3, num_points, |i, j| points.get(i, j).unwrap());
        let transform_faer =
            faer::Mat::<f32>::from_fn(3, 3, |i, j| transform.get(i, j).unwrap());

        group.bench_with_input(
            BenchmarkId::new("transform_points_faer", num_points),
            &points_faer,
            |b, points| {
                b.iter(|| black_box(&transform_faer * points));
            },
        );
    }
}

fn bench_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("times");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [3, 32, 256] {
        let a = Matrix::random_with_rng(size, size, &mut rng).unwrap();
        let x = Vector::from(vec![1.0; size]);

        group.bench_with_input(BenchmarkId::new("times", size), &a, |b, a| {
            b.iter(|| black_box(a.times(&x).unwrap()));
        });
    }
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let mut rng = StdRng::seed_from_u64(2);

    for size in [4, 32, 128] {
        let a = Matrix::random_with_rng(size, size + 1, &mut rng).unwrap();

        group.bench_with_input(BenchmarkId::new("rref", size), &a, |b, a| {
            b.iter(|| black_box(a.rref()));
        });
    }
}

criterion_group!(benches, bench_product, bench_times, bench_reduce);
criterion_main!(benches);
