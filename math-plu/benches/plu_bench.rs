use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_plu::{PluConfig, PluFactorization, plu_invert};
use ndarray::{Array1, Array2};

/// Deterministic, diagonally dominant test matrix
fn test_matrix(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            n as f64 + 1.0
        } else {
            ((i * 7 + j * 13) % 11) as f64 / 11.0 - 0.5
        }
    })
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("plu_factorize");
    let config = PluConfig::default();

    for &n in &[8usize, 32, 128] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| PluFactorization::new(black_box(a.clone()), &config).unwrap())
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("plu_solve");
    let config = PluConfig::default();

    for &n in &[8usize, 32, 128] {
        let lu = PluFactorization::new(test_matrix(n), &config).unwrap();
        let rhs = Array1::from_shape_fn(n, |i| i as f64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &rhs, |b, rhs| {
            b.iter(|| lu.solve(black_box(rhs)).unwrap())
        });
    }
    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("plu_invert");
    let config = PluConfig::default();

    for &n in &[8usize, 32, 128] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| plu_invert(black_box(a.clone()), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factorize, bench_solve, bench_invert);
criterion_main!(benches);
