//! Benchmarks for determinant strategies and linear solving.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use exmat::prelude::*;

/// Generates a dense integer matrix with a deterministic pattern.
fn integer_matrix(n: usize) -> Matrix<Expr> {
    Matrix::from_fn(n, n, |r, c| {
        let v = ((r * 7 + c * 13 + r * c) % 19) as i64 - 9;
        Expr::from_i64(v)
    })
    .unwrap()
}

/// Generates a sparse symbolic tridiagonal matrix.
fn tridiagonal(n: usize) -> Matrix<Expr> {
    let x = Expr::named("bench_x").unwrap();
    let y = Expr::named("bench_y").unwrap();
    Matrix::from_fn(n, n, |r, c| match r.abs_diff(c) {
        0 => x.clone(),
        1 => y.clone(),
        _ => Expr::from_i64(0),
    })
    .unwrap()
}

fn bench_numeric_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("det_numeric");

    for size in [4, 8, 12] {
        let m = integer_matrix(size);
        for algorithm in [
            DeterminantAlgorithm::Gauss,
            DeterminantAlgorithm::Bareiss,
            DeterminantAlgorithm::Laplace,
        ] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &size,
                |b, _| b.iter(|| black_box(m.determinant_with(algorithm).unwrap())),
            );
        }
    }

    group.finish();
}

fn bench_symbolic_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("det_symbolic");
    group.sample_size(20);

    for size in [3, 4, 5] {
        let m = Matrix::<Expr>::symbolic(size, size, "s").unwrap();
        for algorithm in [
            DeterminantAlgorithm::Laplace,
            DeterminantAlgorithm::Bareiss,
            DeterminantAlgorithm::Divfree,
        ] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &size,
                |b, _| b.iter(|| black_box(m.determinant_with(algorithm).unwrap())),
            );
        }
    }

    let sparse = tridiagonal(12);
    group.bench_function("tridiagonal_12_laplace", |b| {
        b.iter(|| black_box(sparse.determinant_with(DeterminantAlgorithm::Laplace).unwrap()))
    });
    group.bench_function("tridiagonal_12_bareiss", |b| {
        b.iter(|| black_box(sparse.determinant_with(DeterminantAlgorithm::Bareiss).unwrap()))
    });

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for size in [4, 8, 12] {
        let a = integer_matrix(size);
        let rhs = Matrix::from_fn(size, 1, |r, _| Expr::from_i64(r as i64 + 1)).unwrap();
        let vars = Matrix::<Expr>::symbolic(size, 1, "u").unwrap();
        for algorithm in [
            EchelonAlgorithm::Gauss,
            EchelonAlgorithm::Bareiss,
            EchelonAlgorithm::Markowitz,
        ] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &size,
                |b, _| b.iter(|| black_box(a.solve(&vars, &rhs, algorithm))),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_numeric_determinant,
    bench_symbolic_determinant,
    bench_solve
);

criterion_main!(benches);
