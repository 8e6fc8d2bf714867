use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use densela::linalg::{DetMethod, InverseMethod, Weighting};
use densela::{Matrix, Vector};

// ---------------------------------------------------------------------------
// Helpers: diagonally dominant, so every strategy succeeds
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| {
        ((i + 1) * 10 + j + 1) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
    })
}

fn tall(m: usize, n: usize) -> Matrix<f64> {
    Matrix::from_fn(m, n, |i, j| ((i + 1) as f64 / m as f64).powi(j as i32))
}

// ---------------------------------------------------------------------------
// Matrix multiply
// ---------------------------------------------------------------------------

fn matmul(c: &mut Criterion) {
    let mut g = c.benchmark_group("matmul");

    for n in [4, 16, 64] {
        let a = Matrix::from_fn(n, n, |i, j| (i * n + j + 1) as f64);
        let m = Matrix::from_fn(n, n, |i, j| (i + j + 1) as f64);
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a) * std::hint::black_box(&m))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Determinant: cofactor expansion vs elimination
// ---------------------------------------------------------------------------

fn determinant(c: &mut Criterion) {
    let mut g = c.benchmark_group("det");

    for n in [3, 5, 7] {
        let a = dominant(n);
        g.bench_with_input(BenchmarkId::new("cofactor", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).det_with(DetMethod::Cofactor))
        });
        g.bench_with_input(BenchmarkId::new("elimination", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).det_with(DetMethod::Elimination))
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_3x3");
    let a = dominant(3);

    for method in [
        InverseMethod::Adjugate3x3,
        InverseMethod::GaussJordan,
        InverseMethod::Augmented,
    ] {
        g.bench_function(format!("{:?}", method), |b| {
            b.iter(|| std::hint::black_box(&a).inverse_with(method))
        });
    }

    g.finish();
}

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse");

    for n in [6, 20, 50] {
        let a = dominant(n);
        g.bench_with_input(BenchmarkId::new("gauss_jordan", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).inverse_with(InverseMethod::GaussJordan))
        });
        g.bench_with_input(BenchmarkId::new("augmented", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).inverse_with(InverseMethod::Augmented))
        });
    }

    g.finish();
}

fn rank(c: &mut Criterion) {
    let mut g = c.benchmark_group("rank");

    for n in [6, 50] {
        let a = dominant(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&a).rank())
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Least squares
// ---------------------------------------------------------------------------

fn least_squares(c: &mut Criterion) {
    let mut g = c.benchmark_group("least_squares_100x4");
    let a = tall(100, 4);
    let y = Vector::from_fn(100, |i| 1.0 + 0.01 * i as f64);
    let variances = Vector::filled(100, 0.5);
    let cov = Matrix::from_diag(variances.as_slice());

    g.bench_function("uniform", |b| {
        b.iter(|| std::hint::black_box(&a).solve_least_squares(&y, Weighting::Uniform))
    });
    g.bench_function("diagonal", |b| {
        b.iter(|| std::hint::black_box(&a).solve_least_squares(&y, Weighting::Diagonal(&variances)))
    });
    g.bench_function("covariance", |b| {
        b.iter(|| std::hint::black_box(&a).solve_least_squares(&y, Weighting::Covariance(&cov)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    matmul,
    determinant,
    inverse_3x3,
    inverse,
    rank,
    least_squares,
);
criterion_main!(benches);
