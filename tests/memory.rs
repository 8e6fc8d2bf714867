use densela::linalg::Weighting;
use densela::{memory, Matrix, Vector};

// The counter is per thread, so each test sees only its own buffers.

#[test]
fn construct_and_drop_balances() {
    let before = memory::allocated_bytes();
    {
        let a = Matrix::<f64>::zeros(6, 4);
        let b = a.transpose();
        let _c = a.matmul(&b);
        let v = Vector::<f64>::filled(10, 1.0);
        let _w = &v + &v;
        if memory::is_tracking() {
            assert!(memory::allocated_bytes() > before);
        }
    }
    assert_eq!(memory::allocated_bytes(), before);
}

#[test]
fn failed_operations_release_everything() {
    let before = memory::allocated_bytes();
    {
        let singular = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 1.0]);
        let err = singular.inverse().unwrap_err();
        assert_eq!(err.value.nrows(), 3);
        let _ = singular.inverse_augmented();
        let _ = singular.pseudo_inverse(Weighting::Uniform);
    }
    assert_eq!(memory::allocated_bytes(), before);
}

#[test]
fn resize_is_accounted() {
    let before = memory::allocated_bytes();
    let mut v = Vector::<f64>::zeros(4);
    v.resize(16);
    if memory::is_tracking() {
        assert_eq!(memory::allocated_bytes() - before, 16 * 8);
    }
    v.resize(2);
    if memory::is_tracking() {
        assert_eq!(memory::allocated_bytes() - before, 2 * 8);
    }
    drop(v);
    assert_eq!(memory::allocated_bytes(), before);
}

#[test]
fn least_squares_round_trip_balances() {
    let before = memory::allocated_bytes();
    {
        let a = Matrix::from_fn(8, 3, |i, j| ((i + 1) as f64).powi(j as i32));
        let y = Vector::from_fn(8, |i| 1.0 + 0.5 * (i + 1) as f64);
        let x = a.solve_least_squares(&y, Weighting::Uniform).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-9);
        assert!((x[1] - 0.5).abs() < 1e-9);
        assert!(x[2].abs() < 1e-9);
    }
    assert_eq!(memory::allocated_bytes(), before);
}
