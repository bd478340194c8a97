//! Deterministic input fixtures.
//!
//! Every generator is seeded through ChaCha8 so a given seed produces the
//! same values on every platform and every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use weft_core::{Array, Matrix, Scalar};

/// Row-major 4x4 left operand with entries `1..=16`.
pub const KNOWN_A: [[f64; 4]; 4] = [
    [1.0, 2.0, 3.0, 4.0],
    [5.0, 6.0, 7.0, 8.0],
    [9.0, 10.0, 11.0, 12.0],
    [13.0, 14.0, 15.0, 16.0],
];

/// Sparse 4x4 right operand.
pub const KNOWN_B: [[f64; 4]; 4] = [
    [2.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 3.0],
];

/// `KNOWN_A * KNOWN_B`.
pub const KNOWN_A_TIMES_B: [[f64; 4]; 4] = [
    [5.0, 2.0, 3.0, 12.0],
    [17.0, 6.0, 7.0, 24.0],
    [29.0, 10.0, 11.0, 36.0],
    [41.0, 14.0, 15.0, 48.0],
];

/// `KNOWN_A * KNOWN_B^T`.
pub const KNOWN_A_TIMES_BT: [[f64; 4]; 4] = [
    [2.0, 2.0, 4.0, 12.0],
    [10.0, 6.0, 12.0, 24.0],
    [18.0, 10.0, 20.0, 36.0],
    [26.0, 14.0, 28.0, 48.0],
];

/// Symmetric positive-definite 3x3 with a known Cholesky factor
/// `[[2, 0, 0], [1, 2, 0], [1, 1, 2]]`.
pub const KNOWN_SPD_3X3: [[f64; 3]; 3] = [
    [4.0, 2.0, 2.0],
    [2.0, 5.0, 3.0],
    [2.0, 3.0, 6.0],
];

/// ChaCha8 generator for `seed`.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `len` values uniform in `[-1, 1)`.
pub fn seeded_values<T: Scalar>(seed: u64, len: usize) -> Vec<T> {
    let mut r = rng(seed);
    (0..len)
        .map(|_| T::lit(r.random_range(-1.0..1.0)))
        .collect()
}

/// Copy a row-major table into any matrix, converting precision.
///
/// # Panics
///
/// If the table does not match the matrix shape.
pub fn write_rows<A, const C: usize>(a: &mut A, rows: &[[f64; C]])
where
    A: Matrix,
    <A as Array<2>>::Value: Scalar,
{
    assert_eq!(a.shape(), (rows.len(), C), "table shape mismatch");
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            a.set(i, j, Scalar::lit(v));
        }
    }
}

/// Read any matrix back as row-major `f64` rows.
pub fn read_rows<A>(a: &A) -> Vec<Vec<f64>>
where
    A: Matrix,
    <A as Array<2>>::Value: Scalar,
{
    let (m, n) = a.shape();
    (0..m)
        .map(|i| (0..n).map(|j| a.get(i, j).as_f64()).collect())
        .collect()
}

/// Fill a matrix with seeded values in `[-1, 1)`.
pub fn fill_seeded<A>(a: &mut A, seed: u64)
where
    A: Matrix,
    <A as Array<2>>::Value: Scalar,
{
    let mut r = rng(seed);
    let (m, n) = a.shape();
    for i in 0..m {
        for j in 0..n {
            a.set(i, j, Scalar::lit(r.random_range(-1.0..1.0)));
        }
    }
}

/// Fill a square matrix with a seeded symmetric, strictly diagonally
/// dominant matrix (positive diagonal), which is positive definite and
/// safe for Cholesky and Crout without pivoting.
///
/// # Panics
///
/// If the matrix is not square.
pub fn fill_spd<A>(a: &mut A, seed: u64)
where
    A: Matrix,
    <A as Array<2>>::Value: Scalar,
{
    let (m, n) = a.shape();
    assert_eq!(m, n, "SPD fixture needs a square matrix");
    let mut r = rng(seed);
    for i in 0..n {
        for j in 0..i {
            let v: f64 = r.random_range(0.0..1.0);
            a.set(i, j, Scalar::lit(v));
            a.set(j, i, Scalar::lit(v));
        }
        a.set(i, i, Scalar::lit(n as f64 + 1.0));
    }
}

/// Maximum absolute elementwise difference between two tables.
pub fn max_abs_diff(lhs: &[Vec<f64>], rhs: &[Vec<f64>]) -> f64 {
    lhs.iter()
        .flatten()
        .zip(rhs.iter().flatten())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
