//! Cholesky and Crout decompositions.

use weft_core::{Array, Matrix, Scalar};

use crate::error::KernelError;
use crate::shape;

/// Cholesky–Banachiewicz: fill the lower triangle of `l` so that
/// `L·Lᵀ = A`, row by row.
///
/// `a` must be symmetric positive definite; only its lower triangle is
/// read. The strict upper triangle of `l` is not written.
pub fn cholesky<T, A, L>(a: &A, l: &mut L) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    L: Array<2, Value = T>,
{
    shape::square("cholesky", "A", a.extents())?;
    shape::same("cholesky", "A vs L", a.extents(), l.extents())?;
    let n = a.rows();
    for i in 0..n {
        for j in 0..=i {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + l.get(i, k) * l.get(j, k);
            }
            let v = if i == j {
                (a.get(i, i) - sum).sqrt()
            } else {
                (a.get(i, j) - sum) / l.get(j, j)
            };
            l.set(i, j, v);
        }
    }
    Ok(())
}

/// Crout LU: `A = L·U` with `L` lower triangular and `U` unit upper
/// triangular, column of `L` then row of `U` for each `j`.
///
/// No pivoting. The unused triangles of `l` and `u` are not written.
pub fn crout<T, A, L, U>(a: &A, l: &mut L, u: &mut U) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    L: Array<2, Value = T>,
    U: Array<2, Value = T>,
{
    shape::square("crout", "A", a.extents())?;
    shape::same("crout", "A vs L", a.extents(), l.extents())?;
    shape::same("crout", "A vs U", a.extents(), u.extents())?;
    let n = a.rows();
    for i in 0..n {
        u.set(i, i, T::one());
    }
    for j in 0..n {
        for i in j..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + l.get(i, k) * u.get(k, j);
            }
            l.set(i, j, a.get(i, j) - sum);
        }
        for i in j..n {
            let mut sum = T::zero();
            for k in 0..j {
                sum = sum + l.get(j, k) * u.get(k, i);
            }
            u.set(j, i, (a.get(j, i) - sum) / l.get(j, j));
        }
    }
    Ok(())
}
