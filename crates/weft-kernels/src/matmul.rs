//! Dense matrix multiply in four loop orders, plus a tiled variant.
//!
//! `mm_*` compute `C += A·B` with `A: m×p`, `B: p×n`, `C: m×n`. `mmt_*`
//! take the right operand pre-transposed (`B: n×p`). Apart from
//! [`mmt_ijk`], which overwrites `C` from a register accumulator, the
//! kernels read-modify-write `C` once per multiply-add, so `C` must start
//! at zero for a plain product.

use weft_core::{Array, Matrix, Scalar};

use crate::error::KernelError;
use crate::shape;

fn check_mm<A, B, C>(kernel: &'static str, a: &A, b: &B, c: &C) -> Result<(), KernelError>
where
    A: Matrix,
    B: Matrix,
    C: Matrix,
{
    shape::inner(kernel, "A rows vs C rows", a.rows(), c.rows())?;
    shape::inner(kernel, "B cols vs C cols", b.cols(), c.cols())?;
    shape::inner(kernel, "A cols vs B rows", a.cols(), b.rows())
}

fn check_mmt<A, B, C>(kernel: &'static str, a: &A, b: &B, c: &C) -> Result<(), KernelError>
where
    A: Matrix,
    B: Matrix,
    C: Matrix,
{
    shape::inner(kernel, "A rows vs C rows", a.rows(), c.rows())?;
    shape::inner(kernel, "B rows vs C cols", b.rows(), c.cols())?;
    shape::inner(kernel, "A cols vs B cols", a.cols(), b.cols())
}

/// `C += A·B`, loop order i, j, k.
pub fn mm_ijk<T, A, B, C>(a: &A, b: &B, c: &mut C) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
    C: Array<2, Value = T>,
{
    check_mm("mm_ijk", a, b, c)?;
    let (m, n) = c.shape();
    let p = a.cols();
    for i in 0..m {
        for j in 0..n {
            for k in 0..p {
                c.set(i, j, c.get(i, j) + a.get(i, k) * b.get(k, j));
            }
        }
    }
    Ok(())
}

/// `C += A·B`, loop order i, k, j (row-streaming over `B` and `C`).
pub fn mm_ikj<T, A, B, C>(a: &A, b: &B, c: &mut C) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
    C: Array<2, Value = T>,
{
    check_mm("mm_ikj", a, b, c)?;
    let (m, n) = c.shape();
    let p = a.cols();
    for i in 0..m {
        for k in 0..p {
            for j in 0..n {
                c.set(i, j, c.get(i, j) + a.get(i, k) * b.get(k, j));
            }
        }
    }
    Ok(())
}

/// `C = A·Bᵀ`, loop order i, j, k, accumulating each dot product in a
/// register before a single store.
pub fn mmt_ijk<T, A, B, C>(a: &A, b: &B, c: &mut C) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
    C: Array<2, Value = T>,
{
    check_mmt("mmt_ijk", a, b, c)?;
    let (m, n) = c.shape();
    let p = a.cols();
    for i in 0..m {
        for j in 0..n {
            let mut acc = T::zero();
            for k in 0..p {
                acc = acc + a.get(i, k) * b.get(j, k);
            }
            c.set(i, j, acc);
        }
    }
    Ok(())
}

/// `C += A·Bᵀ`, loop order i, k, j.
pub fn mmt_ikj<T, A, B, C>(a: &A, b: &B, c: &mut C) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
    C: Array<2, Value = T>,
{
    check_mmt("mmt_ikj", a, b, c)?;
    let (m, n) = c.shape();
    let p = a.cols();
    for i in 0..m {
        for k in 0..p {
            for j in 0..n {
                c.set(i, j, c.get(i, j) + a.get(i, k) * b.get(j, k));
            }
        }
    }
    Ok(())
}

/// `C += A·B` over `tile × tile × tile` blocks.
///
/// Within a block the loop order is i, j, k. For a fixed `(i, j)` the `k`
/// contributions still arrive in increasing order, so the result is
/// bit-identical to [`mm_ijk`] for every tile size; only the access order
/// changes. Edge blocks are truncated, so the extents need not be
/// multiples of `tile`.
pub fn mm_ijk_tiled<T, A, B, C>(a: &A, b: &B, c: &mut C, tile: usize) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
    C: Array<2, Value = T>,
{
    const KERNEL: &str = "mm_ijk_tiled";
    if tile == 0 {
        return Err(KernelError::ZeroTile { kernel: KERNEL });
    }
    check_mm(KERNEL, a, b, c)?;
    let (m, n) = c.shape();
    let p = a.cols();
    for i0 in (0..m).step_by(tile) {
        for j0 in (0..n).step_by(tile) {
            for k0 in (0..p).step_by(tile) {
                for i in i0..(i0 + tile).min(m) {
                    for j in j0..(j0 + tile).min(n) {
                        for k in k0..(k0 + tile).min(p) {
                            c.set(i, j, c.get(i, j) + a.get(i, k) * b.get(k, j));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}
