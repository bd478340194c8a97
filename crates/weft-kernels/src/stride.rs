//! Load-only strided walk.

use weft_core::{Array, Matrix, Scalar};

use crate::error::KernelError;

/// Issue `count` loads along a wrapping diagonal walk and return their sum.
///
/// Starts at `(0, 0)`; after each load `x = (x + dx) mod rows` and
/// `y = (y + dy) mod cols`. No stores are issued. Over tracing pointers the
/// sum is of placeholder values and only the access stream matters.
pub fn stride2d<T, A>(a: &A, dx: usize, dy: usize, count: usize) -> Result<T, KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
{
    let (m, n) = a.shape();
    if m == 0 || n == 0 {
        return Err(KernelError::ShapeMismatch {
            kernel: "stride2d",
            reason: format!("cannot walk an empty {m}x{n} matrix"),
        });
    }
    let (mut x, mut y) = (0, 0);
    let mut sum = T::zero();
    for _ in 0..count {
        sum = sum + a.get(x, y);
        x = (x + dx % m) % m;
        y = (y + dy % n) % n;
    }
    Ok(sum)
}
