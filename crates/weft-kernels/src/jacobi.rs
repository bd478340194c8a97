//! Five-point 2-D Jacobi relaxation with zero boundary padding.

use weft_core::{Array, Matrix, Scalar};

use crate::error::KernelError;
use crate::shape;

/// Number of sweeps performed by [`jacobi2d`].
pub const JACOBI_SWEEPS: usize = 3;

/// One sweep: every cell of `dst` becomes the mean of its four neighbours
/// in `src`, with neighbours outside the grid read as zero.
fn sweep<T, S, D>(src: &S, dst: &mut D)
where
    T: Scalar,
    S: Array<2, Value = T>,
    D: Array<2, Value = T>,
{
    let (m, n) = dst.shape();
    let quarter = T::lit(0.25);
    for i in 0..m {
        for j in 0..n {
            let up = if i > 0 { src.get(i - 1, j) } else { T::zero() };
            let left = if j > 0 { src.get(i, j - 1) } else { T::zero() };
            let down = if i + 1 < m { src.get(i + 1, j) } else { T::zero() };
            let right = if j + 1 < n { src.get(i, j + 1) } else { T::zero() };
            dst.set(i, j, quarter * (up + left + down + right));
        }
    }
}

/// `sweeps` relaxation sweeps alternating between the two grids: odd
/// sweeps read `a` and write `b`, even sweeps read `b` and write `a`.
///
/// After an odd number of sweeps the result is in `b`, after an even
/// number in `a`. Both grids are overwritten.
pub fn jacobi2d_sweeps<T, A, B>(a: &mut A, b: &mut B, sweeps: usize) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
{
    shape::same("jacobi2d", "A vs B", a.extents(), b.extents())?;
    for s in 0..sweeps {
        if s % 2 == 0 {
            sweep(&*a, b);
        } else {
            sweep(&*b, a);
        }
    }
    Ok(())
}

/// Three relaxation sweeps starting from `a`; the result is in `b`.
///
/// `a` holds the second sweep's output on return.
pub fn jacobi2d<T, A, B>(a: &mut A, b: &mut B) -> Result<(), KernelError>
where
    T: Scalar,
    A: Array<2, Value = T>,
    B: Array<2, Value = T>,
{
    jacobi2d_sweeps(a, b, JACOBI_SWEEPS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_arena::BufferPointer;
    use weft_layout::LexicographicArray;
    use weft_test_utils::{read_rows, write_rows};

    type Grid = LexicographicArray<BufferPointer<f64>, 2>;

    fn grid(m: usize, n: usize) -> Grid {
        LexicographicArray::matrix(BufferPointer::zeroed(m * n), m, n).unwrap()
    }

    #[test]
    fn three_sweeps_from_a_point_source() {
        let mut a = grid(3, 3);
        let mut b = grid(3, 3);
        write_rows(&mut a, &[[0.0, 0.0, 0.0], [0.0, 16.0, 0.0], [0.0, 0.0, 0.0]]);
        jacobi2d(&mut a, &mut b).unwrap();
        assert_eq!(
            read_rows(&b),
            vec![
                vec![0.0, 2.0, 0.0],
                vec![2.0, 0.0, 2.0],
                vec![0.0, 2.0, 0.0]
            ]
        );
        assert_eq!(
            read_rows(&a),
            vec![
                vec![2.0, 0.0, 2.0],
                vec![0.0, 4.0, 0.0],
                vec![2.0, 0.0, 2.0]
            ]
        );
    }

    #[test]
    fn single_sweep_averages_neighbours() {
        let mut a = grid(2, 3);
        let mut b = grid(2, 3);
        write_rows(&mut a, &[[4.0, 8.0, 4.0], [0.0, 4.0, 0.0]]);
        jacobi2d_sweeps(&mut a, &mut b, 1).unwrap();
        // (0,1): left 4 + right 4 + down 4 = 12 -> 3.
        assert_eq!(b.get(0, 1), 3.0);
        // (1,0): up 4 + right 4 = 8 -> 2.
        assert_eq!(b.get(1, 0), 2.0);
    }

    #[test]
    fn zero_sweeps_touch_nothing() {
        let mut a = grid(2, 2);
        let mut b = grid(2, 2);
        a.set(0, 0, 1.0);
        jacobi2d_sweeps(&mut a, &mut b, 0).unwrap();
        assert_eq!(a.get(0, 0), 1.0);
        assert_eq!(b.get(0, 0), 0.0);
    }

    #[test]
    fn mismatched_grids_rejected() {
        let mut a = grid(3, 3);
        let mut b = grid(3, 2);
        assert!(matches!(
            jacobi2d(&mut a, &mut b),
            Err(KernelError::ShapeMismatch { .. })
        ));
    }
}
