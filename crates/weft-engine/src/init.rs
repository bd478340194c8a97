//! Seeded input generation and result checksums for native runs.
//!
//! Values are drawn in row-major coordinate order, never offset order, so
//! an operand holds the same value at the same coordinate under every
//! permutation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use weft_core::{Array, Scalar, Vec3};
use weft_layout::CoordIter;

fn coords<const N: usize>(c: &[usize]) -> [usize; N] {
    let mut out = [0usize; N];
    out.copy_from_slice(c);
    out
}

fn fill_with<A, F, const N: usize>(a: &mut A, mut value: F)
where
    A: Array<N>,
    F: FnMut() -> A::Value,
{
    let extents = a.extents();
    for c in CoordIter::new(&extents) {
        a.store(coords(&c), value());
    }
}

/// Uniform values in `[-1, 1)`.
pub(crate) fn uniform<T, A, const N: usize>(a: &mut A, rng: &mut ChaCha8Rng)
where
    T: Scalar,
    A: Array<N, Value = T>,
{
    fill_with(a, || T::lit(rng.random_range(-1.0..1.0)));
}

/// Uniform 3-vectors in `[-1, 1)³`.
pub(crate) fn uniform_vectors<T, A, const N: usize>(a: &mut A, rng: &mut ChaCha8Rng)
where
    T: Scalar,
    A: Array<N, Value = Vec3<T>>,
{
    fill_with(a, || {
        [
            T::lit(rng.random_range(-1.0..1.0)),
            T::lit(rng.random_range(-1.0..1.0)),
            T::lit(rng.random_range(-1.0..1.0)),
        ]
    });
}

/// Symmetric, strictly diagonally dominant values with a positive
/// diagonal over the leading square block of `a`.
pub(crate) fn diagonally_dominant<T, A>(a: &mut A, rng: &mut ChaCha8Rng)
where
    T: Scalar,
    A: Array<2, Value = T>,
{
    let [m, n] = a.extents();
    let size = m.min(n);
    for i in 0..size {
        for j in 0..i {
            let v = T::lit(rng.random_range(0.0..1.0));
            a.store([i, j], v);
            a.store([j, i], v);
        }
        a.store([i, i], T::lit(size as f64 + 1.0));
    }
}

/// Sum of every element, in row-major coordinate order.
pub(crate) fn checksum<T, A, const N: usize>(a: &A) -> f64
where
    T: Scalar,
    A: Array<N, Value = T>,
{
    let extents = a.extents();
    CoordIter::new(&extents)
        .map(|c| a.load(coords(&c)).as_f64())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use weft_arena::BufferPointer;
    use weft_layout::{LexicographicArray, Permutation, ShuffleArray};

    #[test]
    fn values_follow_coordinates_not_offsets() {
        let row = Permutation::row_major(&[2, 2]).unwrap();
        let col = Permutation::column_major(&[2, 2]).unwrap();
        let mut a = ShuffleArray::<_, 2>::new(BufferPointer::<f64>::zeroed(16), &row).unwrap();
        let mut b = ShuffleArray::<_, 2>::new(BufferPointer::<f64>::zeroed(16), &col).unwrap();
        uniform(&mut a, &mut ChaCha8Rng::seed_from_u64(4));
        uniform(&mut b, &mut ChaCha8Rng::seed_from_u64(4));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(a.load([i, j]), b.load([i, j]));
            }
        }
        assert_ne!(a.pointer().as_slice(), b.pointer().as_slice());
    }

    #[test]
    fn dominant_matrix_is_symmetric() {
        let mut a = LexicographicArray::matrix(BufferPointer::<f32>::zeroed(16), 4, 4).unwrap();
        diagonally_dominant(&mut a, &mut ChaCha8Rng::seed_from_u64(1));
        for i in 0..4 {
            assert_eq!(a.load([i, i]), 5.0);
            for j in 0..4 {
                assert_eq!(a.load([i, j]), a.load([j, i]));
            }
        }
    }

    #[test]
    fn checksum_sums_every_element() {
        let a = LexicographicArray::new(BufferPointer::from_vec(vec![1.0f64; 8]), [2, 2, 2]).unwrap();
        assert_eq!(checksum(&a), 8.0);
    }
}
