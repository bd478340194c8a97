//! Capability contracts: pointers, arrays, matrices, and memory models.
//!
//! Kernels are written once against [`Array`] (or [`Matrix`]) and run
//! unchanged over any indexer and any [`Pointer`] implementation.
//! Dispatch is static; the permutation and element type are known when an
//! array is constructed.

use smallvec::SmallVec;

use crate::error::AccessError;
use crate::Coords;

/// Flat element storage addressed by offset.
///
/// Implemented by the real-buffer pointer (owns its memory) and the
/// tracing pointer (forwards every access to a [`MemoryModel`] and returns
/// placeholder values).
pub trait Pointer {
    /// The element type stored behind this pointer.
    type Value: Copy;

    /// Read the element at `offset`.
    ///
    /// `offset < self.capacity()` is a precondition.
    fn load(&self, offset: usize) -> Self::Value;

    /// Write `value` to the element at `offset`.
    ///
    /// `offset < self.capacity()` is a precondition.
    fn store(&mut self, offset: usize, value: Self::Value);

    /// Number of elements addressable through this pointer.
    fn capacity(&self) -> usize;
}

impl<P: Pointer + ?Sized> Pointer for &mut P {
    type Value = P::Value;

    #[inline]
    fn load(&self, offset: usize) -> Self::Value {
        (**self).load(offset)
    }

    #[inline]
    fn store(&mut self, offset: usize, value: Self::Value) {
        (**self).store(offset, value)
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }
}

/// An `N`-dimensional array addressed by coordinates.
///
/// `load` and `store` treat out-of-range coordinates as a caller contract
/// violation: implementations check them with `debug_assert!`. The
/// `try_*` variants always check and report [`AccessError::OutOfBounds`].
pub trait Array<const N: usize> {
    /// The element type of the array.
    type Value: Copy;

    /// Per-dimension extents. Coordinate `d` must lie in `[0, extents()[d])`.
    fn extents(&self) -> [usize; N];

    /// Read the element at `coords`.
    fn load(&self, coords: [usize; N]) -> Self::Value;

    /// Write `value` to the element at `coords`.
    fn store(&mut self, coords: [usize; N], value: Self::Value);

    /// Whether every coordinate is inside its dimension's extent.
    fn contains(&self, coords: &[usize; N]) -> bool {
        coords
            .iter()
            .zip(self.extents().iter())
            .all(|(c, e)| c < e)
    }

    /// Bounds-checked [`load`](Self::load).
    fn try_load(&self, coords: [usize; N]) -> Result<Self::Value, AccessError> {
        self.check(&coords)?;
        Ok(self.load(coords))
    }

    /// Bounds-checked [`store`](Self::store).
    fn try_store(&mut self, coords: [usize; N], value: Self::Value) -> Result<(), AccessError> {
        self.check(&coords)?;
        self.store(coords, value);
        Ok(())
    }

    /// Report an [`AccessError`] when `coords` is out of range.
    fn check(&self, coords: &[usize; N]) -> Result<(), AccessError> {
        if self.contains(coords) {
            Ok(())
        } else {
            Err(AccessError::OutOfBounds {
                coords: SmallVec::from_slice(coords),
                extents: SmallVec::from_slice(&self.extents()),
            })
        }
    }
}

/// Two-dimensional view over any [`Array<2>`].
///
/// Blanket-implemented; kernels that only ever deal with matrices use
/// `get(i, j)` / `set(i, j, v)` instead of coordinate arrays.
pub trait Matrix: Array<2> {
    /// Number of rows (extent of dimension 0).
    #[inline]
    fn rows(&self) -> usize {
        self.extents()[0]
    }

    /// Number of columns (extent of dimension 1).
    #[inline]
    fn cols(&self) -> usize {
        self.extents()[1]
    }

    /// `(rows, cols)`.
    #[inline]
    fn shape(&self) -> (usize, usize) {
        let [m, n] = self.extents();
        (m, n)
    }

    /// Read element `(i, j)`.
    #[inline]
    fn get(&self, i: usize, j: usize) -> Self::Value {
        self.load([i, j])
    }

    /// Write element `(i, j)`.
    #[inline]
    fn set(&mut self, i: usize, j: usize, value: Self::Value) {
        self.store([i, j], value)
    }
}

impl<A: Array<2> + ?Sized> Matrix for A {}

/// An array whose dimension count is only known at runtime.
pub trait DynArray {
    /// The element type of the array.
    type Value: Copy;

    /// Per-dimension extents; its length is the dimension count.
    fn extents(&self) -> &[usize];

    /// Read the element at `coords`. `coords.len()` must equal the
    /// dimension count.
    fn load(&self, coords: &[usize]) -> Self::Value;

    /// Write `value` to the element at `coords`.
    fn store(&mut self, coords: &[usize], value: Self::Value);

    /// Number of dimensions.
    fn ndim(&self) -> usize {
        self.extents().len()
    }

    /// Report an [`AccessError`] when `coords` has the wrong length or is out
    /// of range.
    fn check(&self, coords: &[usize]) -> Result<(), AccessError> {
        let extents = self.extents();
        if coords.len() != extents.len() {
            return Err(AccessError::DimensionMismatch {
                expected: extents.len(),
                got: coords.len(),
            });
        }
        if coords.iter().zip(extents).all(|(c, e)| c < e) {
            Ok(())
        } else {
            Err(AccessError::OutOfBounds {
                coords: Coords::from_slice(coords),
                extents: Coords::from_slice(extents),
            })
        }
    }

    /// Checked [`load`](Self::load).
    fn try_load(&self, coords: &[usize]) -> Result<Self::Value, AccessError> {
        self.check(coords)?;
        Ok(self.load(coords))
    }

    /// Checked [`store`](Self::store).
    fn try_store(&mut self, coords: &[usize], value: Self::Value) -> Result<(), AccessError> {
        self.check(coords)?;
        self.store(coords, value);
        Ok(())
    }
}

/// External cache/memory simulator fed by tracing pointers.
///
/// Called once per logical load or store with the byte address and size of
/// the accessed element. Calls are synchronous and side-effect-only; the
/// core never reads anything back. Takes `&self` so several tracing
/// pointers over one arena can share a model; implementations keep their
/// state behind interior mutability.
pub trait MemoryModel {
    /// Record one access of `size` bytes at `address`.
    fn record_access(&self, address: u64, size: usize, is_store: bool);
}

impl<M: MemoryModel + ?Sized> MemoryModel for &M {
    fn record_access(&self, address: u64, size: usize, is_store: bool) {
        (**self).record_access(address, size, is_store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Row-major 2-D array over a plain `Vec`, for exercising the default
    /// methods.
    struct Grid {
        data: Vec<i32>,
        rows: usize,
        cols: usize,
    }

    impl Array<2> for Grid {
        type Value = i32;

        fn extents(&self) -> [usize; 2] {
            [self.rows, self.cols]
        }

        fn load(&self, [i, j]: [usize; 2]) -> i32 {
            self.data[i * self.cols + j]
        }

        fn store(&mut self, [i, j]: [usize; 2], value: i32) {
            self.data[i * self.cols + j] = value;
        }
    }

    struct Flat {
        data: Vec<i32>,
        extents: Vec<usize>,
    }

    impl DynArray for Flat {
        type Value = i32;

        fn extents(&self) -> &[usize] {
            &self.extents
        }

        fn load(&self, coords: &[usize]) -> i32 {
            self.data[coords[0] * self.extents[1] + coords[1]]
        }

        fn store(&mut self, coords: &[usize], value: i32) {
            self.data[coords[0] * self.extents[1] + coords[1]] = value;
        }
    }

    fn grid() -> Grid {
        Grid {
            data: vec![0; 6],
            rows: 2,
            cols: 3,
        }
    }

    #[test]
    fn matrix_view_reads_through_array() {
        let mut g = grid();
        g.set(1, 2, 7);
        assert_eq!(g.get(1, 2), 7);
        assert_eq!(g.load([1, 2]), 7);
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
    }

    #[test]
    fn try_store_rejects_out_of_range() {
        let mut g = grid();
        let err = g.try_store([2, 0], 1).unwrap_err();
        assert_eq!(
            err,
            AccessError::OutOfBounds {
                coords: SmallVec::from_slice(&[2, 0]),
                extents: SmallVec::from_slice(&[2, 3]),
            }
        );
        assert!(g.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn try_load_accepts_in_range() {
        let mut g = grid();
        g.store([0, 1], 4);
        assert_eq!(g.try_load([0, 1]), Ok(4));
        assert!(g.try_load([0, 3]).is_err());
    }

    #[test]
    fn dyn_array_rejects_wrong_arity() {
        let f = Flat {
            data: vec![0; 4],
            extents: vec![2, 2],
        };
        assert_eq!(
            f.try_load(&[1]),
            Err(AccessError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
        assert!(f.try_load(&[1, 2]).is_err());
        assert_eq!(f.ndim(), 2);
    }

    #[test]
    fn dyn_array_try_store_writes_in_range() {
        let mut f = Flat {
            data: vec![0; 4],
            extents: vec![2, 2],
        };
        f.try_store(&[1, 0], 9).unwrap();
        assert_eq!(f.load(&[1, 0]), 9);
    }

    #[test]
    fn error_display_names_coords() {
        let err = AccessError::OutOfBounds {
            coords: SmallVec::from_slice(&[4, 0]),
            extents: SmallVec::from_slice(&[4, 4]),
        };
        assert_eq!(
            err.to_string(),
            "coordinates [4, 0] out of bounds for extents [4, 4]"
        );
    }
}
