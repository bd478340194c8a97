//! Row-major baseline indexer.

use weft_core::{Array, Pointer};

use crate::error::LayoutError;

/// An `N`-dimensional row-major array: `offset = Σ coords[d] * stride[d]`
/// with the last dimension contiguous.
///
/// This is the reference layout. For power-of-two extents a
/// [`ShuffleArray`](crate::ShuffleArray) built from
/// [`Permutation::row_major`](crate::Permutation::row_major) produces the
/// same offsets.
#[derive(Clone, Debug)]
pub struct LexicographicArray<P, const N: usize> {
    ptr: P,
    extents: [usize; N],
    strides: [usize; N],
}

impl<P: Pointer, const N: usize> LexicographicArray<P, N> {
    /// Bind `ptr` to a row-major layout with the given extents. Extents
    /// need not be powers of two.
    pub fn new(ptr: P, extents: [usize; N]) -> Result<Self, LayoutError> {
        if N == 0 {
            return Err(LayoutError::NoDimensions);
        }
        let mut strides = [0usize; N];
        let mut stride = 1usize;
        for d in (0..N).rev() {
            strides[d] = stride;
            stride = stride
                .checked_mul(extents[d])
                .ok_or_else(|| LayoutError::ExtentOverflow {
                    extents: extents.to_vec(),
                })?;
        }
        let capacity = ptr.capacity();
        if capacity < stride {
            return Err(LayoutError::CapacityTooSmall {
                required: stride,
                capacity,
            });
        }
        Ok(Self {
            ptr,
            extents,
            strides,
        })
    }

    /// Flat offset of `coords`.
    #[inline]
    pub fn offset(&self, coords: [usize; N]) -> usize {
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(c, s)| c * s)
            .sum()
    }

    /// Per-dimension strides, in elements.
    pub fn strides(&self) -> &[usize; N] {
        &self.strides
    }

    /// The backing pointer.
    pub fn pointer(&self) -> &P {
        &self.ptr
    }
}

impl<P: Pointer> LexicographicArray<P, 2> {
    /// An `m × n` row-major matrix: `offset(i, j) = i * n + j`.
    pub fn matrix(ptr: P, m: usize, n: usize) -> Result<Self, LayoutError> {
        Self::new(ptr, [m, n])
    }
}

impl<P: Pointer, const N: usize> Array<N> for LexicographicArray<P, N> {
    type Value = P::Value;

    fn extents(&self) -> [usize; N] {
        self.extents
    }

    #[inline]
    fn load(&self, coords: [usize; N]) -> P::Value {
        debug_assert!(
            self.contains(&coords),
            "coordinates {coords:?} out of bounds for extents {:?}",
            self.extents
        );
        self.ptr.load(self.offset(coords))
    }

    #[inline]
    fn store(&mut self, coords: [usize; N], value: P::Value) {
        debug_assert!(
            self.contains(&coords),
            "coordinates {coords:?} out of bounds for extents {:?}",
            self.extents
        );
        let offset = self.offset(coords);
        self.ptr.store(offset, value)
    }
}
