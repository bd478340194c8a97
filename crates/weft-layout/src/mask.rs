//! Permutation-to-mask derivation and the runtime shuffle layout.

use smallvec::SmallVec;
use weft_core::{AccessError, BitScatter, Coords};

use crate::permutation::Permutation;

/// Selection mask of dimension `dim`: bit `b` is set iff `tags[b] == dim`.
///
/// Only the first 64 entries can contribute.
pub fn dimension_mask(tags: &[usize], dim: usize) -> u64 {
    tags.iter()
        .take(u64::BITS as usize)
        .enumerate()
        .filter(|&(_, &t)| t == dim)
        .fold(0u64, |mask, (bit, _)| mask | (1u64 << bit))
}

/// Extent of dimension `dim`: `2^(occurrences of dim in tags)`.
///
/// A dimension with no occurrences has extent 1. Only the first
/// [`Permutation::MAX_BITS`] entries can contribute.
pub fn dimension_size(tags: &[usize], dim: usize) -> usize {
    1usize << tags
        .iter()
        .take(Permutation::MAX_BITS)
        .filter(|&&t| t == dim)
        .count()
}

/// Per-dimension masks and extents derived from a [`Permutation`].
///
/// `offset(coords) = OR over d of deposit(coords[d], masks[d])`. The masks
/// are pairwise disjoint and their union is the low `permutation.len()`
/// bits, so the mapping is a bijection from the coordinate space onto
/// `0..volume()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShuffleLayout {
    masks: SmallVec<[u64; 4]>,
    extents: Coords,
}

impl ShuffleLayout {
    /// Derive masks and extents for every dimension of `permutation`.
    pub fn new(permutation: &Permutation) -> Self {
        let tags: Vec<usize> = permutation.tags().collect();
        let masks = (0..permutation.ndim())
            .map(|d| dimension_mask(&tags, d))
            .collect();
        let extents = (0..permutation.ndim())
            .map(|d| dimension_size(&tags, d))
            .collect();
        Self { masks, extents }
    }

    /// One mask per dimension.
    pub fn masks(&self) -> &[u64] {
        &self.masks
    }

    /// One extent per dimension.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.masks.len()
    }

    /// Number of addressable elements.
    pub fn volume(&self) -> usize {
        self.extents.iter().product()
    }

    /// Flat offset of `coords`. No bounds checking: bits of a coordinate
    /// beyond its dimension's width are dropped by the deposit.
    #[inline]
    pub fn offset(&self, coords: &[usize]) -> usize {
        coords
            .iter()
            .zip(self.masks.iter())
            .fold(0u64, |acc, (&c, &m)| acc | (c as u64).deposit(m)) as usize
    }

    /// Flat offset of `coords`, rejecting wrong arity and out-of-range
    /// coordinates.
    pub fn checked_offset(&self, coords: &[usize]) -> Result<usize, AccessError> {
        if coords.len() != self.ndim() {
            return Err(AccessError::DimensionMismatch {
                expected: self.ndim(),
                got: coords.len(),
            });
        }
        if coords.iter().zip(self.extents.iter()).any(|(c, e)| c >= e) {
            return Err(AccessError::OutOfBounds {
                coords: Coords::from_slice(coords),
                extents: self.extents.clone(),
            });
        }
        Ok(self.offset(coords))
    }

    /// Inverse of [`offset`](Self::offset): the coordinates stored at
    /// `offset`.
    pub fn coords_of(&self, offset: usize) -> Coords {
        self.masks
            .iter()
            .map(|&m| (offset as u64).extract(m) as usize)
            .collect()
    }
}
