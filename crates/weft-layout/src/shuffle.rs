//! Runtime-permutation shuffle indexers.

use weft_core::{Array, DynArray, Pointer};

use crate::error::LayoutError;
use crate::mask::ShuffleLayout;
use crate::permutation::Permutation;

fn check_capacity<P: Pointer>(ptr: &P, required: usize) -> Result<(), LayoutError> {
    let capacity = ptr.capacity();
    if capacity < required {
        return Err(LayoutError::CapacityTooSmall { required, capacity });
    }
    Ok(())
}

/// An `N`-dimensional array addressed through a runtime permutation.
///
/// The permutation is validated and reduced to `N` masks at construction;
/// each access then costs `N` bit deposits and an OR.
#[derive(Clone, Debug)]
pub struct ShuffleArray<P, const N: usize> {
    ptr: P,
    masks: [u64; N],
    extents: [usize; N],
}

impl<P: Pointer, const N: usize> ShuffleArray<P, N> {
    /// Bind `ptr` to the layout described by `permutation`.
    ///
    /// Fails if the permutation does not have exactly `N` dimensions or if
    /// the pointer cannot hold `permutation.volume()` elements.
    pub fn new(ptr: P, permutation: &Permutation) -> Result<Self, LayoutError> {
        if permutation.ndim() != N {
            return Err(LayoutError::DimensionMismatch {
                expected: N,
                got: permutation.ndim(),
            });
        }
        let layout = ShuffleLayout::new(permutation);
        check_capacity(&ptr, layout.volume())?;
        let mut masks = [0u64; N];
        let mut extents = [0usize; N];
        masks.copy_from_slice(layout.masks());
        extents.copy_from_slice(layout.extents());
        Ok(Self {
            ptr,
            masks,
            extents,
        })
    }

    /// Flat offset of `coords`.
    #[inline]
    pub fn offset(&self, coords: [usize; N]) -> usize {
        let mut offset = 0u64;
        for d in 0..N {
            offset |= weft_core::deposit(coords[d] as u64, self.masks[d]);
        }
        offset as usize
    }

    /// Per-dimension masks.
    pub fn masks(&self) -> &[u64; N] {
        &self.masks
    }

    /// The backing pointer.
    pub fn pointer(&self) -> &P {
        &self.ptr
    }

    /// Release the backing pointer.
    pub fn into_pointer(self) -> P {
        self.ptr
    }
}

impl<P: Pointer, const N: usize> Array<N> for ShuffleArray<P, N> {
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

/// A shuffle-addressed array whose dimension count is chosen at runtime.
#[derive(Clone, Debug)]
pub struct DynShuffleArray<P> {
    ptr: P,
    layout: ShuffleLayout,
}

impl<P: Pointer> DynShuffleArray<P> {
    /// Bind `ptr` to the layout described by `permutation`.
    pub fn new(ptr: P, permutation: &Permutation) -> Result<Self, LayoutError> {
        let layout = ShuffleLayout::new(permutation);
        check_capacity(&ptr, layout.volume())?;
        Ok(Self { ptr, layout })
    }

    /// The derived layout.
    pub fn layout(&self) -> &ShuffleLayout {
        &self.layout
    }

    /// Release the backing pointer.
    pub fn into_pointer(self) -> P {
        self.ptr
    }
}

impl<P: Pointer> DynArray for DynShuffleArray<P> {
    type Value = P::Value;

    fn extents(&self) -> &[usize] {
        self.layout.extents()
    }

    #[inline]
    fn load(&self, coords: &[usize]) -> P::Value {
        debug_assert!(
            self.check(coords).is_ok(),
            "invalid coordinates {coords:?} for extents {:?}",
            self.layout.extents()
        );
        self.ptr.load(self.layout.offset(coords))
    }

    #[inline]
    fn store(&mut self, coords: &[usize], value: P::Value) {
        debug_assert!(
            self.check(coords).is_ok(),
            "invalid coordinates {coords:?} for extents {:?}",
            self.layout.extents()
        );
        let offset = self.layout.offset(coords);
        self.ptr.store(offset, value)
    }
}
