//! Compile-time permutation indexer.
//!
//! A [`StaticLayout`] fixes the permutation in the type. Masks and extents
//! are computed by `const fn`s, so a tag outside `0..N` is a compile error
//! at the point where the layout is first used, not a runtime failure.
//!
//! ```
//! use weft_layout::{static_layout, MortonArray, StaticLayout};
//!
//! static_layout! {
//!     /// 4x4 Z-order.
//!     pub Z4x4: 2 => [1, 0, 1, 0]
//! }
//!
//! assert_eq!(MortonArray::<Vec<f32>, Z4x4, 2>::EXTENTS, [4, 4]);
//! assert_eq!(Z4x4::permutation().unwrap().to_string(), "1,0,1,0");
//! ```

use std::marker::PhantomData;

use weft_core::{Array, BitScatter, Pointer};

use crate::error::LayoutError;
use crate::permutation::Permutation;

/// A permutation fixed at compile time for an `N`-dimensional layout.
///
/// Usually declared through [`static_layout!`](crate::static_layout).
pub trait StaticLayout<const N: usize> {
    /// Dimension tag of each address bit, least significant first.
    const TAGS: &'static [u8];

    /// The same layout as a runtime [`Permutation`].
    fn permutation() -> Result<Permutation, LayoutError> {
        let tags: Vec<usize> = Self::TAGS.iter().map(|&t| t as usize).collect();
        Permutation::new(&tags, N)
    }
}

/// Masks for every dimension of `tags`, evaluated at compile time when
/// used in a constant.
///
/// # Panics
///
/// If a tag is not below `N` or there are more than 63 tags. In a constant
/// context this is a compile error.
pub const fn static_masks<const N: usize>(tags: &[u8]) -> [u64; N] {
    assert!(tags.len() < u64::BITS as usize, "too many permutation bits");
    let mut masks = [0u64; N];
    let mut bit = 0;
    while bit < tags.len() {
        let tag = tags[bit] as usize;
        assert!(tag < N, "permutation tag out of range");
        masks[tag] |= 1u64 << bit;
        bit += 1;
    }
    masks
}

/// Extents for every dimension of `tags`: `2^(occurrences of d)`.
pub const fn static_extents<const N: usize>(tags: &[u8]) -> [usize; N] {
    let masks = static_masks::<N>(tags);
    let mut extents = [0usize; N];
    let mut d = 0;
    while d < N {
        extents[d] = 1usize << masks[d].count_ones();
        d += 1;
    }
    extents
}

/// Declare a zero-sized type implementing [`StaticLayout`].
///
/// `static_layout! { pub Name: N => [tag, tag, ...] }`
#[macro_export]
macro_rules! static_layout {
    ($(#[$meta:meta])* $vis:vis $name:ident : $n:literal => [$($tag:expr),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::StaticLayout<$n> for $name {
            const TAGS: &'static [u8] = &[$($tag),*];
        }
    };
}

/// An `N`-dimensional array whose permutation is the type parameter `L`.
///
/// Addressing is identical to [`ShuffleArray`](crate::ShuffleArray) with
/// `L::permutation()`; the masks are constants.
#[derive(Debug)]
pub struct MortonArray<P, L, const N: usize> {
    ptr: P,
    _layout: PhantomData<L>,
}

impl<P, L: StaticLayout<N>, const N: usize> MortonArray<P, L, N> {
    /// Per-dimension masks of `L`.
    pub const MASKS: [u64; N] = static_masks::<N>(L::TAGS);

    /// Per-dimension extents of `L`.
    pub const EXTENTS: [usize; N] = static_extents::<N>(L::TAGS);

    /// Number of addressable elements.
    pub const VOLUME: usize = 1usize << L::TAGS.len();

    /// Flat offset of `coords`.
    #[inline]
    pub fn offset(coords: [usize; N]) -> usize {
        let mut offset = 0u64;
        let mut d = 0;
        while d < N {
            offset |= (coords[d] as u64).deposit(Self::MASKS[d]);
            d += 1;
        }
        offset as usize
    }
}

impl<P: Pointer, L: StaticLayout<N>, const N: usize> MortonArray<P, L, N> {
    /// Bind `ptr` to layout `L`. Fails if the pointer holds fewer than
    /// [`VOLUME`](Self::VOLUME) elements.
    pub fn new(ptr: P) -> Result<Self, LayoutError> {
        let capacity = ptr.capacity();
        if capacity < Self::VOLUME {
            return Err(LayoutError::CapacityTooSmall {
                required: Self::VOLUME,
                capacity,
            });
        }
        Ok(Self {
            ptr,
            _layout: PhantomData,
        })
    }

    /// The backing pointer.
    pub fn pointer(&self) -> &P {
        &self.ptr
    }
}

impl<P: Pointer, L: StaticLayout<N>, const N: usize> Array<N> for MortonArray<P, L, N> {
    type Value = P::Value;

    fn extents(&self) -> [usize; N] {
        Self::EXTENTS
    }

    #[inline]
    fn load(&self, coords: [usize; N]) -> P::Value {
        debug_assert!(
            self.contains(&coords),
            "coordinates {coords:?} out of bounds for extents {:?}",
            Self::EXTENTS
        );
        self.ptr.load(Self::offset(coords))
    }

    #[inline]
    fn store(&mut self, coords: [usize; N], value: P::Value) {
        debug_assert!(
            self.contains(&coords),
            "coordinates {coords:?} out of bounds for extents {:?}",
            Self::EXTENTS
        );
        self.ptr.store(Self::offset(coords), value)
    }
}
