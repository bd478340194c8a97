//! Bit-interleaved array layouts for weft.
//!
//! A [`Permutation`] assigns every bit of a flat address to one logical
//! dimension. From it, [`ShuffleLayout`] derives one selection mask per
//! dimension, and an offset is the bitwise OR of each coordinate deposited
//! into its dimension's mask. The physical layout is then a pure function
//! of the permutation:
//!
//! - all low bits on the last dimension: row-major,
//! - tags alternating bit by bit: Morton / Z-order,
//! - tags grouped in runs: blocked / tiled.
//!
//! # Indexers
//!
//! - [`ShuffleArray`]: runtime permutation, dimension count `N` fixed by
//!   the type.
//! - [`DynShuffleArray`]: runtime permutation and runtime dimension count.
//! - [`MortonArray`]: permutation fixed at compile time through a
//!   [`StaticLayout`].
//! - [`LexicographicArray`]: plain row-major strides, the reference layout.
//!
//! All of them implement the [`Array`](weft_core::Array) (or
//! [`DynArray`](weft_core::DynArray)) contract, so kernels never see the
//! layout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod iter;
pub mod lexicographic;
pub mod mask;
pub mod morton;
pub mod permutation;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LayoutError;
pub use iter::CoordIter;
pub use lexicographic::LexicographicArray;
pub use mask::{dimension_mask, dimension_size, ShuffleLayout};
pub use morton::{static_extents, static_masks, MortonArray, StaticLayout};
pub use permutation::Permutation;
pub use shuffle::{DynShuffleArray, ShuffleArray};
