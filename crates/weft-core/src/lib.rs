//! Capability traits and primitives for the weft layout framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! contracts every other weft crate is written against:
//!
//! - [`Pointer`]: flat `load`/`store` by element offset.
//! - [`Array`]: `N`-dimensional `load`/`store` by coordinate, `N` fixed at
//!   compile time. [`Matrix`] is the 2-D convenience view over it.
//! - [`DynArray`]: the same contract with the dimension count chosen at
//!   runtime.
//! - [`MemoryModel`]: the external cache/memory simulator that tracing
//!   pointers report accesses to.
//!
//! It also provides the bit-scatter ([`BitScatter::deposit`]) and
//! bit-gather ([`BitScatter::extract`]) primitives that the shuffle
//! indexers are built on. This crate is the only one that may contain
//! `unsafe` code, confined to the BMI2 intrinsics in [`bits`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bits;
pub mod element;
pub mod error;
pub mod traits;

pub use bits::{deposit, extract, BitScatter, HARDWARE_BIT_SCATTER};
pub use element::{Element, Scalar, Vec3};
pub use error::AccessError;
pub use traits::{Array, DynArray, Matrix, MemoryModel, Pointer};

use smallvec::SmallVec;

/// A runtime-sized coordinate or extent list.
///
/// Stack-allocated for up to four dimensions, which covers every kernel
/// in the workspace.
pub type Coords = SmallVec<[usize; 4]>;
