//! Weft: permutation-driven memory layouts for studying cache locality.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all weft sub-crates. For most users, adding `weft` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use weft::prelude::*;
//!
//! // A 4x4 matrix in Z-order: bit tags [1, 0, 1, 0], least significant first.
//! let z: Permutation = "1,0,1,0".parse().unwrap();
//!
//! let mut a = ShuffleArray::<_, 2>::new(BufferPointer::<f64>::zeroed(16), &z).unwrap();
//! a.set(2, 3, 1.0);
//! assert_eq!(a.offset([2, 3]), 0b1101);
//! assert_eq!(a.pointer().as_slice()[0b1101], 1.0);
//!
//! // The same kernel, once on real memory and once traced.
//! let summary = run_native(Pattern::MMijk, &z, &ExperimentConfig::default()).unwrap();
//! assert!(summary.checksum.is_finite());
//!
//! struct Count(std::cell::Cell<u64>);
//! impl MemoryModel for Count {
//!     fn record_access(&self, _address: u64, _size: usize, _is_store: bool) {
//!         self.0.set(self.0.get() + 1);
//!     }
//! }
//! let model = Count(Default::default());
//! run_traced(Pattern::MMijk, &z, &model, &ExperimentConfig::default()).unwrap();
//! assert_eq!(model.0.get(), 4 * 4 * 4 * 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `weft-core` | Capability traits, bit deposit/extract, element types |
//! | [`layout`] | `weft-layout` | Permutations, masks, and the indexers |
//! | [`arena`] | `weft-arena` | Real and tracing pointers, arena partitioning |
//! | [`kernels`] | `weft-kernels` | Layout-agnostic numerical kernels |
//! | [`engine`] | `weft-engine` | Named patterns, traced and native runs |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Capability traits and bit primitives (`weft-core`).
pub use weft_core as types;

/// Permutations and indexers (`weft-layout`).
///
/// [`layout::ShuffleArray`] is the general indexer;
/// [`layout::MortonArray`] fixes the permutation at compile time and
/// [`layout::LexicographicArray`] is the row-major baseline.
pub use weft_layout as layout;

/// Pointers and arenas (`weft-arena`).
pub use weft_arena as arena;

/// Numerical kernels (`weft-kernels`).
pub use weft_kernels as kernels;

/// Experiment runner (`weft-engine`).
///
/// [`engine::run_traced`] feeds a memory model,
/// [`engine::run_native`] computes on real buffers.
pub use weft_engine as engine;

/// Common imports for typical weft usage.
pub mod prelude {
    // Capabilities
    pub use weft_core::{Array, DynArray, Matrix, MemoryModel, Pointer, Scalar};

    // Layout
    pub use weft_layout::{
        static_layout, LexicographicArray, MortonArray, Permutation, ShuffleArray, StaticLayout,
    };

    // Storage
    pub use weft_arena::{Arena, ArenaConfig, BufferPointer, TracingPointer};

    // Errors
    pub use weft_arena::ArenaError;
    pub use weft_core::AccessError;
    pub use weft_engine::ExperimentError;
    pub use weft_kernels::KernelError;
    pub use weft_layout::LayoutError;

    // Engine
    pub use weft_engine::{run_native, run_traced, ExperimentConfig, Pattern, Precision};
}
