//! Experiment runner for weft.
//!
//! An experiment is a [`Pattern`] (which kernel), a [`Permutation`]
//! (which layout), and an [`ExperimentConfig`] (precision, arena
//! alignment, seed). Extents come from the permutation: every operand of
//! the pattern is a runtime shuffle array over the same permutation.
//!
//! - [`run_traced`] lays the operands out in one arena over a
//!   [`MemoryModel`](weft_core::MemoryModel) and runs the kernel through
//!   tracing pointers. Nothing is initialised; the model sees exactly the
//!   kernel's own accesses.
//! - [`run_native`] runs the same kernel over real buffers filled from
//!   the seed and reports a checksum of the result, so runs under
//!   different permutations can be compared.
//!
//! [`Permutation`]: weft_layout::Permutation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod init;
pub mod pattern;
pub mod runner;
mod storage;

pub use config::{ExperimentConfig, StrideConfig};
pub use error::ExperimentError;
pub use pattern::{Pattern, Precision};
pub use runner::{run_native, run_traced, RunSummary};
