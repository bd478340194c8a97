//! Experiment error type.

use thiserror::Error;
use weft_arena::ArenaError;
use weft_kernels::KernelError;
use weft_layout::LayoutError;

use crate::pattern::Pattern;

/// Errors that can occur while configuring or running an experiment.
///
/// All of them are raised before the kernel issues its first access,
/// except [`Kernel`](Self::Kernel), which the kernel itself reports before
/// its first access.
#[derive(Debug, Error)]
pub enum ExperimentError {
    /// The permutation or an indexer built from it was rejected.
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),
    /// The arena could not be laid out.
    #[error("arena: {0}")]
    Arena(#[from] ArenaError),
    /// The kernel rejected its operands.
    #[error("kernel: {0}")]
    Kernel(#[from] KernelError),
    /// The permutation's dimension count does not fit the pattern.
    #[error("{pattern} needs a {expected}-dimensional permutation, got {got}")]
    UnsupportedDimensions {
        /// Pattern requested.
        pattern: Pattern,
        /// Dimension count the pattern operates on.
        expected: usize,
        /// Dimension count of the permutation.
        got: usize,
    },
    /// A pattern name did not parse.
    #[error("unknown pattern {name:?}")]
    UnknownPattern {
        /// The name as given.
        name: String,
    },
    /// A precision name did not parse.
    #[error("unknown precision {name:?} (expected \"single\" or \"double\")")]
    UnknownPrecision {
        /// The name as given.
        name: String,
    },
}
