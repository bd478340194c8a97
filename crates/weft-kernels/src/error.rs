//! Kernel error types.

use thiserror::Error;

/// Errors reported by a kernel before it issues any access.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Operand extents are incompatible with the kernel.
    #[error("{kernel}: {reason}")]
    ShapeMismatch {
        /// Kernel name.
        kernel: &'static str,
        /// Which operands disagree, and how.
        reason: String,
    },
    /// A tiled kernel was given a zero tile size.
    #[error("{kernel}: tile size must be non-zero")]
    ZeroTile {
        /// Kernel name.
        kernel: &'static str,
    },
}
