//! Error types for permutation validation and indexer construction.

use thiserror::Error;

/// Errors detected while building a permutation or binding an indexer to a
/// pointer.
///
/// All of these are configuration errors: they are reported before any
/// element is accessed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A permutation entry names a dimension that does not exist.
    #[error("permutation tag {tag} at bit {position} is not a dimension in 0..{ndim}")]
    InvalidTag {
        /// Bit position of the offending entry.
        position: usize,
        /// The entry's value.
        tag: usize,
        /// Number of dimensions.
        ndim: usize,
    },
    /// The permutation assigns more address bits than an offset can hold.
    #[error("permutation has {bits} bits, at most {max} are supported")]
    TooManyBits {
        /// Number of entries in the permutation.
        bits: usize,
        /// Largest supported width.
        max: usize,
    },
    /// A layout needs at least one dimension.
    #[error("a layout needs at least one dimension")]
    NoDimensions,
    /// The permutation's dimension count does not match the indexer's.
    #[error("expected a {expected}-dimensional permutation, got {got} dimensions")]
    DimensionMismatch {
        /// Dimension count required by the indexer.
        expected: usize,
        /// Dimension count of the permutation.
        got: usize,
    },
    /// The backing pointer cannot hold every element of the layout.
    #[error("layout needs {required} elements but the pointer holds {capacity}")]
    CapacityTooSmall {
        /// Number of elements the layout addresses.
        required: usize,
        /// Capacity of the pointer.
        capacity: usize,
    },
    /// Extents whose element count does not fit in `usize`.
    #[error("extents {extents:?} overflow the address space")]
    ExtentOverflow {
        /// The requested extents.
        extents: Vec<usize>,
    },
    /// A permutation string contained a token that is not a dimension index.
    #[error("cannot parse permutation token {token:?}")]
    Parse {
        /// The offending token.
        token: String,
    },
}
