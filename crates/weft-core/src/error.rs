//! Error types for capability access.

use thiserror::Error;

use crate::Coords;

/// A checked array access that violated the caller contract.
///
/// Returned by [`Array::try_load`](crate::Array::try_load) and friends.
/// The unchecked `load`/`store` paths treat the same conditions as
/// precondition violations (debug assertions).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A coordinate is outside its dimension's extent.
    #[error("coordinates {coords:?} out of bounds for extents {extents:?}")]
    OutOfBounds {
        /// The offending coordinates.
        coords: Coords,
        /// Per-dimension extents of the array.
        extents: Coords,
    },
    /// The number of coordinates does not match the array's dimension count.
    #[error("expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        /// Dimension count of the array.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },
}
