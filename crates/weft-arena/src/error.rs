//! Arena-specific error types.

use thiserror::Error;

/// Errors that can occur while laying out an arena.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Alignment must be at least one byte.
    #[error("arena alignment must be non-zero")]
    ZeroAlignment,
    /// A region would end beyond the 64-bit address space.
    #[error("region of {count} x {element_size} bytes at cursor {cursor} overflows the address space")]
    AddressOverflow {
        /// Byte cursor before the region was placed.
        cursor: u64,
        /// Element size of the region.
        element_size: usize,
        /// Element count of the region.
        count: usize,
    },
}
