//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for arena partitioning.
///
/// Validated by [`ArenaConfig::validate`] when an arena is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Every region starts at a multiple of this many bytes.
    ///
    /// Default: `0xFFFF_FFFF`, which gives each region its own slice of the
    /// address space. Any non-zero value is accepted; it need not be a
    /// power of two.
    pub alignment: u64,
}

impl ArenaConfig {
    /// Default region alignment in bytes.
    pub const DEFAULT_ALIGNMENT: u64 = 0xFFFF_FFFF;

    /// Config with the given alignment.
    pub fn with_alignment(alignment: u64) -> Self {
        Self { alignment }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.alignment == 0 {
            return Err(ArenaError::ZeroAlignment);
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::with_alignment(Self::DEFAULT_ALIGNMENT)
    }
}
