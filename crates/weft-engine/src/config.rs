//! Experiment configuration.
//!
//! [`ExperimentConfig`] bundles everything about a run that is not the
//! pattern or the permutation. [`validate()`](ExperimentConfig::validate)
//! is called by both runners before anything is allocated.

use weft_arena::ArenaConfig;

use crate::error::ExperimentError;
use crate::pattern::Precision;

// ── StrideConfig ───────────────────────────────────────────────────

/// Parameters of the [`Stride2D`](crate::Pattern::Stride2D) walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrideConfig {
    /// Row step per load. Default: 1.
    pub dx: usize,
    /// Column step per load. Default: 1.
    pub dy: usize,
    /// Number of loads. `None` = one per element of the matrix.
    pub count: Option<usize>,
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            dx: 1,
            dy: 1,
            count: None,
        }
    }
}

impl StrideConfig {
    /// Resolve the load count for a matrix of `volume` elements.
    pub fn resolved_count(&self, volume: usize) -> usize {
        self.count.unwrap_or(volume)
    }
}

// ── ExperimentConfig ───────────────────────────────────────────────

/// Configuration shared by [`run_traced`](crate::run_traced) and
/// [`run_native`](crate::run_native).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Arena layout for traced runs. Ignored by native runs.
    pub arena: ArenaConfig,
    /// Scalar element type. Default: double.
    pub precision: Precision,
    /// Seed for native input data. Default: 0.
    pub seed: u64,
    /// Stride walk parameters.
    pub stride: StrideConfig,
}

impl ExperimentConfig {
    /// Default config at the given precision.
    pub fn with_precision(precision: Precision) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        self.arena.validate()?;
        Ok(())
    }
}
