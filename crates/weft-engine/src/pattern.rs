//! Named access patterns and element precision.

use std::fmt;
use std::mem::size_of;
use std::str::FromStr;

use weft_core::Vec3;

use crate::error::ExperimentError;

/// A kernel together with its operand set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `C += A·B`, loop order i, j, k.
    MMijk,
    /// `C += A·B`, loop order i, k, j.
    MMikj,
    /// `C = A·Bᵀ`, loop order i, j, k.
    MMTijk,
    /// `C += A·Bᵀ`, loop order i, k, j.
    MMTikj,
    /// Three Jacobi sweeps, `A` and `B` ping-ponged.
    Jacobi2D,
    /// Cholesky–Banachiewicz, `A` into `L`.
    Cholesky,
    /// Crout LU, `A` into `L` and `U`.
    Crout,
    /// 19-point 3-D stencil over six fields.
    Himeno,
    /// Load-only strided walk over one matrix.
    Stride2D,
}

impl Pattern {
    /// Every pattern, in declaration order.
    pub const ALL: [Pattern; 9] = [
        Pattern::MMijk,
        Pattern::MMikj,
        Pattern::MMTijk,
        Pattern::MMTikj,
        Pattern::Jacobi2D,
        Pattern::Cholesky,
        Pattern::Crout,
        Pattern::Himeno,
        Pattern::Stride2D,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Pattern::MMijk => "MMijk",
            Pattern::MMikj => "MMikj",
            Pattern::MMTijk => "MMTijk",
            Pattern::MMTikj => "MMTikj",
            Pattern::Jacobi2D => "Jacobi2D",
            Pattern::Cholesky => "Cholesky",
            Pattern::Crout => "Crout",
            Pattern::Himeno => "Himeno",
            Pattern::Stride2D => "Stride2D",
        }
    }

    /// Dimension count of every operand.
    pub fn ndim(self) -> usize {
        match self {
            Pattern::Himeno => 3,
            _ => 2,
        }
    }

    /// Number of arrays the pattern lays out.
    pub fn operand_count(self) -> usize {
        match self {
            Pattern::MMijk | Pattern::MMikj | Pattern::MMTijk | Pattern::MMTikj => 3,
            Pattern::Jacobi2D | Pattern::Cholesky => 2,
            Pattern::Crout => 3,
            Pattern::Himeno => 6,
            Pattern::Stride2D => 1,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ExperimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ExperimentError::UnknownPattern {
                name: s.to_string(),
            })
    }
}

/// Element precision of every scalar operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// `f32`.
    Single,
    /// `f64`.
    #[default]
    Double,
}

impl Precision {
    /// Bytes per scalar element.
    pub fn scalar_size(self) -> usize {
        match self {
            Precision::Single => size_of::<f32>(),
            Precision::Double => size_of::<f64>(),
        }
    }

    /// Bytes per 3-vector element.
    pub fn vector_size(self) -> usize {
        match self {
            Precision::Single => size_of::<Vec3<f32>>(),
            Precision::Double => size_of::<Vec3<f64>>(),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Precision::Single => "single",
            Precision::Double => "double",
        })
    }
}

impl FromStr for Precision {
    type Err = ExperimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" | "f32" => Ok(Precision::Single),
            "double" | "f64" => Ok(Precision::Double),
            _ => Err(ExperimentError::UnknownPrecision {
                name: s.to_string(),
            }),
        }
    }
}
