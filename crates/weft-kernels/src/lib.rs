//! Layout-agnostic numerical kernels for weft.
//!
//! Every kernel is written against [`Array`](weft_core::Array) (through
//! [`Matrix`](weft_core::Matrix) for the 2-D ones) and nothing else. Its
//! numeric output for given input values is therefore identical under
//! every indexer and permutation, and running it over tracing pointers
//! yields the exact access stream a real run would issue.
//!
//! Kernels check operand shapes up front and return
//! [`KernelError::ShapeMismatch`] before touching any element. They do not
//! detect or recover from numerical failure (a non-positive pivot in
//! [`cholesky`] yields NaN, not an error).
//!
//! | Kernel | Operands | Result |
//! |--------|----------|--------|
//! | [`mm_ijk`], [`mm_ikj`], [`mm_ijk_tiled`] | `A`, `B`, `C` | `C += A·B` |
//! | [`mmt_ijk`] | `A`, `B`, `C` | `C = A·Bᵀ` |
//! | [`mmt_ikj`] | `A`, `B`, `C` | `C += A·Bᵀ` |
//! | [`jacobi2d`] | `A`, `B` | 3 relaxation sweeps, result in `B` |
//! | [`cholesky`] | `A`, `L` | `L·Lᵀ = A` |
//! | [`crout`] | `A`, `L`, `U` | `L·U = A`, unit-diagonal `U` |
//! | [`himeno`] | `A`, `B`, `C` (3-vectors), `P`, `W1`, `W2` | 19-point update into `W2` |
//! | [`stride2d`] | `A` | sum of a strided walk |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod decompose;
pub mod error;
pub mod himeno;
pub mod jacobi;
pub mod matmul;
mod shape;
pub mod stride;

pub use decompose::{cholesky, crout};
pub use error::KernelError;
pub use himeno::himeno;
pub use jacobi::{jacobi2d, jacobi2d_sweeps, JACOBI_SWEEPS};
pub use matmul::{mm_ijk, mm_ijk_tiled, mm_ikj, mmt_ijk, mmt_ikj};
pub use stride::stride2d;
