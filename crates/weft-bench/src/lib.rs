//! Benchmark profiles for the weft layout framework.
//!
//! - [`square_layouts`]: the named 2-D layouts every kernel benchmark
//!   compares (row-major, column-major, Morton, blocked).
//! - [`seeded_matrix`]: a row-major-keyed input matrix under any layout.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use weft_arena::BufferPointer;
use weft_core::Matrix;
use weft_layout::{LayoutError, Permutation, ShuffleArray};

/// A real-memory matrix under a runtime permutation.
pub type BenchMatrix = ShuffleArray<BufferPointer<f64>, 2>;

/// Named layouts of a `2^bits × 2^bits` matrix.
///
/// The blocked layout uses 8×8 tiles (or the whole matrix if smaller).
pub fn square_layouts(bits: usize) -> Result<Vec<(&'static str, Permutation)>, LayoutError> {
    Ok(vec![
        ("row_major", Permutation::row_major(&[bits, bits])?),
        ("column_major", Permutation::column_major(&[bits, bits])?),
        ("morton", Permutation::morton(bits, 2)?),
        ("blocked_8x8", Permutation::blocked(&[bits, bits], 3)?),
    ])
}

/// A zero matrix under `permutation`.
pub fn zero_matrix(permutation: &Permutation) -> Result<BenchMatrix, LayoutError> {
    ShuffleArray::new(BufferPointer::zeroed(permutation.volume()), permutation)
}

/// A matrix holding `(i * 31 + j * 17) mod 97 / 97` at `(i, j)`, so every
/// layout holds the same values at the same coordinates.
pub fn seeded_matrix(permutation: &Permutation) -> Result<BenchMatrix, LayoutError> {
    let mut a = zero_matrix(permutation)?;
    let (m, n) = a.shape();
    for i in 0..m {
        for j in 0..n {
            a.set(i, j, ((i * 31 + j * 17) % 97) as f64 / 97.0);
        }
    }
    Ok(a)
}
