//! Validated permutation vectors.
//!
//! A permutation lists one dimension tag per address bit, least
//! significant bit first. Entry `b` says which dimension owns bit `b` of a
//! flat offset. Validation happens once, here, so the indexers never see
//! an invalid tag.

use std::fmt;
use std::str::FromStr;

use weft_core::Coords;

use crate::error::LayoutError;

/// An assignment of address bits to dimensions.
///
/// Invariants (checked by every constructor):
/// - at least one dimension,
/// - every tag is in `0..ndim`,
/// - at most [`Permutation::MAX_BITS`] entries, so that every extent and
///   the total volume fit in `usize`.
///
/// A dimension that no entry names is legal: it has a single valid
/// coordinate, 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    tags: Vec<usize>,
    ndim: usize,
}

impl Permutation {
    /// Largest supported number of address bits.
    pub const MAX_BITS: usize = usize::BITS as usize - 1;

    /// Build a permutation for `ndim` dimensions.
    pub fn new(tags: &[usize], ndim: usize) -> Result<Self, LayoutError> {
        if ndim == 0 {
            return Err(LayoutError::NoDimensions);
        }
        if tags.len() > Self::MAX_BITS {
            return Err(LayoutError::TooManyBits {
                bits: tags.len(),
                max: Self::MAX_BITS,
            });
        }
        if let Some((position, &tag)) = tags.iter().enumerate().find(|&(_, &t)| t >= ndim) {
            return Err(LayoutError::InvalidTag {
                position,
                tag,
                ndim,
            });
        }
        tracing::debug!(ndim, bits = tags.len(), "permutation accepted");
        Ok(Self {
            tags: tags.to_vec(),
            ndim,
        })
    }

    /// Build a permutation whose dimension count is one more than its
    /// largest tag.
    pub fn infer(tags: &[usize]) -> Result<Self, LayoutError> {
        let ndim = tags.iter().max().map_or(0, |&t| t.saturating_add(1));
        Self::new(tags, ndim)
    }

    /// Row-major layout: the last dimension owns the lowest bits, the first
    /// dimension the highest. `bits[d]` is the number of bits of dimension `d`.
    pub fn row_major(bits: &[usize]) -> Result<Self, LayoutError> {
        let mut tags = Vec::with_capacity(total_width(bits)?);
        for d in (0..bits.len()).rev() {
            tags.extend(std::iter::repeat_n(d, bits[d]));
        }
        Self::new(&tags, bits.len())
    }

    /// Column-major layout: the first dimension owns the lowest bits.
    pub fn column_major(bits: &[usize]) -> Result<Self, LayoutError> {
        let mut tags = Vec::with_capacity(total_width(bits)?);
        for (d, &b) in bits.iter().enumerate() {
            tags.extend(std::iter::repeat_n(d, b));
        }
        Self::new(&tags, bits.len())
    }

    /// Morton (Z-order) layout over `ndim` dimensions of `bits_per_dim` bits
    /// each. Bit `b` belongs to dimension `ndim - 1 - b % ndim`.
    pub fn morton(bits_per_dim: usize, ndim: usize) -> Result<Self, LayoutError> {
        if ndim == 0 {
            return Err(LayoutError::NoDimensions);
        }
        let total = checked_width(bits_per_dim.checked_mul(ndim))?;
        let tags: Vec<usize> = (0..total).map(|b| ndim - 1 - b % ndim).collect();
        Self::new(&tags, ndim)
    }

    /// Blocked layout: the low `tile_bits` of every dimension form a
    /// row-major tile, and the remaining bits lay the tiles out row-major.
    pub fn blocked(bits: &[usize], tile_bits: usize) -> Result<Self, LayoutError> {
        let mut tags = Vec::with_capacity(total_width(bits)?);
        for d in (0..bits.len()).rev() {
            tags.extend(std::iter::repeat_n(d, bits[d].min(tile_bits)));
        }
        for d in (0..bits.len()).rev() {
            tags.extend(std::iter::repeat_n(d, bits[d].saturating_sub(tile_bits)));
        }
        Self::new(&tags, bits.len())
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of address bits.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the permutation assigns no bits (a single-element layout).
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The dimension owning bit `position`, if the permutation is that wide.
    pub fn tag(&self, position: usize) -> Option<usize> {
        self.tags.get(position).copied()
    }

    /// Iterate over the tags, least significant bit first.
    pub fn tags(&self) -> impl Iterator<Item = usize> + '_ {
        self.tags.iter().copied()
    }

    /// Number of bits owned by dimension `dim`.
    pub fn dimension_bits(&self, dim: usize) -> usize {
        self.tags.iter().filter(|&&t| t == dim).count()
    }

    /// Per-dimension extents, `2^bits(d)` each.
    pub fn extents(&self) -> Coords {
        (0..self.ndim)
            .map(|d| 1usize << self.dimension_bits(d))
            .collect()
    }

    /// Total number of addressable elements, `2^len`.
    pub fn volume(&self) -> usize {
        1usize << self.tags.len()
    }
}

/// Sum of per-dimension widths, rejected before any tag is materialised.
fn total_width(bits: &[usize]) -> Result<usize, LayoutError> {
    checked_width(bits.iter().try_fold(0usize, |acc, &b| acc.checked_add(b)))
}

fn checked_width(total: Option<usize>) -> Result<usize, LayoutError> {
    match total {
        Some(bits) if bits <= Permutation::MAX_BITS => Ok(bits),
        other => Err(LayoutError::TooManyBits {
            bits: other.unwrap_or(usize::MAX),
            max: Permutation::MAX_BITS,
        }),
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for Permutation {
    type Err = LayoutError;

    /// Parse a comma- or whitespace-separated tag list, e.g. `"1,0,1,0"`.
    /// The dimension count is inferred from the largest tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<usize>().map_err(|_| LayoutError::Parse {
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::infer(&tags)
    }
}
