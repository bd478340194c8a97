//! Arena partitioning: disjoint, aligned regions in declaration order.

use crate::error::ArenaError;

/// One region of an arena, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Byte address of the first element.
    pub base: u64,
    /// Size of one element in bytes.
    pub element_size: usize,
    /// Number of elements.
    pub count: usize,
}

impl Region {
    /// Length of the region in bytes.
    pub fn len_bytes(&self) -> u64 {
        self.element_size as u64 * self.count as u64
    }

    /// One past the last byte of the region.
    pub fn end(&self) -> u64 {
        self.base + self.len_bytes()
    }

    /// Whether two regions share any byte.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

/// Bump allocator over a logical byte range.
///
/// Each [`place`](Partitioner::place) rounds the cursor up to the next
/// multiple of the alignment, places the region there, and advances the
/// cursor past it. Identical inputs always produce identical regions.
#[derive(Clone, Debug)]
pub struct Partitioner {
    alignment: u64,
    cursor: u64,
    regions: Vec<Region>,
}

impl Partitioner {
    /// Start an empty partition. `alignment` must be non-zero.
    pub fn new(alignment: u64) -> Result<Self, ArenaError> {
        if alignment == 0 {
            return Err(ArenaError::ZeroAlignment);
        }
        Ok(Self {
            alignment,
            cursor: 0,
            regions: Vec::new(),
        })
    }

    /// Place the next region of `count` elements of `element_size` bytes.
    pub fn place(&mut self, element_size: usize, count: usize) -> Result<Region, ArenaError> {
        let overflow = || ArenaError::AddressOverflow {
            cursor: self.cursor,
            element_size,
            count,
        };
        let base = self
            .cursor
            .checked_next_multiple_of(self.alignment)
            .ok_or_else(overflow)?;
        let len = (element_size as u64)
            .checked_mul(count as u64)
            .ok_or_else(overflow)?;
        let end = base.checked_add(len).ok_or_else(overflow)?;
        let region = Region {
            base,
            element_size,
            count,
        };

        assert_eq!(base % self.alignment, 0, "region base {base} misaligned");
        if let Some(prev) = self.regions.last() {
            assert!(
                prev.end() <= base,
                "region {region:?} overlaps previous region {prev:?}"
            );
        }

        self.cursor = end;
        self.regions.push(region);
        Ok(region)
    }

    /// Regions placed so far, in declaration order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Byte cursor: one past the end of the last region.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// The configured alignment.
    pub fn alignment(&self) -> u64 {
        self.alignment
    }
}

/// Lay out `(element_size, count)` requests in order under `alignment`.
pub fn partition(requests: &[(usize, usize)], alignment: u64) -> Result<Vec<Region>, ArenaError> {
    let mut partitioner = Partitioner::new(alignment)?;
    for &(element_size, count) in requests {
        partitioner.place(element_size, count)?;
    }
    Ok(partitioner.regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_regions_under_sixteen_byte_alignment() {
        let regions = partition(&[(4, 3), (4, 5), (4, 2)], 16).unwrap();
        let bases: Vec<u64> = regions.iter().map(|r| r.base).collect();
        assert_eq!(bases, vec![0, 16, 48]);
        assert_eq!(regions[0].end(), 12);
        assert_eq!(regions[1].end(), 36);
        assert_eq!(regions[2].end(), 56);
        assert_eq!(partition(&[(4, 3), (4, 5), (4, 2)], 16).unwrap(), regions);
    }

    #[test]
    fn non_power_of_two_alignment() {
        let regions = partition(&[(8, 1), (8, 1)], 12).unwrap();
        assert_eq!(regions[1].base, 12);
    }

    #[test]
    fn empty_region_still_advances_alignment() {
        let regions = partition(&[(4, 1), (4, 0), (4, 1)], 8).unwrap();
        assert_eq!(regions[1].base, 8);
        assert_eq!(regions[1].len_bytes(), 0);
        assert_eq!(regions[2].base, 8);
    }

    #[test]
    fn default_alignment_spreads_regions() {
        let regions = partition(&[(4, 16), (4, 16)], 0xFFFF_FFFF).unwrap();
        assert_eq!(regions[0].base, 0);
        assert_eq!(regions[1].base, 0xFFFF_FFFF);
    }

    #[test]
    fn zero_alignment_rejected() {
        assert_eq!(partition(&[(4, 1)], 0), Err(ArenaError::ZeroAlignment));
    }

    #[test]
    fn overflow_reported_not_wrapped() {
        let err = partition(&[(8, usize::MAX), (8, 1)], 8).unwrap_err();
        assert!(matches!(err, ArenaError::AddressOverflow { .. }));
    }

    proptest! {
        #[test]
        fn regions_are_aligned_disjoint_and_ordered(
            alignment in 1u64..256,
            requests in proptest::collection::vec((1usize..16, 0usize..64), 1..12),
        ) {
            let regions = partition(&requests, alignment).unwrap();
            prop_assert_eq!(regions.len(), requests.len());
            for (r, &(size, count)) in regions.iter().zip(&requests) {
                prop_assert_eq!(r.base % alignment, 0);
                prop_assert_eq!((r.element_size, r.count), (size, count));
            }
            for w in regions.windows(2) {
                prop_assert!(w[0].end() <= w[1].base);
                prop_assert!(w[0].base <= w[1].base);
            }
            for (i, a) in regions.iter().enumerate() {
                for b in &regions[i + 1..] {
                    prop_assert!(!a.overlaps(b) || a.len_bytes() == 0 || b.len_bytes() == 0);
                }
            }
            prop_assert_eq!(partition(&requests, alignment).unwrap(), regions);
        }
    }
}
