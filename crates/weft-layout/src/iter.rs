//! Row-major iteration over a coordinate space.

use weft_core::Coords;

/// Iterates over every coordinate in `[0, extents[0]) × … × [0, extents[n-1])`
/// in row-major order (last dimension fastest).
///
/// Yields nothing if any extent is zero, and a single empty coordinate for
/// zero dimensions.
#[derive(Clone, Debug)]
pub struct CoordIter {
    extents: Coords,
    next: Option<Coords>,
}

impl CoordIter {
    /// Start iterating at the origin.
    pub fn new(extents: &[usize]) -> Self {
        let next = if extents.contains(&0) {
            None
        } else {
            Some(Coords::from_elem(0, extents.len()))
        };
        Self {
            extents: Coords::from_slice(extents),
            next,
        }
    }
}

impl Iterator for CoordIter {
    type Item = Coords;

    fn next(&mut self) -> Option<Coords> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        for d in (0..succ.len()).rev() {
            succ[d] += 1;
            if succ[d] < self.extents[d] {
                self.next = Some(succ);
                return Some(current);
            }
            succ[d] = 0;
        }
        Some(current)
    }
}
