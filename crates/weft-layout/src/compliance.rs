//! Array contract compliance test helpers.
//!
//! These functions verify that an indexer satisfies the invariants
//! required by the [`Array`] contract. Reused by every indexer's test
//! module (ShuffleArray, MortonArray, LexicographicArray).

use indexmap::IndexSet;
use weft_core::Array;

use crate::iter::CoordIter;

fn to_array<const N: usize>(coords: &[usize]) -> [usize; N] {
    let mut out = [0usize; N];
    out.copy_from_slice(coords);
    out
}

/// Assert that `offset` maps the coordinate space one-to-one onto
/// `0..volume`.
pub fn assert_offsets_bijective<A, F, const N: usize>(array: &A, offset: &F)
where
    A: Array<N>,
    F: Fn(&A, [usize; N]) -> usize,
{
    let extents = array.extents();
    let volume: usize = extents.iter().product();
    let mut seen = IndexSet::with_capacity(volume);
    for coords in CoordIter::new(&extents) {
        let off = offset(array, to_array(&coords));
        assert!(off < volume, "offset {off} of {coords:?} >= volume {volume}");
        assert!(seen.insert(off), "offset {off} of {coords:?} reused");
    }
    assert_eq!(seen.len(), volume, "offsets do not cover 0..{volume}");
}

/// Assert that a value stored at every coordinate reads back unchanged
/// after all stores complete (no two coordinates alias).
pub fn assert_store_load_round_trip<A, const N: usize>(array: &mut A)
where
    A: Array<N, Value = f64>,
{
    let extents = array.extents();
    for (k, coords) in CoordIter::new(&extents).enumerate() {
        array.store(to_array(&coords), k as f64 + 0.5);
    }
    for (k, coords) in CoordIter::new(&extents).enumerate() {
        assert_eq!(
            array.load(to_array(&coords)),
            k as f64 + 0.5,
            "value at {coords:?} was overwritten"
        );
    }
}

/// Assert that checked access rejects the first coordinate past the end of
/// each dimension.
pub fn assert_checked_access_rejects_overflow<A, const N: usize>(array: &mut A)
where
    A: Array<N, Value = f64>,
{
    let extents = array.extents();
    for d in 0..N {
        let mut coords = [0usize; N];
        coords[d] = extents[d];
        assert!(
            array.try_load(coords).is_err(),
            "try_load({coords:?}) accepted an out-of-range coordinate"
        );
        assert!(
            array.try_store(coords, 1.0).is_err(),
            "try_store({coords:?}) accepted an out-of-range coordinate"
        );
    }
}

/// Run all compliance checks on an array.
pub fn run_full_compliance<A, F, const N: usize>(mut array: A, offset: F)
where
    A: Array<N, Value = f64>,
    F: Fn(&A, [usize; N]) -> usize,
{
    assert_offsets_bijective(&array, &offset);
    assert_store_load_round_trip(&mut array);
    assert_checked_access_rejects_overflow(&mut array);
}
