//! Himeno-style 19-point 3-D stencil.

use weft_core::{Array, Scalar, Vec3};

use crate::error::KernelError;
use crate::shape;

/// One Jacobi-style pressure update over the interior of the grid.
///
/// For every interior point `(i, j, k)` (each coordinate in `1..extent-1`):
///
/// ```text
/// s0 = A₀·P[i,j,k]   + A₁·P[i,j+1,k] + A₂·P[i,j,k+1]
///    + B₀·(P[i+1,j+1,k] - P[i+1,j-1,k] - P[i-1,j+1,k] + P[i-1,j-1,k])
///    + B₁·(P[i,j+1,k+1] - P[i,j-1,k+1] - P[i,j+1,k-1] + P[i,j-1,k-1])
///    + B₂·(P[i+1,j,k+1] - P[i-1,j,k+1] - P[i+1,j,k-1] + P[i-1,j,k-1])
///    + C₀·P[i-1,j,k] + C₁·P[i,j-1,k] + C₂·P[i,j,k-1]
///    + W1[i,j,k]
/// W2[i,j,k] = P[i,j,k] + 0.8·(s0/6 - P[i,j,k])
/// ```
///
/// `A`, `B`, `C` are 3-vector coefficient fields. Boundary points of `w2`
/// are not written.
///
/// Each interior point issues 20 loads of `P`: the centre is read once in
/// `s0`, once for `ss` and once for the stored value. Traced runs see all
/// three.
pub fn himeno<T, V, S, W>(
    a: &V,
    b: &V,
    c: &V,
    p: &S,
    w1: &S,
    w2: &mut W,
) -> Result<(), KernelError>
where
    T: Scalar,
    V: Array<3, Value = Vec3<T>>,
    S: Array<3, Value = T>,
    W: Array<3, Value = T>,
{
    let extents = w2.extents();
    for (what, other) in [
        ("A vs W2", a.extents()),
        ("B vs W2", b.extents()),
        ("C vs W2", c.extents()),
        ("P vs W2", p.extents()),
        ("W1 vs W2", w1.extents()),
    ] {
        shape::same("himeno", what, other, extents)?;
    }

    let [m, n, q] = extents;
    let sixth = T::lit(6.0);
    let omega = T::lit(0.8);
    for i in 1..m.saturating_sub(1) {
        for j in 1..n.saturating_sub(1) {
            for k in 1..q.saturating_sub(1) {
                let va = a.load([i, j, k]);
                let vb = b.load([i, j, k]);
                let vc = c.load([i, j, k]);
                let at = |di: usize, dj: usize, dk: usize| p.load([i + di - 1, j + dj - 1, k + dk - 1]);

                let s0 = va[0] * at(1, 1, 1)
                    + va[1] * at(1, 2, 1)
                    + va[2] * at(1, 1, 2)
                    + vb[0] * (at(2, 2, 1) - at(2, 0, 1) - at(0, 2, 1) + at(0, 0, 1))
                    + vb[1] * (at(1, 2, 2) - at(1, 0, 2) - at(1, 2, 0) + at(1, 0, 0))
                    + vb[2] * (at(2, 1, 2) - at(0, 1, 2) - at(2, 1, 0) + at(0, 1, 0))
                    + vc[0] * at(0, 1, 1)
                    + vc[1] * at(1, 0, 1)
                    + vc[2] * at(1, 1, 0)
                    + w1.load([i, j, k]);

                let ss = s0 / sixth - at(1, 1, 1);
                w2.store([i, j, k], at(1, 1, 1) + omega * ss);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_arena::BufferPointer;
    use weft_layout::{CoordIter, LexicographicArray};

    type Field<T> = LexicographicArray<BufferPointer<T>, 3>;

    fn field<T: weft_core::Element>(e: [usize; 3], fill: T) -> Field<T> {
        let len = e.iter().product();
        LexicographicArray::new(BufferPointer::from_vec(vec![fill; len]), e).unwrap()
    }

    #[test]
    fn uniform_pressure_relaxes_toward_source() {
        let e = [4, 4, 4];
        let a = field(e, [1.0f64; 3]);
        let b = field(e, [5.0f64; 3]);
        let c = field(e, [1.0f64; 3]);
        let p = field(e, 1.0f64);
        let w1 = field(e, 6.0f64);
        let mut w2 = field(e, 0.0f64);
        himeno(&a, &b, &c, &p, &w1, &mut w2).unwrap();

        // s0 = 6 + 6 = 12, ss = 12 / 6 - 1 = 1, w2 = 1 + 0.8.
        for coords in CoordIter::new(&e) {
            let x = [coords[0], coords[1], coords[2]];
            let interior = x.iter().all(|&v| (1..3).contains(&v));
            let want = if interior { 1.8 } else { 0.0 };
            assert!((w2.load(x) - want).abs() < 1e-12, "at {x:?}");
        }
    }

    #[test]
    fn cross_terms_use_pressure_differences() {
        let e = [3, 3, 3];
        let zero = field(e, [0.0f64; 3]);
        let b = field(e, [1.0f64, 0.0, 0.0]);
        let mut p = field(e, 0.0f64);
        p.store([2, 2, 1], 6.0);
        let w1 = field(e, 0.0f64);
        let mut w2 = field(e, 0.0f64);
        himeno(&zero, &b, &zero, &p, &w1, &mut w2).unwrap();
        // s0 = B0 * P[2,2,1] = 6, ss = 1 - 0, w2 = 0 + 0.8.
        assert!((w2.load([1, 1, 1]) - 0.8).abs() < 1e-15);
    }

    #[test]
    fn grid_without_interior_is_untouched() {
        let e = [2, 5, 5];
        let v = field(e, [1.0f32; 3]);
        let s = field(e, 1.0f32);
        let mut w2 = field(e, -1.0f32);
        himeno(&v, &v, &v, &s, &s, &mut w2).unwrap();
        assert!(CoordIter::new(&e).all(|c| w2.load([c[0], c[1], c[2]]) == -1.0));
    }

    #[test]
    fn interior_point_reads_pressure_centre_three_times() {
        use weft_arena::TracingPointer;
        use weft_test_utils::RecordingModel;

        let e = [3, 3, 3];
        let model = RecordingModel::new();
        let traced = |base: u64| {
            LexicographicArray::new(TracingPointer::<f64, _>::new(&model, base, 27), e).unwrap()
        };
        let vector = |base: u64| {
            LexicographicArray::new(TracingPointer::<Vec3<f64>, _>::new(&model, base, 27), e).unwrap()
        };
        let (a, b, c) = (vector(0), vector(1 << 12), vector(2 << 12));
        let (p, w1, mut w2) = (traced(3 << 12), traced(4 << 12), traced(5 << 12));
        himeno(&a, &b, &c, &p, &w1, &mut w2).unwrap();

        let accesses = model.accesses();
        let in_p = |addr: u64| ((3 << 12)..(4 << 12)).contains(&addr);
        let centre = (3 << 12) + 13 * 8;
        assert_eq!(accesses.iter().filter(|x| !x.is_store && in_p(x.address)).count(), 20);
        assert_eq!(accesses.iter().filter(|x| x.address == centre).count(), 3);
        assert_eq!(accesses.iter().filter(|x| !x.is_store).count(), 3 + 20 + 1);
        assert_eq!(accesses.iter().filter(|x| x.is_store).count(), 1);
    }

    #[test]
    fn mismatched_field_rejected() {
        let v = field([3, 3, 3], [0.0f64; 3]);
        let s = field([3, 3, 3], 0.0f64);
        let w1 = field([3, 3, 4], 0.0f64);
        let mut w2 = field([3, 3, 3], 0.0f64);
        assert!(matches!(
            himeno(&v, &v, &v, &s, &w1, &mut w2),
            Err(KernelError::ShapeMismatch { kernel: "himeno", .. })
        ));
    }
}
