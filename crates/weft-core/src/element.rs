//! Element and scalar traits shared by pointers, arrays, and kernels.

use std::fmt::Debug;

use num_traits::Float;

/// Anything that can live in a pointer-backed buffer.
///
/// `Default` supplies the zero-initialised contents of fresh buffers and
/// the placeholder value returned by tracing loads.
pub trait Element: Copy + Default + Debug + 'static {}

impl<T: Copy + Default + Debug + 'static> Element for T {}

/// A three-component vector element, as stored by the Himeno coefficient
/// fields.
pub type Vec3<T> = [T; 3];

/// Floating-point element type used by the kernel library.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + Element {
    /// Convert an `f64` literal to this precision.
    fn lit(v: f64) -> Self;

    /// Widen to `f64`, for checksums and comparisons across precisions.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    #[inline]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
