use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be stored in a vector or matrix view.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + PartialOrd + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the real floating-point element types the kernel computes with.
///
/// Required by everything that needs `sqrt`, `abs`, NaN sentinels or
/// conversions from counts (norms, means, decompositions). In practice
/// this is `f32` or `f64`.
pub trait FloatScalar: Scalar + Float + NumCast {
    /// Convert a count or index into `Self` by real-valued conversion.
    ///
    /// Counts used by the kernel are small enough to be exact in both
    /// precisions, so the conversion never truncates to an integer.
    #[inline]
    fn from_count(n: usize) -> Self {
        <Self as NumCast>::from(n).unwrap_or_else(Self::nan)
    }

    /// Convert an `f64` constant into `Self`, rounding for `f32`.
    #[inline]
    fn from_f64(x: f64) -> Self {
        <Self as NumCast>::from(x).unwrap_or_else(Self::nan)
    }

    /// The constant `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Scalar + Float + NumCast> FloatScalar for T {}

/// Build-time default element type.
///
/// `f64` unless the `single-precision` feature is enabled, in which case
/// it is `f32`. [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix)
/// default their element parameter to this type.
#[cfg(not(feature = "single-precision"))]
pub type Real = f64;

/// Build-time default element type.
#[cfg(feature = "single-precision")]
pub type Real = f32;

/// Read-only access to a matrix-like type.
///
/// Lets the determinant recursion and the eigen solver walk a matrix
/// without caring whether it is the caller's view or a stack workspace.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get_ref(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
