use core::ops::{Mul, Neg};

use crate::error::{check, LinalgError};
use crate::matrix::Matrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Orientation quaternion.
///
/// Scalar-first convention: `[w, x, y, z]` where `w` is the scalar part
/// and `(x, y, z)` is the vector part. Rotations use unit quaternions; the
/// type itself does not enforce unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self {
            w: T::one(),
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Rotation of `angle` radians about `axis`, a unit 3-vector.
    pub fn from_axis_angle(axis: &Vector<'_, T>, angle: T) -> Result<Self, LinalgError> {
        check!(axis.len() == 3, LinalgError::ShapeMismatch);
        let (s, c) = (angle / T::two()).sin_cos();
        Ok(Self {
            w: c,
            x: axis[0] * s,
            y: axis[1] * s,
            z: axis[2] * s,
        })
    }

    /// Rotation produced by turning at angular rate `omega` (rad/s, body
    /// frame) for `dt` seconds.
    ///
    /// Uses the exact axis-angle form; a rate too small to define an axis
    /// yields the identity.
    pub fn from_angular_velocity(omega: &Vector<'_, T>, dt: T) -> Result<Self, LinalgError> {
        check!(omega.len() == 3, LinalgError::ShapeMismatch);
        let rate = omega.norm();
        let angle = rate * dt;
        if angle.abs() < T::epsilon() {
            return Ok(Self::identity());
        }
        let (s, c) = (angle / T::two()).sin_cos();
        let k = s / rate;
        Ok(Self {
            w: c,
            x: omega[0] * k,
            y: omega[1] * k,
            z: omega[2] * k,
        })
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate: `(w, -x, -y, -z)`. The inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Squared norm: `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm. `DivisionByZero` for the zero quaternion.
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        let n = self.norm();
        if n == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let inv = T::one() / n;
        Ok(Self {
            w: self.w * inv,
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
        })
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Write the equivalent 3×3 rotation matrix into `out`.
    ///
    /// ```
    /// use microla::{Matrix, Quaternion};
    ///
    /// let q = Quaternion::<f64>::identity();
    /// let mut buf = [0.0_f64; 9];
    /// let mut r = Matrix::new(3, 3, &mut buf).unwrap();
    /// q.to_rotation_matrix(&mut r).unwrap();
    /// assert_eq!(r.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn to_rotation_matrix(&self, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(out.shape() == (3, 3), LinalgError::ShapeMismatch);
        let two = T::two();
        let one = T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        out.copy_from(&[
            one - two * (yy + zz),
            two * (xy - wz),
            two * (xz + wy),
            two * (xy + wz),
            one - two * (xx + zz),
            two * (yz - wx),
            two * (xz - wy),
            two * (yz + wx),
            one - two * (xx + yy),
        ])
    }

    /// Rotate the 3-vector `v` by this (unit) quaternion into `out`.
    pub fn rotate(&self, v: &Vector<'_, T>, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(v.len() == 3 && out.len() == 3, LinalgError::ShapeMismatch);
        let p = Self::new(T::zero(), v[0], v[1], v[2]);
        let r = *self * p * self.conjugate();
        out.copy_from(&[r.x, r.y, r.z])
    }
}

// ── Operator overloads ───────────────────────────────────────────────

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
