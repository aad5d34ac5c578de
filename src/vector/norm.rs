use crate::error::{check, LinalgError};
use crate::traits::FloatScalar;
use crate::vector::Vector;

// ── Products ────────────────────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// Dot product. Lengths must agree.
    ///
    /// ```
    /// use microla::Vector;
    /// let (mut a, mut b) = ([1.0_f64, 2.0, 3.0], [4.0_f64, 5.0, 6.0]);
    /// let a = Vector::new(&mut a);
    /// let b = Vector::new(&mut b);
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Vector<'_, T>) -> Result<T, LinalgError> {
        check!(self.len == rhs.len, LinalgError::ShapeMismatch);
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product of two 3-vectors into a 3-vector `out`.
    ///
    /// ```
    /// use microla::Vector;
    /// let (mut x, mut y, mut z) = ([1.0_f64, 0.0, 0.0], [0.0_f64, 1.0, 0.0], [0.0_f64; 3]);
    /// let x = Vector::new(&mut x);
    /// let y = Vector::new(&mut y);
    /// let mut z = Vector::new(&mut z);
    /// x.cross(&y, &mut z).unwrap();
    /// assert_eq!(z.as_slice(), &[0.0, 0.0, 1.0]);
    /// ```
    pub fn cross(&self, rhs: &Vector<'_, T>, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.len == 3 && rhs.len == 3 && out.len == 3,
            LinalgError::ShapeMismatch
        );
        let (v, w) = (self.as_slice(), rhs.as_slice());
        out.data[0] = v[1] * w[2] - v[2] * w[1];
        out.data[1] = v[2] * w[0] - v[0] * w[2];
        out.data[2] = v[0] * w[1] - v[1] * w[0];
        Ok(())
    }
}

// ── Norms ───────────────────────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// Sum of squared elements (dot product with self).
    pub fn sum_of_squares(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
    }

    /// Magnitude, computed as the square root of [`sum_of_squares`](Self::sum_of_squares).
    pub fn magnitude(&self) -> T {
        self.sum_of_squares().sqrt()
    }

    /// Euclidean distance `|self - rhs|`.
    ///
    /// Returns NaN if the lengths differ.
    pub fn distance(&self, rhs: &Vector<'_, T>) -> T {
        if self.len != rhs.len {
            return T::nan();
        }
        self.iter()
            .zip(rhs.iter())
            .fold(T::zero(), |acc, (&a, &b)| {
                let d = a - b;
                acc + d * d
            })
            .sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// A zero vector has no direction; it is reset to `[1, 0, ..., 0]`.
    ///
    /// ```
    /// use microla::Vector;
    /// let mut buf = [0.0_f64; 3];
    /// let mut v = Vector::new(&mut buf);
    /// v.to_unit();
    /// assert_eq!(v.as_slice(), &[1.0, 0.0, 0.0]);
    /// ```
    pub fn to_unit(&mut self) {
        if self.len == 0 {
            return;
        }
        let mag = self.norm();
        if mag != T::zero() {
            self.scalar_mul(T::one() / mag);
        } else {
            self.zero();
            self.data[0] = T::one();
        }
    }
}
