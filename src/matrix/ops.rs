use crate::error::{check, LinalgError};
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: FloatScalar> Matrix<'_, T> {
    /// `out = self + rhs`. All three shapes must be identical.
    pub fn add(&self, rhs: &Matrix<'_, T>, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.shape() == rhs.shape() && self.shape() == out.shape(),
            LinalgError::ShapeMismatch
        );
        for ((o, &a), &b) in out
            .as_mut_slice()
            .iter_mut()
            .zip(self.as_slice())
            .zip(rhs.as_slice())
        {
            *o = a + b;
        }
        Ok(())
    }

    /// `self += rhs`, overwriting `self`.
    pub fn add_in_place(&mut self, rhs: &Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(self.shape() == rhs.shape(), LinalgError::ShapeMismatch);
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// `out = self - rhs`. All three shapes must be identical.
    pub fn sub(&self, rhs: &Matrix<'_, T>, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.shape() == rhs.shape() && self.shape() == out.shape(),
            LinalgError::ShapeMismatch
        );
        for ((o, &a), &b) in out
            .as_mut_slice()
            .iter_mut()
            .zip(self.as_slice())
            .zip(rhs.as_slice())
        {
            *o = a - b;
        }
        Ok(())
    }

    /// `self -= rhs`, overwriting `self`.
    pub fn sub_in_place(&mut self, rhs: &Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(self.shape() == rhs.shape(), LinalgError::ShapeMismatch);
        for (a, &b) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = *a - b;
        }
        Ok(())
    }
}

// ── Products ────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<'_, T> {
    /// Matrix product `(M×N) * (N×P) → (M×P)` written into `out`.
    ///
    /// ```
    /// use microla::Matrix;
    /// let (mut a, mut b, mut c) = ([1.0_f64, 2.0, 3.0, 4.0], [5.0_f64, 6.0, 7.0, 8.0], [0.0_f64; 4]);
    /// let a = Matrix::new(2, 2, &mut a).unwrap();
    /// let b = Matrix::new(2, 2, &mut b).unwrap();
    /// let mut c = Matrix::new(2, 2, &mut c).unwrap();
    /// a.mul(&b, &mut c).unwrap();
    /// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn mul(&self, rhs: &Matrix<'_, T>, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.cols == rhs.rows && out.rows == self.rows && out.cols == rhs.cols,
            LinalgError::ShapeMismatch
        );
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(())
    }

    /// Multiply every cell by `s` in place.
    pub fn scalar_mul(&mut self, s: T) {
        for x in self.as_mut_slice() {
            *x = *x * s;
        }
    }

    /// Write the transpose into `out`, which must be `cols × rows`.
    pub fn transpose(&self, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        check!(
            out.rows == self.cols && out.cols == self.rows,
            LinalgError::ShapeMismatch
        );
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        Ok(())
    }
}
