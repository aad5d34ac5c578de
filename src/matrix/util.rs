use crate::error::{check, LinalgError};
use crate::matrix::Matrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

// ── Cell, row and column access ─────────────────────────────────────

impl<T: FloatScalar> Matrix<'_, T> {
    /// Read cell `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, LinalgError> {
        check!(i < self.rows && j < self.cols, LinalgError::ShapeMismatch);
        Ok(self[(i, j)])
    }

    /// Write cell `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, x: T) -> Result<(), LinalgError> {
        check!(i < self.rows && j < self.cols, LinalgError::ShapeMismatch);
        self[(i, j)] = x;
        Ok(())
    }

    /// Copy row `i` into `out`, whose length must equal the column count.
    ///
    /// ```
    /// use microla::{Matrix, Vector};
    /// let (mut m, mut r) = ([1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], [0.0_f64; 3]);
    /// let m = Matrix::new(2, 3, &mut m).unwrap();
    /// let mut row = Vector::new(&mut r);
    /// m.get_row(1, &mut row).unwrap();
    /// assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);
    /// ```
    pub fn get_row(&self, i: usize, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            i < self.rows && out.len() == self.cols,
            LinalgError::ShapeMismatch
        );
        let start = i * self.cols;
        out.as_mut_slice()
            .copy_from_slice(&self.data[start..start + self.cols]);
        Ok(())
    }

    /// Overwrite row `i` with `v`, whose length must equal the column count.
    pub fn set_row(&mut self, i: usize, v: &Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            i < self.rows && v.len() == self.cols,
            LinalgError::ShapeMismatch
        );
        let start = i * self.cols;
        self.data[start..start + self.cols].copy_from_slice(v.as_slice());
        Ok(())
    }

    /// Copy column `j` into `out`, whose length must equal the row count.
    pub fn get_col(&self, j: usize, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            j < self.cols && out.len() == self.rows,
            LinalgError::ShapeMismatch
        );
        for (i, x) in out.iter_mut().enumerate() {
            *x = self[(i, j)];
        }
        Ok(())
    }

    /// Overwrite column `j` with `v`, whose length must equal the row count.
    pub fn set_col(&mut self, j: usize, v: &Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            j < self.cols && v.len() == self.rows,
            LinalgError::ShapeMismatch
        );
        for (i, &x) in v.iter().enumerate() {
            self[(i, j)] = x;
        }
        Ok(())
    }
}

// ── Scans ───────────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<'_, T> {
    /// Row-major index of the cell preferred by `better`. Earlier cells win ties.
    fn scan(&self, better: impl Fn(T, T) -> bool) -> Result<usize, LinalgError> {
        let cells = self.as_slice();
        let mut best = 0;
        let mut best_val = *cells.first().ok_or(LinalgError::EmptyInput)?;
        for (k, &x) in cells.iter().enumerate().skip(1) {
            if better(x, best_val) {
                best = k;
                best_val = x;
            }
        }
        Ok(best)
    }

    /// Smallest cell value.
    pub fn min(&self) -> Result<T, LinalgError> {
        let k = self.scan(|x, best| x < best)?;
        Ok(self.as_slice()[k])
    }

    /// Largest cell value.
    pub fn max(&self) -> Result<T, LinalgError> {
        let k = self.scan(|x, best| x > best)?;
        Ok(self.as_slice()[k])
    }

    /// `(row, col)` of the smallest value; the first one in row-major order
    /// on ties.
    ///
    /// ```
    /// use microla::Matrix;
    /// let mut buf = [3.0_f64, 1.0, 2.0, 1.0];
    /// let m = Matrix::new(2, 2, &mut buf).unwrap();
    /// assert_eq!(m.min_idx().unwrap(), (0, 1));
    /// ```
    pub fn min_idx(&self) -> Result<(usize, usize), LinalgError> {
        let k = self.scan(|x, best| x < best)?;
        Ok((k / self.cols, k % self.cols))
    }

    /// `(row, col)` of the largest value; the first one in row-major order
    /// on ties.
    pub fn max_idx(&self) -> Result<(usize, usize), LinalgError> {
        let k = self.scan(|x, best| x > best)?;
        Ok((k / self.cols, k % self.cols))
    }
}

// ── Predicates ──────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<'_, T> {
    /// Same shape and identical cells.
    pub fn is_equal(&self, other: &Matrix<'_, T>) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }

    /// True if no cell is negative.
    pub fn is_nonnegative(&self) -> bool {
        self.as_slice().iter().all(|&x| x >= T::zero())
    }
}

impl<T: FloatScalar> PartialEq<Matrix<'_, T>> for Matrix<'_, T> {
    fn eq(&self, other: &Matrix<'_, T>) -> bool {
        self.is_equal(other)
    }
}
