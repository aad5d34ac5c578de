use crate::error::{check, LinalgError};
use crate::matrix::Matrix;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Arithmetic mean. `EmptyInput` on a zero-length vector.
pub fn mean<T: FloatScalar>(v: &Vector<'_, T>) -> Result<T, LinalgError> {
    v.arithmetic_mean()
}

/// Write `v - mean(v)` into `out`, which must have the same length.
pub fn demean<T: FloatScalar>(v: &Vector<'_, T>, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
    check!(out.len() == v.len(), LinalgError::ShapeMismatch);
    let m = mean(v)?;
    for (o, &x) in out.iter_mut().zip(v.iter()) {
        *o = x - m;
    }
    Ok(())
}

/// Sample variance, `Σ(x - x̄)² / (n - 1)`. Needs at least two elements.
pub fn variance<T: FloatScalar>(v: &Vector<'_, T>) -> Result<T, LinalgError> {
    covariance(v, v)
}

/// Sample standard deviation, the square root of [`variance`].
pub fn std_dev<T: FloatScalar>(v: &Vector<'_, T>) -> Result<T, LinalgError> {
    Ok(variance(v)?.sqrt())
}

/// Sample covariance of two equally long data sets.
///
/// `ShapeMismatch` if the lengths differ, `EmptyInput` below two samples.
pub fn covariance<T: FloatScalar>(v: &Vector<'_, T>, w: &Vector<'_, T>) -> Result<T, LinalgError> {
    check!(v.len() == w.len(), LinalgError::ShapeMismatch);
    let n = v.len();
    if n < 2 {
        return Err(LinalgError::EmptyInput);
    }
    let (mv, mw) = (mean(v)?, mean(w)?);
    let total = v
        .iter()
        .zip(w.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + (a - mv) * (b - mw));
    Ok(total / T::from_count(n - 1))
}

fn column_mean<T: FloatScalar>(m: &Matrix<'_, T>, j: usize) -> T {
    let mut total = T::zero();
    for i in 0..m.nrows() {
        total = total + m[(i, j)];
    }
    total / T::from_count(m.nrows())
}

/// Sample covariance matrix of the columns of `m`.
///
/// Each column is one data set and each row one observation. `out` must be
/// `cols × cols`; cell `(i, j)` receives the covariance of columns `i` and
/// `j`. Needs at least two rows.
///
/// ```
/// use microla::{stats, Matrix};
///
/// // two perfectly correlated columns
/// let mut data = [1.0_f64, 2.0, 2.0, 4.0, 3.0, 6.0];
/// let mut cov = [0.0_f64; 4];
/// let m = Matrix::new(3, 2, &mut data).unwrap();
/// let mut c = Matrix::new(2, 2, &mut cov).unwrap();
/// stats::covariance_matrix(&m, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[1.0, 2.0, 2.0, 4.0]);
/// ```
pub fn covariance_matrix<T: FloatScalar>(
    m: &Matrix<'_, T>,
    out: &mut Matrix<'_, T>,
) -> Result<(), LinalgError> {
    let (rows, cols) = m.shape();
    check!(out.shape() == (cols, cols), LinalgError::ShapeMismatch);
    if rows < 2 {
        return Err(LinalgError::EmptyInput);
    }
    let denom = T::from_count(rows - 1);
    for a in 0..cols {
        let ma = column_mean(m, a);
        for b in a..cols {
            let mb = column_mean(m, b);
            let mut total = T::zero();
            for i in 0..rows {
                total = total + (m[(i, a)] - ma) * (m[(i, b)] - mb);
            }
            let c = total / denom;
            out[(a, b)] = c;
            out[(b, a)] = c;
        }
    }
    Ok(())
}
