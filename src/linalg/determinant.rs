use crate::error::{check, LinalgError};
use crate::matrix::Matrix;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Largest order the cofactor recursion accepts.
///
/// The remaining rows and columns are tracked as `u32` bit sets.
pub const MAX_DETERMINANT_ORDER: usize = u32::BITS as usize;

/// Bit set with the low `n` bits set.
#[inline]
fn full_set(n: usize) -> u32 {
    if n >= MAX_DETERMINANT_ORDER {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

/// Lowest index in a non-empty bit set.
#[inline]
fn first(set: u32) -> usize {
    set.trailing_zeros() as usize
}

/// Determinant of the submatrix of `a` made of the rows in `rows` and the
/// columns in `cols` (both in ascending order, equal cardinality).
///
/// Expands along the first remaining row. Zero entries contribute nothing
/// and are skipped.
fn expand<T: FloatScalar>(a: &impl MatrixRef<T>, rows: u32, cols: u32) -> T {
    match rows.count_ones() {
        0 => T::one(),
        1 => *a.get_ref(first(rows), first(cols)),
        2 => {
            let (r0, r1) = (first(rows), first(rows & (rows - 1)));
            let (c0, c1) = (first(cols), first(cols & (cols - 1)));
            *a.get_ref(r0, c0) * *a.get_ref(r1, c1) - *a.get_ref(r0, c1) * *a.get_ref(r1, c0)
        }
        _ => {
            let r = first(rows);
            let below = rows & !(1 << r);
            let mut det = T::zero();
            let mut sign = T::one();
            let mut remaining = cols;
            while remaining != 0 {
                let c = first(remaining);
                remaining &= remaining - 1;
                let x = *a.get_ref(r, c);
                if x != T::zero() {
                    det = det + sign * x * expand(a, below, cols & !(1 << c));
                }
                sign = -sign;
            }
            det
        }
    }
}

/// Order of a square matrix, or `ShapeMismatch`.
fn order<T>(a: &impl MatrixRef<T>) -> Result<usize, LinalgError> {
    let n = a.nrows();
    check!(n == a.ncols(), LinalgError::ShapeMismatch);
    if n > MAX_DETERMINANT_ORDER {
        return Err(LinalgError::ShapeMismatch);
    }
    Ok(n)
}

/// Determinant by recursive cofactor expansion along the first row.
///
/// `1×1` is the sole element and `2×2` is `ad - bc`. An empty matrix is
/// rejected with `EmptyInput`.
pub fn determinant<T: FloatScalar>(a: &impl MatrixRef<T>) -> Result<T, LinalgError> {
    let n = order(a)?;
    if n == 0 {
        return Err(LinalgError::EmptyInput);
    }
    let all = full_set(n);
    Ok(expand(a, all, all))
}

/// Determinant of `a` with row `i` and column `j` removed.
///
/// The minor of a `1×1` matrix is the empty determinant, 1.
pub fn minor<T: FloatScalar>(a: &impl MatrixRef<T>, i: usize, j: usize) -> Result<T, LinalgError> {
    let n = order(a)?;
    check!(i < n && j < n, LinalgError::ShapeMismatch);
    let all = full_set(n);
    Ok(expand(a, all & !(1 << i), all & !(1 << j)))
}

/// `(-1)^(i+j)` times the `(i, j)` minor.
pub fn cofactor<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    i: usize,
    j: usize,
) -> Result<T, LinalgError> {
    let m = minor(a, i, j)?;
    Ok(if (i + j) % 2 == 0 { m } else { -m })
}

/// Adjugate (transposed cofactor matrix) of `a`, written into `out`.
pub fn adjugate<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    out: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let n = order(a)?;
    check!(
        out.nrows() == n && out.ncols() == n,
        LinalgError::ShapeMismatch
    );
    for i in 0..n {
        for j in 0..n {
            *out.get_mut(i, j) = cofactor(a, j, i)?;
        }
    }
    Ok(())
}

/// Inverse by the adjugate method: `adj(a) / det(a)`.
///
/// Returns `Singular` when the determinant is exactly zero; `out` is left
/// untouched in that case.
pub fn inverse<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    out: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let det = determinant(a)?;
    if det == T::zero() {
        log::debug!("inverse rejected: {}x{} matrix has zero determinant", a.nrows(), a.ncols());
        return Err(LinalgError::Singular);
    }
    adjugate(a, out)?;

    let inv_det = T::one() / det;
    let n = a.nrows();
    for i in 0..n {
        for j in 0..n {
            let x = out.get_mut(i, j);
            *x = *x * inv_det;
        }
    }
    Ok(())
}

/// Convenience methods for the cofactor-based algorithms.
impl<T: FloatScalar> Matrix<'_, T> {
    /// Determinant by recursive cofactor expansion.
    ///
    /// ```
    /// use microla::Matrix;
    /// let mut buf = [1.0_f64, 2.0, 3.0, 4.0];
    /// let m = Matrix::new(2, 2, &mut buf).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<T, LinalgError> {
        determinant(self)
    }

    /// Determinant with row `i` and column `j` removed.
    pub fn minor(&self, i: usize, j: usize) -> Result<T, LinalgError> {
        minor(self, i, j)
    }

    /// Signed minor `(-1)^(i+j) * minor(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T, LinalgError> {
        cofactor(self, i, j)
    }

    /// Transposed cofactor matrix, written into `out`.
    pub fn adjugate(&self, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        adjugate(self, out)
    }

    /// Inverse into `out` by the adjugate method.
    ///
    /// ```
    /// use microla::Matrix;
    /// let (mut a, mut b) = ([2.0_f64, 0.0, 0.0, 2.0], [0.0_f64; 4]);
    /// let a = Matrix::new(2, 2, &mut a).unwrap();
    /// let mut inv = Matrix::new(2, 2, &mut b).unwrap();
    /// a.inverse(&mut inv).unwrap();
    /// assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.5]);
    /// ```
    pub fn inverse(&self, out: &mut Matrix<'_, T>) -> Result<(), LinalgError> {
        inverse(self, out)
    }
}
