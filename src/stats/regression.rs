use crate::error::{check, LinalgError};
use crate::traits::FloatScalar;
use crate::vector::Vector;

use super::moments::mean;

/// Least-squares fit `y ≈ slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression<T> {
    pub slope: T,
    pub intercept: T,
    /// Pearson correlation coefficient in `[-1, 1]`. NaN when `y` is constant.
    pub correlation: T,
}

/// Fit a line through the points `(x[i], y[i])`.
///
/// `ShapeMismatch` if the lengths differ, `EmptyInput` on no points and
/// `DivisionByZero` when every `x` is the same.
///
/// ```
/// use microla::{stats, Vector};
/// let (mut x, mut y) = ([1.0_f64, 2.0, 3.0, 4.0], [3.0_f64, 5.0, 7.0, 9.0]);
/// let fit = stats::linear_regression(&Vector::new(&mut x), &Vector::new(&mut y)).unwrap();
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// ```
pub fn linear_regression<T: FloatScalar>(
    x: &Vector<'_, T>,
    y: &Vector<'_, T>,
) -> Result<LinearRegression<T>, LinalgError> {
    check!(x.len() == y.len(), LinalgError::ShapeMismatch);
    let (mx, my) = (mean(x)?, mean(y)?);

    let (mut sxx, mut syy, mut sxy) = (T::zero(), T::zero(), T::zero());
    for (&a, &b) in x.iter().zip(y.iter()) {
        let (dx, dy) = (a - mx, b - my);
        sxx = sxx + dx * dx;
        syy = syy + dy * dy;
        sxy = sxy + dx * dy;
    }
    if sxx == T::zero() {
        return Err(LinalgError::DivisionByZero);
    }

    let slope = sxy / sxx;
    Ok(LinearRegression {
        slope,
        intercept: my - slope * mx,
        correlation: sxy / (sxx * syy).sqrt(),
    })
}

/// Absolute error `|val - expected|`.
#[inline]
pub fn abs_err<T: FloatScalar>(val: T, expected: T) -> T {
    (val - expected).abs()
}

/// Relative error `|val - expected| / |expected|`.
pub fn rel_err<T: FloatScalar>(val: T, expected: T) -> Result<T, LinalgError> {
    if expected == T::zero() {
        return Err(LinalgError::DivisionByZero);
    }
    Ok(abs_err(val, expected) / expected.abs())
}
