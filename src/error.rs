/// Errors reported by kernel operations.
///
/// Every fallible operation returns `Result<_, LinalgError>`. Scalar
/// queries that have no error channel (`norm`, `distance`, ...) return NaN
/// instead.
///
/// ```
/// use microla::{LinalgError, Matrix};
///
/// let mut a = [1.0_f64, 2.0, 2.0, 4.0];
/// let mut b = [0.0_f64; 4];
/// let singular = Matrix::new(2, 2, &mut a).unwrap();
/// let mut inv = Matrix::new(2, 2, &mut b).unwrap();
/// assert_eq!(singular.inverse(&mut inv).unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinalgError {
    /// Length or shape disagreement, non-square input, or an index out of range.
    ShapeMismatch,
    /// Explicit division by a scalar that is exactly zero.
    DivisionByZero,
    /// Matrix has a zero determinant.
    Singular,
    /// Iterative algorithm did not converge within the iteration budget.
    ConvergenceFailure,
    /// Reduction over zero elements.
    EmptyInput,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::ShapeMismatch => write!(f, "shape mismatch"),
            LinalgError::DivisionByZero => write!(f, "division by zero"),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::ConvergenceFailure => write!(f, "iterative algorithm did not converge"),
            LinalgError::EmptyInput => write!(f, "empty input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

/// Return `Err(err)` from the enclosing function when `cond` is false.
///
/// Compiled to nothing when the `bounds-checks` feature is disabled, in
/// which case the condition becomes a caller precondition.
macro_rules! check {
    ($cond:expr, $err:expr) => {
        if cfg!(feature = "bounds-checks") && !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use check;
