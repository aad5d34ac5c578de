use crate::error::{check, LinalgError};
use crate::matrix::{Init, Matrix};
use crate::traits::{FloatScalar, MatrixMut};
use crate::vector::Vector;

/// Default cap on the number of Jacobi rotations.
pub const EIGEN_MAX_ITER: usize = 500;

/// Largest order [`Matrix::eigen`] handles with its stack workspace.
///
/// Use [`Matrix::eigen_in`] with a caller-supplied workspace beyond this.
pub const MAX_EIGEN_ORDER: usize = 8;

/// Convergence settings for the Jacobi eigen solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenConfig<T> {
    /// Maximum number of plane rotations before giving up.
    pub max_iter: usize,
    /// Relative threshold: iteration stops once every off-diagonal element
    /// is at most `tolerance * ‖A‖_F`.
    pub tolerance: T,
}

impl<T: FloatScalar> Default for EigenConfig<T> {
    fn default() -> Self {
        Self {
            max_iter: EIGEN_MAX_ITER,
            tolerance: T::epsilon(),
        }
    }
}

/// Apply the plane rotation in `(p, q)` that zeroes `a[p][q]`:
/// `A ← Jᵀ A J` and `V ← V J`.
///
/// `a` is kept exactly symmetric; both triangles are written.
fn rotate<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    p: usize,
    q: usize,
) {
    let n = a.nrows();
    let apq = *a.get_ref(p, q);
    let app = *a.get_ref(p, p);
    let aqq = *a.get_ref(q, q);

    // t = tan(phi), the smaller root of t² + 2θt - 1 = 0
    let theta = (aqq - app) / (T::two() * apq);
    let t = if theta.abs() > T::one() / T::epsilon() {
        T::one() / (T::two() * theta)
    } else {
        theta.signum() / (theta.abs() + (theta * theta + T::one()).sqrt())
    };
    let c = T::one() / (t * t + T::one()).sqrt();
    let s = t * c;

    *a.get_mut(p, p) = app - t * apq;
    *a.get_mut(q, q) = aqq + t * apq;
    *a.get_mut(p, q) = T::zero();
    *a.get_mut(q, p) = T::zero();

    for r in 0..n {
        if r == p || r == q {
            continue;
        }
        let arp = *a.get_ref(r, p);
        let arq = *a.get_ref(r, q);
        let new_rp = c * arp - s * arq;
        let new_rq = s * arp + c * arq;
        *a.get_mut(r, p) = new_rp;
        *a.get_mut(p, r) = new_rp;
        *a.get_mut(r, q) = new_rq;
        *a.get_mut(q, r) = new_rq;
    }

    for r in 0..v.nrows() {
        let vrp = *v.get_ref(r, p);
        let vrq = *v.get_ref(r, q);
        *v.get_mut(r, p) = c * vrp - s * vrq;
        *v.get_mut(r, q) = s * vrp + c * vrq;
    }
}

/// Classical Jacobi diagonalization of a symmetric matrix, in place.
///
/// Repeatedly zeroes the largest off-diagonal element of `a` with a plane
/// rotation, accumulating the rotations into `v` (which should start as the
/// identity). On success `a` is diagonal to within `config.tolerance` and the
/// columns of `v` are the eigenvectors; returns the number of rotations.
///
/// Returns `ConvergenceFailure` if more than `config.max_iter` rotations
/// would be needed.
pub fn jacobi_eigen<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    v: &mut impl MatrixMut<T>,
    config: &EigenConfig<T>,
) -> Result<usize, LinalgError> {
    let n = a.nrows();
    check!(
        n == a.ncols() && v.nrows() == n && v.ncols() == n,
        LinalgError::ShapeMismatch
    );

    let mut frob = T::zero();
    for i in 0..n {
        for j in 0..n {
            let x = *a.get_ref(i, j);
            frob = frob + x * x;
        }
    }
    let threshold = config.tolerance * frob.sqrt();

    let mut rotations = 0;
    loop {
        let (mut p, mut q) = (0, 0);
        let mut largest = T::zero();
        for i in 0..n {
            for j in (i + 1)..n {
                let x = a.get_ref(i, j).abs();
                if x > largest {
                    largest = x;
                    p = i;
                    q = j;
                }
            }
        }

        if largest <= threshold {
            log::trace!("jacobi: {}x{} converged after {} rotations", n, n, rotations);
            return Ok(rotations);
        }
        if rotations >= config.max_iter {
            log::warn!(
                "jacobi: no convergence after {} rotations (off-diagonal {:?})",
                rotations,
                largest
            );
            return Err(LinalgError::ConvergenceFailure);
        }

        rotate(a, v, p, q);
        rotations += 1;
    }
}

/// Stable sort of eigenpairs by eigenvalue magnitude, descending. Equal
/// magnitudes keep their diagonal order. Eigenvector columns move with
/// their values.
fn sort_descending<T: FloatScalar>(values: &mut Vector<'_, T>, vectors: &mut Matrix<'_, T>) {
    let n = values.len();
    for i in 1..n {
        let mut k = i;
        while k > 0 && values[k - 1].abs() < values[k].abs() {
            values.as_mut_slice().swap(k - 1, k);
            for r in 0..vectors.nrows() {
                let tmp = vectors[(r, k - 1)];
                vectors[(r, k - 1)] = vectors[(r, k)];
                vectors[(r, k)] = tmp;
            }
            k -= 1;
        }
    }
}

/// Eigen-decomposition of symmetric matrices.
impl<T: FloatScalar> Matrix<'_, T> {
    /// Eigenvalues and eigenvectors of a symmetric matrix with default
    /// settings.
    ///
    /// Only the upper triangle is read. `values` receives the eigenvalues
    /// ordered by magnitude, largest first, and the columns of `vectors` the
    /// matching unit eigenvectors. The working copy lives on the stack, so
    /// the order is limited to [`MAX_EIGEN_ORDER`].
    ///
    /// ```
    /// use microla::{Matrix, Vector};
    ///
    /// let mut a = [2.0_f64, -1.0, -1.0, 2.0];
    /// let (mut vals, mut vecs) = ([0.0_f64; 2], [0.0_f64; 4]);
    /// let a = Matrix::new(2, 2, &mut a).unwrap();
    /// let mut values = Vector::new(&mut vals);
    /// let mut vectors = Matrix::new(2, 2, &mut vecs).unwrap();
    /// a.eigen(&mut values, &mut vectors).unwrap();
    /// assert!((values[0] - 3.0).abs() < 1e-10);
    /// assert!((values[1] - 1.0).abs() < 1e-10);
    /// ```
    pub fn eigen(
        &self,
        values: &mut Vector<'_, T>,
        vectors: &mut Matrix<'_, T>,
    ) -> Result<(), LinalgError> {
        self.eigen_with(&EigenConfig::default(), values, vectors)
    }

    /// [`eigen`](Self::eigen) with explicit convergence settings.
    pub fn eigen_with(
        &self,
        config: &EigenConfig<T>,
        values: &mut Vector<'_, T>,
        vectors: &mut Matrix<'_, T>,
    ) -> Result<(), LinalgError> {
        check!(self.is_square(), LinalgError::ShapeMismatch);
        let n = self.nrows();
        if n > MAX_EIGEN_ORDER {
            return Err(LinalgError::ShapeMismatch);
        }
        let mut buf = [T::zero(); MAX_EIGEN_ORDER * MAX_EIGEN_ORDER];
        let mut work = Matrix::new(n, n, &mut buf)?;
        self.eigen_in(&mut work, config, values, vectors)
    }

    /// [`eigen_with`](Self::eigen_with) using `work` (same shape as `self`)
    /// as the working copy, with no order limit.
    ///
    /// `work` is overwritten; on success it holds the diagonalized matrix.
    pub fn eigen_in(
        &self,
        work: &mut Matrix<'_, T>,
        config: &EigenConfig<T>,
        values: &mut Vector<'_, T>,
        vectors: &mut Matrix<'_, T>,
    ) -> Result<(), LinalgError> {
        let n = self.nrows();
        check!(
            self.is_square()
                && work.shape() == (n, n)
                && vectors.shape() == (n, n)
                && values.len() == n,
            LinalgError::ShapeMismatch
        );

        // Symmetric working copy from the upper triangle.
        for i in 0..n {
            for j in i..n {
                let x = self[(i, j)];
                work[(i, j)] = x;
                work[(j, i)] = x;
            }
        }
        vectors.init(Init::Identity);

        jacobi_eigen(work, vectors, config)?;

        for (i, x) in values.iter_mut().enumerate() {
            *x = work[(i, i)];
        }
        sort_descending(values, vectors);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    /// Check `A v = λ v` for every eigenpair and `VᵀV = I`.
    fn assert_eigenpairs(a: &Matrix<'_, f64>, values: &Vector<'_, f64>, q: &Matrix<'_, f64>, tol: f64) {
        let n = a.nrows();
        for col in 0..n {
            let lambda = values[col];
            for row in 0..n {
                let mut av = 0.0;
                for k in 0..n {
                    av += a[(row, k)] * q[(k, col)];
                }
                assert_near(av, lambda * q[(row, col)], tol, &format!("Av=λv [({},{})]", row, col));
            }
        }
        for i in 0..n {
            for j in 0..n {
                let mut dot = 0.0;
                for k in 0..n {
                    dot += q[(k, i)] * q[(k, j)];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(dot, expected, tol, &format!("QtQ[({},{})]", i, j));
            }
        }
    }

    #[test]
    fn diagonal_matrix() {
        let mut a = [3.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0];
        let (mut vals, mut vecs) = ([0.0; 3], [0.0; 9]);
        let a = Matrix::new(3, 3, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(3, 3, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();

        assert_eq!(values.as_slice(), &[3.0, 2.0, 1.0]);
        // identity columns, permuted to follow the sort: e0, e2, e1
        assert_eq!(q.as_slice(), &[1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn known_2x2() {
        let mut a = [2.0, -1.0, -1.0, 2.0];
        let (mut vals, mut vecs) = ([0.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_near(values[0], 3.0, TOL, "λ[0]");
        assert_near(values[1], 1.0, TOL, "λ[1]");
        assert_eigenpairs(&a, &values, &q, TOL);
    }

    #[test]
    fn negative_eigenvalues() {
        let mut a = [1.0, 3.0, 3.0, 1.0];
        let (mut vals, mut vecs) = ([0.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_near(values[0], 4.0, TOL, "λ[0]");
        assert_near(values[1], -2.0, TOL, "λ[1]");
    }

    #[test]
    fn mixed_signs_order_by_magnitude() {
        let mut a = [-5.0, 0.0, 0.0, 1.0];
        let (mut vals, mut vecs) = ([0.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_eq!(values.as_slice(), &[-5.0, 1.0]);
        assert_eq!(q.as_slice(), &[1.0, 0.0, 0.0, 1.0]);

        // 1 and -3 swap; equal magnitudes 3 and -3 keep diagonal order
        let mut b = [1.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 0.0, 3.0];
        let (mut vals, mut vecs) = ([0.0; 3], [0.0; 9]);
        let b = Matrix::new(3, 3, &mut b).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(3, 3, &mut vecs).unwrap();
        b.eigen(&mut values, &mut q).unwrap();
        assert_eq!(values.as_slice(), &[-3.0, 3.0, 1.0]);
        // columns e1, e2, e0
        assert_eq!(q.as_slice(), &[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn known_3x3_eigenpairs() {
        let mut a = [2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0];
        let (mut vals, mut vecs) = ([0.0; 3], [0.0; 9]);
        let a = Matrix::new(3, 3, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(3, 3, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        // eigenvalues 4, 2, 1
        assert_near(values[0], 4.0, TOL, "λ[0]");
        assert_near(values[1], 2.0, TOL, "λ[1]");
        assert_near(values[2], 1.0, TOL, "λ[2]");
        assert_eigenpairs(&a, &values, &q, TOL);
    }

    #[test]
    fn covariance_like_5x5() {
        let mut a = [
            5.0, 1.0, 0.5, 0.25, 0.125, //
            1.0, 4.0, 1.0, 0.5, 0.25, //
            0.5, 1.0, 3.0, 1.0, 0.5, //
            0.25, 0.5, 1.0, 2.0, 1.0, //
            0.125, 0.25, 0.5, 1.0, 1.0,
        ];
        let (mut vals, mut vecs) = ([0.0; 5], [0.0; 25]);
        let a = Matrix::new(5, 5, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(5, 5, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_eigenpairs(&a, &values, &q, 1e-9);

        for i in 0..4 {
            assert!(values[i].abs() >= values[i + 1].abs(), "not descending at {}", i);
        }
        let eig_sum: f64 = values.iter().sum();
        assert_near(eig_sum, 15.0, TOL, "trace");
    }

    #[test]
    fn repeated_eigenvalues_keep_order() {
        let mut a = [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0];
        let (mut vals, mut vecs) = ([0.0; 3], [0.0; 9]);
        let a = Matrix::new(3, 3, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(3, 3, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_eq!(values.as_slice(), &[2.0, 2.0, 2.0]);
        assert_eq!(q.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn reads_upper_triangle_only() {
        let mut a = [4.0, 1.0, 99.0, 3.0];
        let (mut vals, mut vecs) = ([0.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        // [[4, 1], [1, 3]]: (7 ± √5) / 2
        assert_near(values[0], (7.0 + 5.0_f64.sqrt()) / 2.0, TOL, "λ[0]");
        assert_near(values[1], (7.0 - 5.0_f64.sqrt()) / 2.0, TOL, "λ[1]");
    }

    #[test]
    fn convergence_failure() {
        let mut a = [2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0];
        let (mut vals, mut vecs) = ([0.0; 3], [0.0; 9]);
        let a = Matrix::new(3, 3, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(3, 3, &mut vecs).unwrap();
        let config = EigenConfig {
            max_iter: 1,
            ..EigenConfig::default()
        };
        assert_eq!(
            a.eigen_with(&config, &mut values, &mut q).unwrap_err(),
            LinalgError::ConvergenceFailure
        );
    }

    #[test]
    fn diagonal_needs_no_rotations() {
        let mut a = [5.0, 0.0, 0.0, -1.0];
        let mut v = [0.0; 4];
        let mut a = Matrix::new(2, 2, &mut a).unwrap();
        let mut v = Matrix::with_init(2, 2, &mut v, Init::Identity).unwrap();
        let config = EigenConfig {
            max_iter: 0,
            ..EigenConfig::default()
        };
        assert_eq!(jacobi_eigen(&mut a, &mut v, &config).unwrap(), 0);
    }

    #[test]
    fn zero_matrix() {
        let mut a = [0.0; 4];
        let (mut vals, mut vecs) = ([9.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert_eq!(values.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn caller_workspace_beyond_stack_limit() {
        const N: usize = MAX_EIGEN_ORDER + 2;
        let mut a = [0.0; N * N];
        let (mut w, mut vals, mut vecs) = ([0.0; N * N], [0.0; N], [0.0; N * N]);
        let mut a = Matrix::new(N, N, &mut a).unwrap();
        // tridiagonal [-1, 2, -1]
        a.init_with(|i, j| {
            if i == j {
                2.0
            } else if i + 1 == j || j + 1 == i {
                -1.0
            } else {
                0.0
            }
        });
        let mut work = Matrix::new(N, N, &mut w).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(N, N, &mut vecs).unwrap();

        assert_eq!(
            a.eigen(&mut values, &mut q).unwrap_err(),
            LinalgError::ShapeMismatch
        );

        a.eigen_in(&mut work, &EigenConfig::default(), &mut values, &mut q)
            .unwrap();
        assert_eigenpairs(&a, &values, &q, 1e-9);
        // λ_k = 2 - 2 cos(kπ/(N+1)), largest first
        let pi = core::f64::consts::PI;
        for k in 0..N {
            let expected = 2.0 - 2.0 * ((N - k) as f64 * pi / (N + 1) as f64).cos();
            assert_near(values[k], expected, 1e-9, &format!("λ[{}]", k));
        }
    }

    #[cfg(feature = "bounds-checks")]
    #[test]
    fn wide_input_rejected_before_workspace() {
        let mut a = [0.0; 8 * 20];
        let (mut vals, mut vecs) = ([0.0; 8], [0.0; 64]);
        let a = Matrix::new(8, 20, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(8, 8, &mut vecs).unwrap();
        assert_eq!(
            a.eigen_with(&EigenConfig::default(), &mut values, &mut q)
                .unwrap_err(),
            LinalgError::ShapeMismatch
        );
        // outputs untouched
        assert!(q.as_slice().iter().all(|&x| x == 0.0));
    }

    #[cfg(feature = "bounds-checks")]
    #[test]
    fn shape_checks() {
        let mut a = [0.0; 6];
        let (mut vals, mut vecs) = ([0.0; 2], [0.0; 4]);
        let a = Matrix::new(2, 3, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        assert_eq!(
            a.eigen(&mut values, &mut q).unwrap_err(),
            LinalgError::ShapeMismatch
        );

        let mut b = [1.0, 0.0, 0.0, 1.0];
        let b = Matrix::new(2, 2, &mut b).unwrap();
        let mut short = [0.0; 1];
        let mut values = Vector::new(&mut short);
        assert_eq!(
            b.eigen(&mut values, &mut q).unwrap_err(),
            LinalgError::ShapeMismatch
        );
    }

    #[test]
    fn f32_support() {
        let mut a = [2.0_f32, -1.0, -1.0, 2.0];
        let (mut vals, mut vecs) = ([0.0_f32; 2], [0.0_f32; 4]);
        let a = Matrix::new(2, 2, &mut a).unwrap();
        let mut values = Vector::new(&mut vals);
        let mut q = Matrix::new(2, 2, &mut vecs).unwrap();
        a.eigen(&mut values, &mut q).unwrap();
        assert!((values[0] - 3.0).abs() < 1e-5);
        assert!((values[1] - 1.0).abs() < 1e-5);
    }
}
