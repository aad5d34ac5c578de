mod ops;
mod util;

use core::ops::{Index, IndexMut};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{check, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Real};

/// Matrix view with `rows × cols` shape over a caller-owned buffer.
///
/// Storage is row-major: cell `(i, j)` lives at `data[i * cols + j]`.
/// The buffer may be longer than `rows * cols`; the excess is never read.
///
/// # Examples
///
/// ```
/// use microla::{Init, Matrix};
///
/// let mut buf = [0.0_f64; 9];
/// let m = Matrix::with_init(3, 3, &mut buf, Init::Identity).unwrap();
/// assert_eq!(m[(0, 0)], 1.0);
/// assert_eq!(m[(0, 1)], 0.0);
/// assert_eq!(m.nrows(), 3);
/// assert_eq!(m.ncols(), 3);
/// ```
#[derive(Debug)]
pub struct Matrix<'a, T = Real> {
    rows: usize,
    cols: usize,
    data: &'a mut [T],
}

/// Initialization strategy, applied once per cell in row-major order.
///
/// Use [`Matrix::init_with`] for a custom `(row, col) -> value` generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Every cell is zero.
    #[default]
    Zero,
    /// One on the diagonal, zero elsewhere.
    Identity,
    /// Pseudo-random values in `[-1, 1]`, reproducible for a given seed.
    Random { seed: u64 },
}

impl<'a, T> Matrix<'a, T> {
    /// Create a view over the first `rows * cols` slots of `data`, leaving
    /// their contents as they are.
    ///
    /// Returns `ShapeMismatch` if the buffer is too short.
    pub fn new(rows: usize, cols: usize, data: &'a mut [T]) -> Result<Self, LinalgError> {
        let cells = rows.checked_mul(cols).ok_or(LinalgError::ShapeMismatch)?;
        if cells > data.len() {
            return Err(LinalgError::ShapeMismatch);
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// The `rows * cols` cells in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.rows * self.cols]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.rows * self.cols]
    }
}

// ── Initialization ──────────────────────────────────────────────────

impl<'a, T: FloatScalar> Matrix<'a, T> {
    /// Create a view and fill it with the given strategy.
    pub fn with_init(
        rows: usize,
        cols: usize,
        data: &'a mut [T],
        init: Init,
    ) -> Result<Self, LinalgError> {
        let mut m = Self::new(rows, cols, data)?;
        m.init(init);
        Ok(m)
    }

    /// Overwrite every cell with the given strategy.
    pub fn init(&mut self, init: Init) {
        match init {
            Init::Zero => self.init_with(|_, _| T::zero()),
            Init::Identity => self.init_with(|i, j| if i == j { T::one() } else { T::zero() }),
            Init::Random { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                self.init_with(|_, _| T::from_f64(rng.gen_range(-1.0..=1.0)));
            }
        }
    }

    /// Overwrite every cell with `f(row, col)`, visiting cells in row-major
    /// order exactly once.
    ///
    /// ```
    /// use microla::Matrix;
    /// let mut buf = [0.0_f64; 6];
    /// let mut m = Matrix::new(2, 3, &mut buf).unwrap();
    /// m.init_with(|i, j| (i * 3 + j) as f64);
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn init_with(&mut self, mut f: impl FnMut(usize, usize) -> T) {
        let cols = self.cols;
        for (k, x) in self.as_mut_slice().iter_mut().enumerate() {
            *x = f(k / cols, k % cols);
        }
    }

    /// Copy `rows * cols` values, row-major, from the front of `src`.
    pub fn copy_from(&mut self, src: &[T]) -> Result<(), LinalgError> {
        let cells = self.rows * self.cols;
        check!(src.len() >= cells, LinalgError::ShapeMismatch);
        self.as_mut_slice().copy_from_slice(&src[..cells]);
        Ok(())
    }
}

impl<T> MatrixRef<T> for Matrix<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get_ref(&self, row: usize, col: usize) -> &T {
        &self[(row, col)]
    }
}

impl<T> MatrixMut<T> for Matrix<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}

// Index by (row, col) tuple
impl<T> Index<(usize, usize)> for Matrix<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        &mut self.data[row * self.cols + col]
    }
}
