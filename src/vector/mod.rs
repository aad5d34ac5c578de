mod norm;
mod ops;

use core::ops::{Index, IndexMut};

use crate::error::LinalgError;
use crate::traits::Real;

/// A vector view: a logical length over a buffer the caller owns.
///
/// The buffer's length is the view's capacity. The logical length can shrink
/// (for example when [`get_subset`](Vector::get_subset) clamps its output) or
/// grow back, but never beyond the capacity.
///
/// # Examples
///
/// ```
/// use microla::Vector;
///
/// let mut buf = [1.0_f64, 2.0, 3.0, 0.0];
/// let v = Vector::with_len(&mut buf, 3).unwrap();
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v[2], 3.0);
/// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug)]
pub struct Vector<'a, T = Real> {
    len: usize,
    data: &'a mut [T],
}

impl<'a, T> Vector<'a, T> {
    /// Create a view spanning the whole buffer.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            len: data.len(),
            data,
        }
    }

    /// Create a view of the first `len` slots of `data`.
    ///
    /// Returns `ShapeMismatch` if `len` exceeds the buffer.
    pub fn with_len(data: &'a mut [T], len: usize) -> Result<Self, LinalgError> {
        if len > data.len() {
            return Err(LinalgError::ShapeMismatch);
        }
        Ok(Self { len, data })
    }

    /// Logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the logical length is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Change the logical length. Returns `ShapeMismatch` beyond the capacity.
    pub fn set_len(&mut self, len: usize) -> Result<(), LinalgError> {
        if len > self.data.len() {
            return Err(LinalgError::ShapeMismatch);
        }
        self.len = len;
        Ok(())
    }

    /// The first `len` elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// The first `len` elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Iterate over the first `len` elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably iterate over the first `len` elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Index<usize> for Vector<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for Vector<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}
