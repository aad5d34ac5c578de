use crate::error::{check, LinalgError};
use crate::traits::FloatScalar;
use crate::vector::Vector;

// ── Initialization ──────────────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// Set every element to zero.
    pub fn zero(&mut self) {
        for x in self.iter_mut() {
            *x = T::zero();
        }
    }

    /// Copy exactly `self.len()` values from the front of `src`.
    ///
    /// `src` may be longer than the vector; the excess is ignored.
    ///
    /// ```
    /// use microla::Vector;
    /// let mut buf = [0.0_f64; 3];
    /// let mut v = Vector::new(&mut buf);
    /// v.copy_from(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn copy_from(&mut self, src: &[T]) -> Result<(), LinalgError> {
        check!(src.len() >= self.len, LinalgError::ShapeMismatch);
        let n = self.len;
        self.data[..n].copy_from_slice(&src[..n]);
        Ok(())
    }

    /// Copy the run `[offset, offset + len)` into `out`.
    ///
    /// A request running past the end is truncated to the available
    /// elements. `out` must hold the (truncated) run; its length is then
    /// clamped down to the number of copied elements, never increased.
    ///
    /// ```
    /// use microla::Vector;
    /// let mut src = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    /// let mut dst = [0.0_f64; 8];
    /// let v = Vector::new(&mut src);
    /// let mut sub = Vector::new(&mut dst);
    /// v.get_subset(3, 10, &mut sub).unwrap();
    /// assert_eq!(sub.as_slice(), &[4.0, 5.0]);
    /// ```
    pub fn get_subset(
        &self,
        offset: usize,
        len: usize,
        out: &mut Vector<'_, T>,
    ) -> Result<(), LinalgError> {
        check!(offset < self.len, LinalgError::ShapeMismatch);
        let len = len.min(self.len.saturating_sub(offset));
        check!(out.len >= len, LinalgError::ShapeMismatch);

        if out.len > len {
            out.len = len;
        }
        out.data[..len].copy_from_slice(&self.data[offset..offset + len]);
        Ok(())
    }
}

// ── Element-wise arithmetic ─────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// `out = self + rhs`. All three lengths must agree.
    pub fn add(&self, rhs: &Vector<'_, T>, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.len == rhs.len && self.len == out.len,
            LinalgError::ShapeMismatch
        );
        for ((o, &a), &b) in out.iter_mut().zip(self.iter()).zip(rhs.iter()) {
            *o = a + b;
        }
        Ok(())
    }

    /// `out = self - rhs`. All three lengths must agree.
    pub fn sub(&self, rhs: &Vector<'_, T>, out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        check!(
            self.len == rhs.len && self.len == out.len,
            LinalgError::ShapeMismatch
        );
        for ((o, &a), &b) in out.iter_mut().zip(self.iter()).zip(rhs.iter()) {
            *o = a - b;
        }
        Ok(())
    }

    /// Negate every element in place.
    pub fn negate(&mut self) {
        for x in self.iter_mut() {
            *x = -*x;
        }
    }

    /// Add `s` to every element in place.
    pub fn scalar_add(&mut self, s: T) {
        for x in self.iter_mut() {
            *x = *x + s;
        }
    }

    /// Multiply every element by `s` in place.
    pub fn scalar_mul(&mut self, s: T) {
        for x in self.iter_mut() {
            *x = *x * s;
        }
    }

    /// Divide every element by `s` in place.
    ///
    /// Returns `DivisionByZero` if `s` is exactly zero; the vector is left
    /// untouched in that case.
    pub fn scalar_div(&mut self, s: T) -> Result<(), LinalgError> {
        if s == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        for x in self.iter_mut() {
            *x = *x / s;
        }
        Ok(())
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut start = 0;
        let mut end = self.len - 1;
        while start < end {
            self.data.swap(start, end);
            start += 1;
            end -= 1;
        }
    }
}

// ── N-ary reductions ────────────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// Element-wise sum of `inputs` into `out`.
    ///
    /// All inputs must share one length. `out` is resized to that length
    /// (within its capacity), zeroed, and accumulated into.
    ///
    /// ```
    /// use microla::Vector;
    /// let (mut a, mut b, mut o) = ([1.0_f64, 2.0], [3.0_f64, 4.0], [0.0_f64; 2]);
    /// let a = Vector::new(&mut a);
    /// let b = Vector::new(&mut b);
    /// let mut out = Vector::new(&mut o);
    /// Vector::sum(&[&a, &b], &mut out).unwrap();
    /// assert_eq!(out.as_slice(), &[4.0, 6.0]);
    /// ```
    pub fn sum(inputs: &[&Vector<'_, T>], out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        let first = inputs.first().ok_or(LinalgError::EmptyInput)?;
        let n = first.len;
        check!(
            inputs.iter().all(|v| v.len == n),
            LinalgError::ShapeMismatch
        );

        out.set_len(n)?;
        out.zero();
        for v in inputs {
            for (o, &x) in out.iter_mut().zip(v.iter()) {
                *o = *o + x;
            }
        }
        Ok(())
    }

    /// Element-wise mean of `inputs` into `out`.
    ///
    /// `out` must already have the inputs' length. The division by the input
    /// count is a real division in either precision.
    pub fn mean(inputs: &[&Vector<'_, T>], out: &mut Vector<'_, T>) -> Result<(), LinalgError> {
        let first = inputs.first().ok_or(LinalgError::EmptyInput)?;
        check!(out.len == first.len, LinalgError::ShapeMismatch);

        Self::sum(inputs, out)?;
        out.scalar_mul(T::one() / T::from_count(inputs.len()));
        Ok(())
    }

    /// Arithmetic mean of the elements. `EmptyInput` on a zero-length vector.
    pub fn arithmetic_mean(&self) -> Result<T, LinalgError> {
        if self.len == 0 {
            return Err(LinalgError::EmptyInput);
        }
        let total = self.iter().fold(T::zero(), |acc, &x| acc + x);
        Ok(total / T::from_count(self.len))
    }
}

// ── Predicates ──────────────────────────────────────────────────────

impl<T: FloatScalar> Vector<'_, T> {
    /// Same length and identical elements.
    pub fn is_equal(&self, other: &Vector<'_, T>) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }

    /// True if no element is negative.
    pub fn is_nonnegative(&self) -> bool {
        self.iter().all(|&x| x >= T::zero())
    }
}

impl<T: FloatScalar> PartialEq<Vector<'_, T>> for Vector<'_, T> {
    fn eq(&self, other: &Vector<'_, T>) -> bool {
        self.is_equal(other)
    }
}
