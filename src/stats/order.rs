use core::cmp::Ordering;

use crate::error::{check, LinalgError};
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Copy `v` into the front of `scratch` and sort it ascending.
fn sorted<'s, T: FloatScalar>(
    v: &Vector<'_, T>,
    scratch: &'s mut [T],
) -> Result<&'s [T], LinalgError> {
    let n = v.len();
    if n == 0 {
        return Err(LinalgError::EmptyInput);
    }
    check!(scratch.len() >= n, LinalgError::ShapeMismatch);
    let s = &mut scratch[..n];
    s.copy_from_slice(v.as_slice());
    s.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(s)
}

/// The `p`-th percentile (`0..=100`) of `v`.
///
/// With `k = p·n / 100`: when `k` is a whole number strictly between 0 and
/// `n`, the result is the average of the `k`-th and `(k+1)`-th smallest
/// values; otherwise it is the value at rank `⌊k⌋`, clamped to the largest.
///
/// `scratch` must hold at least `v.len()` elements. `ShapeMismatch` for
/// `p > 100`.
///
/// ```
/// use microla::{stats, Vector};
/// let mut data = [7.0_f64, 1.0, 9.0, 3.0, 5.0, 2.0, 8.0, 4.0, 10.0, 6.0];
/// let mut scratch = [0.0_f64; 10];
/// let v = Vector::new(&mut data);
/// assert_eq!(stats::percentile(&v, 25, &mut scratch).unwrap(), 3.0);
/// assert_eq!(stats::percentile(&v, 50, &mut scratch).unwrap(), 5.5);
/// ```
pub fn percentile<T: FloatScalar>(
    v: &Vector<'_, T>,
    p: usize,
    scratch: &mut [T],
) -> Result<T, LinalgError> {
    if p > 100 {
        return Err(LinalgError::ShapeMismatch);
    }
    let s = sorted(v, scratch)?;
    let n = s.len();
    let scaled = p * n;
    let k = scaled / 100;
    if scaled % 100 == 0 && k > 0 && k < n {
        Ok((s[k - 1] + s[k]) / T::two())
    } else {
        Ok(s[k.min(n - 1)])
    }
}

/// The 50th [`percentile`].
pub fn median<T: FloatScalar>(v: &Vector<'_, T>, scratch: &mut [T]) -> Result<T, LinalgError> {
    percentile(v, 50, scratch)
}

/// The 25th, 50th and 75th percentiles.
pub fn quartiles<T: FloatScalar>(
    v: &Vector<'_, T>,
    scratch: &mut [T],
) -> Result<(T, T, T), LinalgError> {
    Ok((
        percentile(v, 25, scratch)?,
        percentile(v, 50, scratch)?,
        percentile(v, 75, scratch)?,
    ))
}

/// Interquartile range, `q3 - q1`.
pub fn quartile_range<T: FloatScalar>(
    v: &Vector<'_, T>,
    scratch: &mut [T],
) -> Result<T, LinalgError> {
    let (q1, _, q3) = quartiles(v, scratch)?;
    Ok(q3 - q1)
}

/// Every value of maximal multiplicity in `v`, ascending, written to `out`.
///
/// `out` is resized to the number of modes; `ShapeMismatch` if its capacity
/// is too small. When all values are distinct, every value is a mode.
pub fn mode<T: FloatScalar>(
    v: &Vector<'_, T>,
    scratch: &mut [T],
    out: &mut Vector<'_, T>,
) -> Result<(), LinalgError> {
    let s = sorted(v, scratch)?;

    // Longest run and how many runs reach it.
    let (mut best, mut modes) = (0, 0);
    for run in s.chunk_by(|a, b| a == b) {
        match run.len().cmp(&best) {
            Ordering::Greater => {
                best = run.len();
                modes = 1;
            }
            Ordering::Equal => modes += 1,
            Ordering::Less => {}
        }
    }

    out.set_len(modes)?;
    let winners = s.chunk_by(|a, b| a == b).filter(|run| run.len() == best);
    for (o, run) in out.iter_mut().zip(winners) {
        *o = run[0];
    }
    Ok(())
}

/// Difference between the largest and smallest element.
pub fn data_range<T: FloatScalar>(v: &Vector<'_, T>) -> Result<T, LinalgError> {
    let mut it = v.iter();
    let &first = it.next().ok_or(LinalgError::EmptyInput)?;
    let (lo, hi) = it.fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    Ok(hi - lo)
}
