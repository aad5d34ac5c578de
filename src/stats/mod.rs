//! Descriptive statistics over [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) views.
//!
//! Every function here is a client of the kernel: it reads views, writes
//! caller-owned outputs, and reports failures as [`LinalgError`](crate::LinalgError).
//! Spread measures use the sample (`n − 1`) denominator.
//!
//! Order statistics need a sorted copy of the data. Rather than allocate,
//! they take a `scratch` slice at least as long as the input.
//!
//! | Function | Result |
//! |---|---|
//! | [`mean`], [`demean`] | arithmetic mean, centered copy |
//! | [`percentile`], [`median`], [`quartiles`], [`quartile_range`] | order statistics |
//! | [`mode`] | every most frequent value |
//! | [`data_range`] | max − min |
//! | [`variance`], [`std_dev`] | sample spread |
//! | [`covariance`], [`covariance_matrix`] | sample covariance |
//! | [`linear_regression`] | least-squares line and correlation |
//! | [`abs_err`], [`rel_err`] | error against an expected value |
//!
//! # Example
//!
//! ```
//! use microla::{stats, Vector};
//!
//! let mut data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let mut scratch = [0.0_f64; 8];
//! let v = Vector::new(&mut data);
//!
//! assert_eq!(stats::mean(&v).unwrap(), 5.0);
//! assert_eq!(stats::median(&v, &mut scratch).unwrap(), 4.5);
//! assert!((stats::variance(&v).unwrap() - 32.0 / 7.0).abs() < 1e-12);
//! ```

mod moments;
mod order;
mod regression;


pub use moments::{covariance, covariance_matrix, demean, mean, std_dev, variance};
pub use order::{data_range, median, mode, percentile, quartile_range, quartiles};
pub use regression::{abs_err, linear_regression, rel_err, LinearRegression};
