//! # microla
//!
//! Allocation-free linear algebra kernel for embedded and real-time targets.
//! Every operation works on caller-owned buffers through borrowed views; the
//! kernel never touches the heap and keeps no state between calls.
//!
//! ## Quick start
//!
//! ```
//! use microla::{Matrix, Vector};
//!
//! // Views over stack storage owned by the caller.
//! let mut a_buf = [4.0_f64, 7.0, 2.0, 6.0];
//! let mut inv_buf = [0.0_f64; 4];
//! let a = Matrix::new(2, 2, &mut a_buf).unwrap();
//! let mut inv = Matrix::new(2, 2, &mut inv_buf).unwrap();
//!
//! assert!((a.determinant().unwrap() - 10.0).abs() < 1e-12);
//! a.inverse(&mut inv).unwrap();
//! assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
//!
//! let mut v_buf = [3.0_f64, 4.0];
//! let v = Vector::new(&mut v_buf);
//! assert!((v.norm() - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vector`], a logical length over a borrowed `&mut [T]`.
//!   Element-wise arithmetic, n-ary sum and mean, dot and cross products,
//!   norms, unit normalization, subsets.
//!
//! - [`matrix`] — [`Matrix`], a row-major `rows × cols` view over a borrowed
//!   buffer. Initialization strategies ([`Init`]), cell/row/column access,
//!   shape-checked add/sub/multiply, transpose, min/max scans.
//!
//! - [`linalg`] — Square-matrix algorithms: minors, cofactors, adjugate,
//!   recursive determinant, adjugate inverse, and a Jacobi eigen solver.
//!   Free functions operate on `impl MatrixRef<T>` / `impl MatrixMut<T>`;
//!   `Matrix` has convenience methods for each.
//!
//! - [`stats`] — Descriptive statistics, covariance and linear regression
//!   built on the vector and matrix layers.
//!
//! - [`quaternion`] and [`fusion`] — Orientation carrier and the pluggable
//!   sensor-fusion driver interface, with a gyro-integrating reference driver.
//!
//! - [`traits`] — Element traits:
//!   - [`Scalar`] — storable elements
//!   - [`FloatScalar`] — `f32` / `f64`, used by everything that computes
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Errors
//!
//! Fallible operations return `Result<_, LinalgError>`. Scalar queries with no
//! error channel (`norm`, `magnitude`, `distance`) return NaN instead.
//!
//! ## Cargo features
//!
//! | Feature            | Default  | Description |
//! |--------------------|----------|-------------|
//! | `std`              | yes      | Hardware FPU via system libm, `std::error::Error` impl |
//! | `libm`             | baseline | Pure-Rust software float fallback |
//! | `bounds-checks`    | yes      | Runtime shape and index validation |
//! | `single-precision` | no       | [`Real`] is `f32` instead of `f64` |
//!
//! With `bounds-checks` disabled, shape agreement becomes a caller
//! precondition. Violations never cause undefined behavior: they either
//! panic on slice indexing or compute over the declared lengths.

#![cfg_attr(not(feature = "std"), no_std)]

mod error;
pub mod fusion;
pub mod linalg;
pub mod matrix;
pub mod quaternion;
pub mod stats;
pub mod traits;
pub mod vector;

pub use error::LinalgError;
pub use fusion::{FusionDriver, GyroIntegrator};
pub use linalg::{EigenConfig, EIGEN_MAX_ITER, MAX_DETERMINANT_ORDER, MAX_EIGEN_ORDER};
pub use matrix::{Init, Matrix};
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Real, Scalar};
pub use vector::Vector;
