//! Square-matrix algorithms: minors, cofactors, adjugate, determinant,
//! inverse and symmetric eigen-decomposition.
//!
//! Each algorithm is a free function over [`MatrixRef`](crate::MatrixRef) /
//! [`MatrixMut`](crate::MatrixMut), so it runs on any matrix-like storage.
//! [`Matrix`](crate::Matrix) exposes all of them as methods.
//!
//! Nothing here allocates. The determinant recursion tracks the rows and
//! columns still in play as bit sets on the call stack instead of copying
//! submatrices, and the Jacobi solver works on either a stack buffer or a
//! caller-supplied workspace.
//!
//! Cofactor expansion costs `O(n!)` and the adjugate inverse needs `n²`
//! minors on top of that. Both are meant for the small orders typical of
//! embedded use (2×2 to 4×4); keep larger matrices off latency-sensitive
//! paths.

pub(crate) mod determinant;
pub(crate) mod eigen;

pub use determinant::{adjugate, cofactor, determinant, inverse, minor, MAX_DETERMINANT_ORDER};
pub use eigen::{jacobi_eigen, EigenConfig, EIGEN_MAX_ITER, MAX_EIGEN_ORDER};
