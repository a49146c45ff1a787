#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `pointview-linalg` is a small dense linear algebra library built for interactive 2D
//! point viewers. A point cloud is held as a `3 x N` [`Matrix`] of homogeneous columns
//! `(x, y, 1)` and moved around by multiplying it with 3x3 transforms.
//!
//! - **Vector**: fixed-length `f32` vector with componentwise arithmetic and dot product
//! - **Matrix**: column-major dense matrix with O(1) column access, products and growth
//! - **Row reduction**: Gaussian elimination with partial pivoting to reduced row-echelon form
//! - **Transforms**: homogeneous translation, scaling and rotation matrices
//!
//! None of the types are safe to mutate concurrently from several threads.
//!
//! # Quick Start
//!
//! ```rust
//! use pointview_linalg::{vector, Matrix};
//!
//! // two points, one per column
//! let points = Matrix::from_columns(&[[0.0f32, 0.0, 1.0], [10.0, 0.0, 1.0]]).unwrap();
//!
//! // scale by 2 then move right by 5
//! let moved = Matrix::product_chain(&[
//!     &Matrix::translation(5.0, 0.0),
//!     &Matrix::scaling(2.0),
//!     &points,
//! ])
//! .unwrap();
//! assert_eq!(moved.column(1).unwrap(), &[25.0, 0.0, 1.0]);
//!
//! let p = Matrix::scaling(2.0).times(&vector![3.0, 4.0, 1.0]).unwrap();
//! assert_eq!(p.as_slice(), &[6.0, 8.0, 1.0]);
//! ```

/// Error types for vector and matrix operations.
pub mod error;

/// Dense column-major matrix.
pub mod matrix;

/// Reduced row-echelon form.
pub mod rref;

/// Homogeneous 2D transform factories.
pub mod transforms;

/// Fixed-length vector.
pub mod vector;

pub use crate::error::LinalgError;
pub use crate::matrix::{Layout, Matrix};
pub use crate::rref::{RowReduceParams, DEFAULT_TOLERANCE};
pub use crate::vector::Vector;
